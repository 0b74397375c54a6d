// this module is transparently re-exported by its parent `lib`
use rdfparse_iri::InvalidIri;
use std::io;
use std::path::PathBuf;

/// An error raised while configuring a parser, or while parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested format is not supported
    #[error("Unknown format {0:?}, expected 'ntriples' or 'turtle'")]
    UnknownFormat(String),
    /// The option is not recognized
    #[error("Unknown option {0:?}")]
    UnknownOption(String),
    /// The value given to a recognized option is invalid
    #[error("Invalid value {value:?} for option {key}: {reason}")]
    InvalidOptionValue {
        /// The option key
        key: String,
        /// The rejected value
        value: String,
        /// Why the value was rejected
        reason: String,
    },
    /// The base IRI is not a valid absolute IRI
    #[error("Invalid base IRI: {0}")]
    InvalidBase(InvalidIri),
    /// A predeclared prefix has an invalid label or namespace
    #[error("Invalid prefix declaration {prefix:?}: {reason}")]
    InvalidPrefix {
        /// The prefix label
        prefix: String,
        /// Why the declaration was rejected
        reason: String,
    },
    /// The format was not configured, and can not be guessed from the file name
    #[error("Can not guess syntax of {}", .0.display())]
    CantGuessSyntax(PathBuf),
    /// An IO error was encountered while opening the input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The input is not valid
    #[error("{0}")]
    Parse(#[from] rdfparse_turtle::parser::Error),
}

impl Error {
    /// Whether this error was raised by the configuration,
    /// before any input was read.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::Parse(_))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let err = Error::CantGuessSyntax("data/foo.txt".into());
        assert_eq!(err.to_string(), "Can not guess syntax of data/foo.txt");
        let err = Error::InvalidOptionValue {
            key: "errorMode".into(),
            value: "lenient".into(),
            reason: "expected 'strict' or 'permissive'".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value \"lenient\" for option errorMode: expected 'strict' or 'permissive'"
        );
    }

    #[test]
    fn config_errors() {
        assert!(Error::UnknownOption("foo".into()).is_config_error());
        let io = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert!(!Error::from(io).is_config_error());
    }
}
