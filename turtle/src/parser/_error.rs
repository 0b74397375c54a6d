//! I define [`Error`], [`ErrorKind`] and [`ErrorMode`].

use rdfparse_api::parser::{Location, WithLocation};
use rdfparse_iri::InvalidIri;
use std::str::FromStr;

/// Parsing error, capturing the position in the input where the error was encountered.
#[derive(thiserror::Error, Debug)]
#[error("{kind} at {line}:{col}")]
pub struct Error {
    kind: ErrorKind,
    offset: usize,
    line: usize,
    col: usize,
}

impl Error {
    /// Construct an [`Error`]
    pub fn new<E: Into<ErrorKind>>(err: E, offset: usize, line: usize, col: usize) -> Self {
        Error {
            kind: err.into(),
            offset,
            line,
            col,
        }
    }

    /// Return the [kind][`ErrorKind`]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Return the byte offset (starting at 0) of the error in the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Return the position in the input.
    ///
    /// NB: lines and columns are numbered from 1,
    /// and columns count characters rather than bytes.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    /// Display this error with context (typically, the name of the parsed file).
    pub fn in_context(&self, context: &str) -> String {
        format!("{context}:{}:{} {}", self.line, self.col, self.kind)
    }
}

impl WithLocation for Error {
    fn location(&self) -> Location {
        Location::from_lico(self.line, self.col)
    }
}

/// Kind of [parsing errors][`Error`]
#[derive(thiserror::Error, Debug)]
pub enum ErrorKind {
    /// The input does not match any alternative of the grammar
    #[error("Expected {0}")]
    Syntax(String),
    /// A string literal is not closed
    #[error("Unterminated literal")]
    UnterminatedLiteral,
    /// Invalid escape sequence
    #[error("Invalid escape sequence")]
    InvalidEscape,
    /// Unescaped control character in a string literal
    #[error("Unescaped control character U+{0:04X}")]
    ControlCharacter(u32),
    /// Unknown prefix in a prefixed name
    #[error("Unknown prefix: {0}")]
    UnresolvedPrefix(String),
    /// Invalid IRI
    #[error("{0}")]
    InvalidIri(#[from] InvalidIri),
    /// Unexpected end of data
    #[error("Unexpected end of data, expected {0}")]
    UnexpectedEof(String),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How parsers react to errors in their input.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ErrorMode {
    /// Stop at the first error.
    #[default]
    Strict,
    /// Record each error, skip to the end of the faulty statement, and carry on.
    Permissive,
}

impl FromStr for ErrorMode {
    type Err = UnknownErrorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(ErrorMode::Strict),
            "permissive" => Ok(ErrorMode::Permissive),
            _ => Err(UnknownErrorMode(s.into())),
        }
    }
}

/// Raised when parsing an unknown [`ErrorMode`].
#[derive(thiserror::Error, Debug)]
#[error("Unknown error mode {0:?}, expected 'strict' or 'permissive'")]
pub struct UnknownErrorMode(pub String);

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn display() {
        let err = Error::new(ErrorKind::Syntax("object".into()), 12, 2, 5);
        assert_eq!(err.to_string(), "Expected object at 2:5");
        assert_eq!(err.in_context("foo.ttl"), "foo.ttl:2:5 Expected object");
        assert_eq!(err.location().to_string(), "2:5");
        assert_eq!(err.offset(), 12);
    }

    #[test_case("strict", ErrorMode::Strict)]
    #[test_case("Permissive", ErrorMode::Permissive)]
    fn error_mode(txt: &str, expected: ErrorMode) {
        assert_eq!(txt.parse::<ErrorMode>().unwrap(), expected);
    }

    #[test]
    fn unknown_error_mode() {
        assert!("lenient".parse::<ErrorMode>().is_err());
    }
}
