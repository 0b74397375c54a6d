// this module is transparently re-exported by its parent `lib`
use crate::Error;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The concrete syntaxes supported by this crate.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Format {
    /// [N-Triples](https://www.w3.org/TR/n-triples/)
    NTriples,
    /// [Turtle](https://www.w3.org/TR/turtle/), the default since it is a superset of N-Triples
    #[default]
    Turtle,
}

impl Format {
    /// Guess the format of a file from its extension (`.nt` or `.ttl`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("nt") => Ok(Format::NTriples),
            Some(ext) if ext.eq_ignore_ascii_case("ttl") => Ok(Format::Turtle),
            _ => Err(Error::CantGuessSyntax(path.to_path_buf())),
        }
    }

    /// The media type of this format.
    pub fn media_type(&self) -> &'static str {
        match self {
            Format::NTriples => "application/n-triples",
            Format::Turtle => "text/turtle",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ntriples" | "nt" | "n-triples" => Ok(Format::NTriples),
            "turtle" | "ttl" => Ok(Format::Turtle),
            _ => Err(Error::UnknownFormat(s.into())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::NTriples => write!(f, "N-Triples"),
            Format::Turtle => write!(f, "Turtle"),
        }
    }
}
