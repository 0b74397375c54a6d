// this module is transparently re-exported by its parent `lib`
use crate::{Error, Format};
use rdfparse_api::parser::TripleParser;
use rdfparse_api::source::TripleSource;
use rdfparse_term::{Term, Triple};
use rdfparse_turtle::parser::nt::NTriplesParser;
use rdfparse_turtle::parser::triples_block::TriplesBlockParser;
use rdfparse_turtle::parser::turtle::TurtleParser;
use rdfparse_turtle::parser::{ErrorMode, TripleReader};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A parser for any of the supported [formats](Format),
/// built by [`ParserConfig::parser`](crate::ParserConfig::parser).
#[derive(Clone, Debug)]
pub struct RdfParser {
    format: Option<Format>,
    turtle: TurtleParser,
    nt: NTriplesParser,
}

/// The outcome of a complete parse.
#[derive(Debug, Default)]
pub struct Parsed {
    /// The triples, in the order in which they were emitted.
    pub triples: Vec<Triple>,
    /// The errors recorded in [permissive](ErrorMode::Permissive) mode.
    pub errors: Vec<rdfparse_turtle::parser::Error>,
}

impl RdfParser {
    pub(crate) fn new(format: Option<Format>, turtle: TurtleParser, nt: NTriplesParser) -> Self {
        RdfParser { format, turtle, nt }
    }

    /// The configured format, if any.
    pub fn format(&self) -> Option<Format> {
        self.format
    }

    /// The format used to parse the file at `path`:
    /// the configured one if any, otherwise the one guessed from its extension.
    pub fn format_for_path<P: AsRef<Path>>(&self, path: P) -> Result<Format, Error> {
        match self.format {
            Some(format) => Ok(format),
            None => Format::from_path(path),
        }
    }

    /// Parse `read` in the given format.
    pub fn parse_read_as<B: BufRead>(&self, format: Format, read: B) -> TripleReader<B> {
        match format {
            Format::Turtle => self.turtle.parse(read),
            Format::NTriples => self.nt.parse(read),
        }
    }

    /// Parse `read` in the configured format (Turtle by default).
    pub fn parse_read<B: BufRead>(&self, read: B) -> TripleReader<B> {
        self.parse_read_as(self.format.unwrap_or_default(), read)
    }

    /// Parse `txt` in the configured format (Turtle by default).
    pub fn parse_str<'a>(&self, txt: &'a str) -> TripleReader<&'a [u8]> {
        self.parse_read(txt.as_bytes())
    }

    /// Open the file at `path` and parse it,
    /// in the configured format, or in the format guessed from its extension.
    ///
    /// Fails before opening the file if the format can not be determined.
    pub fn parse_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<TripleReader<BufReader<File>>, Error> {
        let path = path.as_ref();
        let format = self.format_for_path(path)?;
        log::debug!("parsing {} as {format}", path.display());
        let file = File::open(path)?;
        Ok(self.parse_read_as(format, BufReader::new(file)))
    }

    /// Parse `txt` completely, and collect its triples.
    pub fn collect_str(&self, txt: &str) -> Result<Parsed, Error> {
        collect(self.parse_str(txt))
    }

    /// Parse the file at `path` completely, and collect its triples.
    pub fn collect_file<P: AsRef<Path>>(&self, path: P) -> Result<Parsed, Error> {
        collect(self.parse_file(path)?)
    }

    /// Parse `txt` as the triples block of a SPARQL query,
    /// with the configured base IRI, prefixes and options, regardless of the configured format.
    ///
    /// The triples produced are triple patterns, whose components may be variables.
    pub fn parse_triples_block<'a>(&self, txt: &'a str) -> TripleReader<&'a [u8]> {
        TriplesBlockParser::from(self.turtle.clone()).parse_str(txt)
    }

    /// Parse `txt` completely as a SPARQL triples block, and collect its triple patterns.
    pub fn collect_triples_block(&self, txt: &str) -> Result<Parsed, Error> {
        collect(self.parse_triples_block(txt))
    }

    /// Check whether `txt` is valid in the configured format,
    /// disregarding the configured error mode.
    pub fn is_parsable(&self, txt: &str) -> bool {
        let format = self.format.unwrap_or_default();
        let mut reader = match format {
            Format::Turtle => TurtleParser {
                error_mode: ErrorMode::Strict,
                ..self.turtle.clone()
            }
            .parse_str(txt),
            Format::NTriples => NTriplesParser {
                error_mode: ErrorMode::Strict,
                ..self.nt.clone()
            }
            .parse_str(txt),
        };
        match reader.for_each_triple(|_| ()) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("not parsable as {format}: {err}");
                false
            }
        }
    }

    /// Parse a single Turtle term (surrounded by optional white spaces),
    /// with the configured base IRI and prefixes.
    pub fn parse_term(&self, txt: &str) -> Result<Term, Error> {
        Ok(self.turtle.parse_term(txt)?)
    }
}

impl Default for RdfParser {
    fn default() -> Self {
        RdfParser::new(None, TurtleParser::default(), NTriplesParser::default())
    }
}

impl<B: BufRead> TripleParser<B> for RdfParser {
    type Source = TripleReader<B>;
    fn parse(&self, data: B) -> Self::Source {
        self.parse_read(data)
    }
}

fn collect<B: BufRead>(mut reader: TripleReader<B>) -> Result<Parsed, Error> {
    let mut triples = vec![];
    reader.for_each_triple(|t| triples.push(t))?;
    let errors = reader.take_errors();
    log::debug!("collected {} triples, {} errors", triples.len(), errors.len());
    Ok(Parsed { triples, errors })
}
