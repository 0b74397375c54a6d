//! `rdfparse` parses the [Turtle] and [N-Triples] concrete syntaxes of [RDF]
//! into a stream of [triples](Triple).
//!
//! This crate is a front-end to the other crates of the toolkit,
//! which it re-exports:
//! * [`api`] defines triple sources, parsers and prefixes,
//! * [`iri`] validates and resolves IRIs,
//! * [`term`] defines the term model and its interner,
//! * [`turtle`] provides the actual parsers.
//!
//! It adds a [`ParserConfig`], which selects the [`Format`]
//! and the options of the parser, and produces an [`RdfParser`].
//!
//! ```
//! use rdfparse::{Format, ParserConfig};
//!
//! let parser = ParserConfig::new()
//!     .with_format(Format::Turtle)
//!     .with_base_iri("http://example.org/")
//!     .parser()?;
//! let parsed = parser.collect_str("<s> <p> <o1>, <o2> .")?;
//! assert_eq!(parsed.triples.len(), 2);
//! assert_eq!(parsed.triples[0].s().to_string(), "<http://example.org/s>");
//! # Ok::<(), rdfparse::Error>(())
//! ```
//!
//! The same configuration can be built from textual options:
//!
//! ```
//! use rdfparse::ParserConfig;
//!
//! let config = ParserConfig::from_options([
//!     ("format", "ntriples"),
//!     ("strictIRIValidation", "false"),
//!     ("errorMode", "permissive"),
//! ])?;
//! let parsed = config.parser()?.collect_str("<x:s> <x:p> .\n<x:s> <x:p> <x:o> .\n")?;
//! assert_eq!(parsed.triples.len(), 1);
//! assert_eq!(parsed.errors.len(), 1);
//! # Ok::<(), rdfparse::Error>(())
//! ```
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

pub use rdfparse_api as api;
pub use rdfparse_iri as iri;
pub use rdfparse_term as term;
pub use rdfparse_turtle as turtle;

pub use rdfparse_term::{SharedInterner, Term, Triple};
pub use rdfparse_turtle::parser::ErrorMode;

mod _background;
pub use _background::*;
mod _config;
pub use _config::*;
mod _error;
pub use _error::*;
mod _format;
pub use _format::*;
mod _parser;
pub use _parser::*;

#[cfg(test)]
pub(crate) fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
