//! This crate is part of `rdfparse`,
//! a parser for the [Turtle] and [N-Triples] concrete syntaxes of [RDF].
//!
//! It provides streaming parsers for both syntaxes.
//! Triples are pushed to a callback as soon as they are recognized,
//! so arbitrarily large documents can be parsed with bounded memory.
//!
//! ```
//! use rdfparse_api::source::TripleSource;
//! use rdfparse_turtle::parser::turtle;
//!
//! let ttl = "@prefix ex: <http://example.org/> . ex:s ex:p ex:o1, ex:o2 .";
//! let triples = turtle::parse_str(ttl).collect_triples().unwrap();
//! assert_eq!(triples.len(), 2);
//! ```
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

pub mod parser;

/// Declare a lazily compiled [`Regex`](regex::Regex),
/// or a [`RegexSet`](regex::RegexSet) if given an array of patterns.
macro_rules! lazy_regex {
    ($name: ident = [$($re: expr),* $(,)?]) => {
        lazy_static::lazy_static! {
            static ref $name: regex::RegexSet = regex::RegexSet::new([$($re),*]).unwrap();
        }
    };
    ($name: ident = $re: expr) => {
        lazy_static::lazy_static! {
            static ref $name: regex::Regex = regex::Regex::new($re).unwrap();
        }
    };
}
pub(crate) use lazy_regex;


#[cfg(test)]
pub(crate) fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
