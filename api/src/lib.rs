//! This crate is part of `rdfparse`,
//! a parser for the [Turtle] and [N-Triples] concrete syntaxes of [RDF].
//!
//! It defines the generic API shared by the other crates:
//! * [triple sources](source::TripleSource), which push triples to a callback,
//! * [parsers](parser::TripleParser), which turn some input into a triple source,
//! * [prefixes](prefix) and their declaration history,
//! * a few [namespaces](ns) of well-known IRIs.
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [RDF]: https://www.w3.org/TR/rdf-primer/

#![deny(missing_docs)]

pub mod ns;
pub mod parser;
pub mod prefix;
pub mod source;

/// Re-export of [`std::error::Error`], used as a bound throughout this crate.
pub use std::error::Error;
