//! This crate is part of `rdfparse`,
//! a parser for the [Turtle] and [N-Triples] concrete syntaxes of [RDF].
//!
//! It provides functions for validating IRIs and IRI references,
//! either strictly (as per [RFC 3987]) or laxly (only rejecting characters
//! that can never appear in an IRI reference of these syntaxes),
//! as well as for resolving IRI references against a given base IRI.
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987

#![deny(missing_docs)]

mod _check;
pub use _check::*;
mod _error;
pub use _error::*;
mod _wrapper;
pub use _wrapper::*;
pub mod resolve;

#[cfg(any(test, feature = "test_data"))]
pub mod test;
