//! Parsers for the [Turtle] and [N-Triples] concrete syntaxes,
//! and for the triples blocks of [SPARQL] queries.
//!
//! Both parsers implement [`TripleParser`](rdfparse_api::parser::TripleParser)
//! for any [`BufRead`](std::io::BufRead),
//! and produce a [`TripleReader`], which pushes [triples](rdfparse_term::Triple) to a callback.
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [SPARQL]: https://www.w3.org/TR/sparql11-query/

mod _common;
mod _context;
pub use _context::*;
mod _error;
pub use _error::*;
mod _reader;
pub use _reader::*;

pub mod nt;
pub mod triples_block;
pub mod turtle;
