//! This crate is part of `rdfparse`,
//! a parser for the [Turtle] and [N-Triples] concrete syntaxes of [RDF].
//!
//! It defines the term model produced by the parsers:
//! * [`GenericTerm`] and [`GenericLiteral`], generic over the underlying text,
//!   with [`Term`] (backed by [`Arc<str>`](std::sync::Arc)) and [`TermRef`] (borrowed) as
//!   their most common instances;
//! * [`Triple`], which guarantees that its subject is not a literal
//!   and that its predicate is an IRI (or a variable, in triple patterns);
//! * [`TermInterner`] and [`SharedInterner`], which hash-cons terms so that equal terms
//!   share their storage;
//! * [`BnodeScope`], which maps blank node labels to identifiers local to one parse.
//!
//! All terms implement [`Display`](std::fmt::Display) using the N-Triples syntax.
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

mod _bnode;
pub use _bnode::*;
mod _display;
mod _factory;
pub use _factory::*;
mod _interner;
pub use _interner::*;
mod _literal;
pub use _literal::*;
mod _term;
pub use _term::*;
mod _triple;
pub use _triple::*;
