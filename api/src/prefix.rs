//! RDF-related languages (e.g. Turtle, SPARQL) use prefixes to shorten IRIs.
//! This module provides a wrapper guaranteeing that a prefix label is valid,
//! and [`PrefixLog`], an append-only history of prefix declarations.

mod _prefix;
pub use _prefix::*;
mod _prefix_log;
pub use _prefix_log::*;
