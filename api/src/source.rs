//! A source yields items, and may also fail in the process.
//! This module provides [`TripleSource`], a push-based source of triples.
//!
//! It provides an API similar to (a subset of) the [`Iterator`] API,
//! with methods such as [`for_each_triple`] and [`try_for_each_triple`].
//!
//! # Rationale (or Why not simply use `Iterator`?)
//!
//! A parser knows that a triple is complete at a point deep inside its recursive descent,
//! and must deliver it right there, before it continues with the rest of the statement.
//! Pushing each triple to a callback lets the parser keep its state on its own stack,
//! while the callback decides what to do with the triple (store it, count it, forward it...).
//!
//! Since the callback may itself fail,
//! errors are reported as a [`StreamError`],
//! distinguishing errors of the source from errors of the sink.
//!
//! [`for_each_triple`]: TripleSource::for_each_triple
//! [`try_for_each_triple`]: TripleSource::try_for_each_triple

mod _stream_error;
pub use _stream_error::*;
mod _triple;
pub use _triple::*;
