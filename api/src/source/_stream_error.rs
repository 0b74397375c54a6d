// this module is transparently re-exported by its parent `source`
use crate::Error;

/// The error of a [`TripleSource`](crate::source::TripleSource)
/// pushing triples into a callback that may itself fail.
///
/// The variants are re-exported, so that callers can write
/// `.map_err(SourceError)` or `.map_err(SinkError)`.
#[derive(Debug, thiserror::Error)]
pub enum StreamError<SourceErr, SinkErr>
where
    SourceErr: Error,
    SinkErr: Error,
{
    /// The source (typically a parser) failed
    #[error("Source failed: {0}")]
    SourceError(#[source] SourceErr),
    /// The callback failed
    #[error("Sink failed: {0}")]
    SinkError(#[source] SinkErr),
}
pub use StreamError::*;

impl<SourceErr, SinkErr> StreamError<SourceErr, SinkErr>
where
    SourceErr: Error,
    SinkErr: Error,
{
    /// Whether the source failed.
    pub fn is_source_error(&self) -> bool {
        matches!(self, SourceError(_))
    }

    /// Whether the callback failed.
    pub fn is_sink_error(&self) -> bool {
        matches!(self, SinkError(_))
    }

    /// Convert either error into a common type.
    pub fn inner_into<Err>(self) -> Err
    where
        SourceErr: Into<Err>,
        SinkErr: Into<Err>,
    {
        match self {
            SourceError(err) => err.into(),
            SinkError(err) => err.into(),
        }
    }
}

/// The result of pushing triples from a source into a callback.
pub type StreamResult<T, E1, E2> = Result<T, StreamError<E1, E2>>;
