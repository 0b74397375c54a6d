// this module is transparently re-exported by its parent `lib`
use thiserror::Error;

/// Type alias for `Result` with default error [`InvalidIri`].
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = InvalidIri> = std::result::Result<T, E>;

/// This error is raised when an IRI or IRI reference is rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Invalid IRI <{text}>: {reason}")]
pub struct InvalidIri {
    /// The rejected text
    pub text: String,
    /// Why it was rejected
    pub reason: String,
}

impl InvalidIri {
    /// Build an [`InvalidIri`] for `text`.
    pub fn new<T: Into<String>, R: ToString>(text: T, reason: R) -> Self {
        InvalidIri {
            text: text.into(),
            reason: reason.to_string(),
        }
    }
}
