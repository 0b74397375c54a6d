// this module is transparently re-exported by its parent `prefix`
use regex::Regex;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

lazy_static::lazy_static! {
    /// Match the PN_PREFIX production of Turtle/SPARQL.
    pub(crate) static ref PN_PREFIX: Regex = Regex::new(r"(?x)^
        # PN_CHAR_BASE
        [A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}]
        (
            # [ PN_CHARS | '.' ]*
            [A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}.-]*
            # PN_CHARS
            [A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}-]
        )?
    $").unwrap();
}

/// Check whether a `str` is a valid Turtle/SPARQL prefix label (matches `PN_PREFIX?`).
///
/// The empty label is valid.
pub fn is_valid_prefix(txt: &str) -> bool {
    txt.is_empty() || PN_PREFIX.is_match(txt)
}

/// This wrapper guarantees that the underlying `str`
/// satisfies the `PN_PREFIX?` rule in Turtle/SPARQL.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Prefix<T: Borrow<str>>(T);

impl<T: Borrow<str>> Prefix<T> {
    /// Build a new [`Prefix`] from `prefix`,
    /// returning an error if it is not a valid prefix label.
    pub fn new(prefix: T) -> Result<Self, InvalidPrefix> {
        if is_valid_prefix(prefix.borrow()) {
            Ok(Prefix(prefix))
        } else {
            Err(InvalidPrefix(prefix.borrow().to_string()))
        }
    }

    /// Build a new [`Prefix`] from trusted `prefix`.
    pub fn new_unchecked(prefix: T) -> Self {
        debug_assert!(is_valid_prefix(prefix.borrow()), "{}", prefix.borrow());
        Prefix(prefix)
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Returns the wrapped value, consuming `self`.
    pub fn unwrap(self) -> T {
        self.0
    }
}

impl<T: Borrow<str>> Borrow<str> for Prefix<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T: Borrow<str>> Deref for Prefix<T> {
    type Target = str;
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<T: Borrow<str>> fmt::Display for Prefix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.as_str())
    }
}

/// This error is raised when trying to build an invalid prefix.
#[derive(Debug, Error)]
#[error("The given prefix '{0}' does not match PN_PREFIX?")]
pub struct InvalidPrefix(pub String);
