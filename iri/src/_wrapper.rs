// this module is transparently re-exported by its parent `lib`
use crate::{is_absolute_iri, is_valid_iri_ref, InvalidIri};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// This wrapper guarantees that the underlying `str`
/// is a valid absolute IRI, as per RFC 3987.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Iri<T: Borrow<str>>(T);

impl<T: Borrow<str>> Iri<T> {
    /// Build a new [`Iri`] from `iri`,
    /// returning an error if it is not a valid absolute IRI.
    pub fn new(iri: T) -> Result<Self, InvalidIri> {
        if is_absolute_iri(iri.borrow()) {
            Ok(Iri(iri))
        } else {
            Err(InvalidIri::new(iri.borrow(), "not an absolute IRI"))
        }
    }

    /// Build a new [`Iri`] from trusted `iri`.
    ///
    /// It is not checked that `iri` is valid.
    /// This is used by lax parsers, which accept IRIs that RFC 3987 would reject.
    pub fn new_unchecked(iri: T) -> Self {
        Iri(iri)
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Returns the wrapped value, consuming `self`.
    pub fn unwrap(self) -> T {
        self.0
    }

    /// Borrow this [`Iri`] as another [`Iri`].
    pub fn borrowed(&self) -> Iri<&str> {
        Iri(self.as_str())
    }
}

impl<T: Borrow<str>> Borrow<str> for Iri<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T: Borrow<str>> Deref for Iri<T> {
    type Target = str;
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<T: Borrow<str>> PartialEq<str> for Iri<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: Borrow<str>> PartialEq<&str> for Iri<T> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<T: Borrow<str>> fmt::Display for Iri<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

/// This wrapper guarantees that the underlying `str`
/// is a valid IRI reference (absolute or relative), as per RFC 3987.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IriRef<T: Borrow<str>>(T);

impl<T: Borrow<str>> IriRef<T> {
    /// Build a new [`IriRef`] from `iri`,
    /// returning an error if it is not a valid IRI reference.
    pub fn new(iri: T) -> Result<Self, InvalidIri> {
        if is_valid_iri_ref(iri.borrow()) {
            Ok(IriRef(iri))
        } else {
            Err(InvalidIri::new(iri.borrow(), "not an IRI reference"))
        }
    }

    /// Build a new [`IriRef`] from trusted `iri`.
    pub fn new_unchecked(iri: T) -> Self {
        IriRef(iri)
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Returns the wrapped value, consuming `self`.
    pub fn unwrap(self) -> T {
        self.0
    }

    /// Whether this reference is an absolute IRI.
    pub fn is_absolute(&self) -> bool {
        is_absolute_iri(self.as_str())
    }

    /// Convert to an [`Iri`], if this reference is absolute.
    pub fn to_absolute(self) -> Result<Iri<T>, InvalidIri> {
        Iri::new(self.0)
    }
}

impl<T: Borrow<str>> From<Iri<T>> for IriRef<T> {
    fn from(iri: Iri<T>) -> Self {
        IriRef(iri.unwrap())
    }
}

impl<T: Borrow<str>> Deref for IriRef<T> {
    type Target = str;
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<T: Borrow<str>> fmt::Display for IriRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::*;

    #[test]
    fn absolute_are_accepted() {
        for txt in POSITIVE_IRIS {
            let res = Iri::new(*txt);
            assert_eq!(res.is_ok(), is_absolute_iri(txt), "<{txt}>");
        }
    }

    #[test]
    fn relative_are_rejected() {
        for (rel, abs) in RELATIVE_IRIS {
            if rel != abs {
                assert!(Iri::new(*rel).is_err(), "<{rel}>");
            }
            assert!(Iri::new(*abs).is_ok(), "<{abs}>");
        }
    }

    #[test]
    fn display_and_compare() {
        let iri = Iri::new("http://example.org/".to_string()).unwrap();
        assert_eq!(iri.to_string(), "<http://example.org/>");
        assert_eq!(iri, "http://example.org/");
        assert_eq!(iri.borrowed(), Iri::new_unchecked("http://example.org/"));
    }

    #[test]
    fn iri_refs() {
        for (rel, abs) in RELATIVE_IRIS {
            let r = IriRef::new(*rel).unwrap();
            assert_eq!(r.is_absolute(), rel == abs, "<{rel}>");
            assert!(IriRef::new(*abs).unwrap().to_absolute().is_ok(), "<{abs}>");
        }
        assert!(IriRef::new("a b").is_err());
        let r: IriRef<&str> = Iri::new_unchecked("tag:x").into();
        assert_eq!(r.to_string(), "<tag:x>");
    }
}
