//! Implementation of IRI resolution as per
//! [\[RFC 3986\]](https://tools.ietf.org/html/rfc3986#section-5).
//!
//! This module is based on <https://docs.rs/oxiri/>.
//!
//! NB: compared to [`Iri`], [`BaseIri`] is slower to build,
//! because it analyses the internal structure of the IRI,
//! in order to allow for efficient resolution of relative IRIs.

use crate::{InvalidIri, Iri};
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Deref;

pub use oxiri::IriParseError;
pub use oxiri::Iri as Oxiri;

/// A `BaseIri` is an absolute IRI against which relative IRIs can be resolved.
/// It stores the internal structure of the IRI,
/// to allow for efficient resolution of relative IRIs against itself.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BaseIri<T>(Oxiri<T>);

impl<T: Deref<Target = str>> BaseIri<T> {
    /// Creates a new `BaseIri` if `iri` is a valid absolute IRI,
    /// otherwise returns an [`InvalidIri`].
    pub fn new(iri: T) -> Result<Self, InvalidIri> {
        let txt = iri.deref().to_owned();
        Oxiri::parse(iri)
            .map(BaseIri)
            .map_err(|err| InvalidIri::new(txt, err))
    }

    /// Resolves `iri` against this `BaseIri`.
    ///
    /// Absolute IRIs are returned unchanged (modulo dot-segment removal).
    pub fn resolve(&self, iri: &str) -> Result<Iri<String>, InvalidIri> {
        self.0
            .resolve(iri)
            .map(|res| Iri::new_unchecked(res.into_inner()))
            .map_err(|err| InvalidIri::new(iri, err))
    }

    /// Resolves `iri` against this `BaseIri`, using `buf` to store the result.
    ///
    /// `buf` is cleared first.
    pub fn resolve_into<'a>(&self, iri: &str, buf: &'a mut String) -> Result<&'a str, InvalidIri> {
        buf.clear();
        match self.0.resolve_into(iri, buf) {
            Ok(()) => Ok(&buf[..]),
            Err(err) => Err(InvalidIri::new(iri, err)),
        }
    }

    /// Resolves `iri` against this `BaseIri` without validating it,
    /// using `buf` to store the result.
    ///
    /// IRI references that comply with RFC 3987 are resolved exactly as by [`BaseIri::resolve_into`].
    /// Other IRI references are split into their components with the generic pattern of
    /// [RFC 3986](https://tools.ietf.org/html/rfc3986#appendix-B),
    /// and resolved with the algorithm of
    /// [RFC 3986](https://tools.ietf.org/html/rfc3986#section-5.2).
    ///
    /// `buf` is cleared first.
    pub fn resolve_lax_into<'a>(&self, iri: &str, buf: &'a mut String) -> &'a str {
        if self.resolve_into(iri, buf).is_err() {
            buf.clear();
            resolve_components(self.as_str(), iri, buf);
        }
        &buf[..]
    }

    /// The underlying text of this base IRI.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl<T: Deref<Target = str>> Deref for BaseIri<T> {
    type Target = Oxiri<T>;
    fn deref(&self) -> &Oxiri<T> {
        &self.0
    }
}

lazy_static! {
    static ref COMPONENTS: Regex =
        Regex::new(r"(?s)^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$").unwrap();
}

/// The scheme, authority, path, query and fragment of an IRI reference.
struct Components<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> Components<'a> {
    fn split(iri: &'a str) -> Self {
        let Some(caps) = COMPONENTS.captures(iri) else {
            // unreachable, as every component is optional
            return Components {
                scheme: None,
                authority: None,
                path: iri,
                query: None,
                fragment: None,
            };
        };
        let part = |i| caps.get(i).map(|m| m.as_str());
        Components {
            scheme: part(1),
            authority: part(2),
            path: part(3).unwrap_or(""),
            query: part(4),
            fragment: part(5),
        }
    }
}

/// Resolve `iri` against `base`, and append the result to `buf`.
fn resolve_components(base: &str, iri: &str, buf: &mut String) {
    let r = Components::split(iri);
    let b = Components::split(base);
    let query = if r.scheme.is_some() || r.authority.is_some() || !r.path.is_empty() {
        r.query
    } else {
        r.query.or(b.query)
    };
    let scheme = r.scheme.or(b.scheme);
    if let Some(scheme) = scheme {
        buf.push_str(scheme);
        buf.push(':');
    }
    let authority = if r.scheme.is_some() || r.authority.is_some() {
        r.authority
    } else {
        b.authority
    };
    if let Some(authority) = authority {
        buf.push_str("//");
        buf.push_str(authority);
    }
    if r.scheme.is_some() || r.authority.is_some() || r.path.starts_with('/') {
        remove_dot_segments(r.path, buf);
    } else if r.path.is_empty() {
        buf.push_str(b.path);
    } else if b.authority.is_some() && b.path.is_empty() {
        remove_dot_segments(&format!("/{}", r.path), buf);
    } else {
        let dir = b.path.rfind('/').map_or("", |i| &b.path[..=i]);
        remove_dot_segments(&format!("{dir}{}", r.path), buf);
    }
    if let Some(query) = query {
        buf.push('?');
        buf.push_str(query);
    }
    if let Some(fragment) = r.fragment {
        buf.push('#');
        buf.push_str(fragment);
    }
}

/// Append `path` to `buf`, without its '.' and '..' segments.
fn remove_dot_segments(path: &str, buf: &mut String) {
    let start = buf.len();
    let mut input = path;
    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(buf, start);
        } else if input == "/.." {
            input = "/";
            pop_segment(buf, start);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            let from = usize::from(input.starts_with('/'));
            let end = input[from..].find('/').map_or(input.len(), |i| i + from);
            buf.push_str(&input[..end]);
            input = &input[end..];
        }
    }
}

fn pop_segment(buf: &mut String, start: usize) {
    let cut = buf[start..].rfind('/').map_or(start, |i| start + i);
    buf.truncate(cut);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::*;

    const BASE: &str = "http://a/b/c/d;p?q";

    #[test]
    fn positive() {
        for txt in POSITIVE_IRIS {
            let rbi = BaseIri::new(*txt);
            assert_eq!(rbi.is_ok(), crate::is_absolute_iri(txt), "<{txt}> → {rbi:?}");
            if let Ok(bi) = rbi {
                assert_eq!(bi.as_str(), *txt);
            }
        }
    }

    #[test]
    fn negative() {
        for txt in NEGATIVE_IRIS.iter().chain(LAX_ONLY_IRIS) {
            let rbi = BaseIri::new(*txt);
            assert!(rbi.is_err(), "<{txt}> → {rbi:?}");
        }
    }

    #[test]
    fn resolve() {
        let base = BaseIri::new(BASE).unwrap();
        for (rel, abs) in RELATIVE_IRIS {
            let got = base.resolve(rel).unwrap();
            assert_eq!(got.as_str(), *abs, "<{rel}>");
        }
    }

    #[test]
    fn resolve_into() {
        let base = BaseIri::new(BASE.to_string()).unwrap();
        let mut buf = String::from("garbage");
        for (rel, abs) in RELATIVE_IRIS {
            let got = base.resolve_into(rel, &mut buf).unwrap();
            assert_eq!(got, *abs, "<{rel}>");
        }
    }

    #[test]
    fn resolve_bad() {
        let base = BaseIri::new(BASE).unwrap();
        let mut buf = String::new();
        for txt in NEGATIVE_IRIS {
            let err = base.resolve(txt).unwrap_err();
            assert_eq!(err.text, *txt);
            assert!(base.resolve_into(txt, &mut buf).is_err());
        }
    }

    #[test]
    fn resolve_components_like_oxiri() {
        for (rel, abs) in RELATIVE_IRIS {
            let mut buf = String::new();
            resolve_components(BASE, rel, &mut buf);
            assert_eq!(buf, *abs, "<{rel}>");
        }
    }

    #[test]
    fn resolve_lax() {
        let base = BaseIri::new("http://a/b/c".to_string()).unwrap();
        let mut buf = String::new();
        for (rel, abs) in [
            ("a%zz", "http://a/b/a%zz"),
            ("../[x]/./y?%zz#%zz", "http://a/[x]/y?%zz#%zz"),
            ("/a/\u{E000}", "http://a/a/\u{E000}"),
            ("//[/x", "http://[/x"),
            ("?%zz", "http://a/b/c?%zz"),
            ("g;x/../%zz", "http://a/b/%zz"),
        ] {
            assert_eq!(base.resolve_lax_into(rel, &mut buf), abs, "<{rel}>");
        }
        for (rel, abs) in RELATIVE_IRIS {
            let base = BaseIri::new(BASE).unwrap();
            assert_eq!(base.resolve_lax_into(rel, &mut buf), *abs, "<{rel}>");
        }
    }
}
