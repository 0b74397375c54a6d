// this module is transparently re-exported by its parent `lib`
use crate::{InvalidIri, Result};
use lazy_static::lazy_static;
use oxiri::{Iri as Oxiri, IriRef as OxiriRef};
use regex::Regex;

lazy_static! {
    /// Characters that are excluded from IRIREF in Turtle and N-Triples
    static ref FORBIDDEN: Regex = Regex::new(r#"[\x00-\x20<>"{}|^`\\]"#).unwrap();
    static ref SCHEME: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap();
}

/// Check whether `txt` is a valid IRI reference (absolute or relative),
/// as per RFC 3987.
pub fn is_valid_iri_ref(txt: &str) -> bool {
    OxiriRef::parse(txt).is_ok()
}

/// Check whether `txt` is a valid absolute IRI, as per RFC 3987.
pub fn is_absolute_iri(txt: &str) -> bool {
    Oxiri::parse(txt).is_ok()
}

/// Check whether `txt` starts with a scheme, i.e. is syntactically absolute.
///
/// This is much weaker than [`is_absolute_iri`].
pub fn has_scheme(txt: &str) -> bool {
    SCHEME.is_match(txt)
}

/// Check that `txt` is acceptable as an IRI reference.
///
/// If `strict` is false, only the characters that the IRIREF production excludes are rejected.
/// If `strict` is true, `txt` must additionally be valid according to RFC 3987.
pub fn check_iri_ref(txt: &str, strict: bool) -> Result<()> {
    check_forbidden(txt)?;
    if strict {
        OxiriRef::parse(txt)
            .map(|_| ())
            .map_err(|err| InvalidIri::new(txt, err))
    } else {
        Ok(())
    }
}

/// Check that `txt` is acceptable as an absolute IRI.
///
/// If `strict` is false, `txt` only needs to start with a scheme
/// and to be free of the characters that the IRIREF production excludes.
pub fn check_absolute_iri(txt: &str, strict: bool) -> Result<()> {
    check_forbidden(txt)?;
    if strict {
        Oxiri::parse(txt)
            .map(|_| ())
            .map_err(|err| InvalidIri::new(txt, err))
    } else if has_scheme(txt) {
        Ok(())
    } else {
        Err(InvalidIri::new(txt, "no scheme"))
    }
}

fn check_forbidden(txt: &str) -> Result<()> {
    match FORBIDDEN.find(txt) {
        None => Ok(()),
        Some(m) => Err(InvalidIri::new(
            txt,
            format!("forbidden character {:?}", m.as_str()),
        )),
    }
}
