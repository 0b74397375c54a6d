//! Test data for `rdfparse_iri`.
//!
//! If the feature `test_data` is enabled,
//! this module publicly exports arrays of test data,
//! for the benefit of other crates.

/// An array of valid IRI references, absolute or relative.
pub const POSITIVE_IRIS: &[&str] = &[
    "http:",
    "http://example.org",
    "http://127.0.0.1",
    "http://[::]",
    "http://%0D",
    "http://example.org/",
    "http://éxample.org/",
    "http://user:pw@example.org:1234/",
    "http://example.org/foo/bar/baz",
    "http://example.org/foo/bar/bàz",
    "http://example.org/foo/.././/bar",
    "http://example.org/!$&'()*+,=:@/foo%0D",
    "http://example.org/?abc",
    "http://example.org/#def",
    "http://example.org/?abc#def",
    "tag:abc/def",
    "tag:",
    "foo",
    "..",
    "//example.org",
    "?",
    "#",
    "?#",
    "http://example.org/#Andr%C3%A9",
    "?Andr%C3%A9#Andr%C3%A9",
];

/// An array of IRI references rejected in both strict and lax mode,
/// because they contain characters excluded by the IRIREF production.
pub const NEGATIVE_IRIS: &[&str] = &[
    "http://a/|",
    "http://a/ ",
    "http://a/{b}",
    "http://a/^",
    "http://a/`",
    "http://a/\\b",
    "http://a/\"",
    "http://a/\n",
    "|",
    " ",
];

/// An array of IRI references only accepted in lax mode.
pub const LAX_ONLY_IRIS: &[&str] = &[
    "http://[/",
    "http://a/[",
    "http://a/]",
    "http://a/\u{E000}",
    "http://a/%zz",
    "[",
    "]",
];

/// An array of relative IRI references and their absolute counterpart.
///
/// The base IRI used for resolution is `http://a/b/c/d;p?q`.
/// Examples are drawn from
/// <https://tools.ietf.org/html/rfc3986#section-5.4.1>
/// and
/// <https://tools.ietf.org/html/rfc3986#section-5.4.2>.
pub const RELATIVE_IRIS: &[(&str, &str)] = &[
    // normal examples
    ("g:h", "g:h"),
    ("g", "http://a/b/c/g"),
    ("./g", "http://a/b/c/g"),
    ("g/", "http://a/b/c/g/"),
    ("/g", "http://a/g"),
    ("//g", "http://g"),
    ("?y", "http://a/b/c/d;p?y"),
    ("g?y", "http://a/b/c/g?y"),
    ("#s", "http://a/b/c/d;p?q#s"),
    ("g#s", "http://a/b/c/g#s"),
    (";x", "http://a/b/c/;x"),
    ("", "http://a/b/c/d;p?q"),
    (".", "http://a/b/c/"),
    ("..", "http://a/b/"),
    ("../g", "http://a/b/g"),
    ("../..", "http://a/"),
    ("../../g", "http://a/g"),
    // abnormal examples
    ("../../../g", "http://a/g"),
    ("/./g", "http://a/g"),
    ("/../g", "http://a/g"),
    ("g.", "http://a/b/c/g."),
    ("..g", "http://a/b/c/..g"),
    ("./../g", "http://a/b/g"),
    ("g/../h", "http://a/b/c/h"),
    ("g;x=1/../y", "http://a/b/c/y"),
    ("g?y/../x", "http://a/b/c/g?y/../x"),
    ("g#s/../x", "http://a/b/c/g#s/../x"),
];
