//! Standard namespaces used by the Turtle-family parsers.
//!
//! Each namespace module exposes its `PREFIX` and one constant per IRI:
//! ```
//! use rdfparse_api::ns::rdf;
//! assert_eq!(rdf::first, "http://www.w3.org/1999/02/22-rdf-syntax-ns#first");
//! ```

pub use rdfparse_iri::Iri;

/// Create a "namespace module"
/// defining a set of IRIs within a given IRI space.
///
/// Identifiers that are not valid Rust identifiers (or clash with keywords)
/// can be given an explicit suffix after the `;`.
///
/// # Tests
/// This macro also creates a test module checking that all created IRIs are valid.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*; $($r_id:ident, $r_sf:literal),*) => {
        /// Prefix used in this namespace.
        pub const PREFIX: &str = $iri_prefix;
        $(
            /// Generated IRI.
            #[allow(non_upper_case_globals)]
            pub const $suffix: &str = concat!($iri_prefix, stringify!($suffix));
        )*
        $(
            /// Generated IRI.
            #[allow(non_upper_case_globals)]
            pub const $r_id: &str = concat!($iri_prefix, $r_sf);
        )*

        /// Test module for checking that IRIs are valid
        #[cfg(test)]
        mod test_valid_iri {
            $(
                #[allow(non_snake_case)]
                #[test]
                fn $suffix() {
                    assert!($crate::ns::Iri::new(super::$suffix).is_ok());
                }
            )*
            $(
                #[allow(non_snake_case)]
                #[test]
                fn $r_id() {
                    assert!($crate::ns::Iri::new(super::$r_id).is_ok());
                }
            )*
        }
    };
    ($iri_prefix:literal, $($suffix:ident),*) => {
        $crate::namespace!($iri_prefix, $($suffix),*;);
    };
}

/// The standard `rdf:` namespace.
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        first,
        rest,
        nil,
        langString;
        type_, "type"
    );
}

/// The standard `xsd:` namespace.
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        boolean,
        decimal,
        double,
        integer,
        string
    );
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn suffixes() {
        assert_eq!(rdf::type_, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
        assert_eq!(rdf::nil, "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil");
        assert_eq!(xsd::integer, "http://www.w3.org/2001/XMLSchema#integer");
        assert!(xsd::string.starts_with(xsd::PREFIX));
    }
}
