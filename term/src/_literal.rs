// this module is transparently re-exported by its parent `lib`
use rdfparse_api::ns::{rdf, xsd};
use rdfparse_iri::Iri;
use std::borrow::Borrow;

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal).
///
/// This type is mostly required as one of the variants of [`GenericTerm`](crate::GenericTerm).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum GenericLiteral<T: Borrow<str>> {
    /// A plain literal, whose datatype is implicitly `xsd:string`
    Simple(T),
    /// An RDF [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string)
    LanguageString(T, T),
    /// A literal with an explicit datatype, other than `xsd:string`
    Typed(T, Iri<T>),
}

impl<T: Borrow<str>> GenericLiteral<T> {
    /// Build a typed literal.
    ///
    /// If `datatype` is `xsd:string`, a [`Simple`](GenericLiteral::Simple) literal is returned,
    /// so that both notations yield the same term.
    pub fn new_typed(lex: T, datatype: Iri<T>) -> Self {
        if datatype.as_str() == xsd::string {
            GenericLiteral::Simple(lex)
        } else {
            GenericLiteral::Typed(lex, datatype)
        }
    }

    /// The [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form) of this literal
    pub fn lexical_form(&self) -> &str {
        match self {
            GenericLiteral::Simple(lex) => lex,
            GenericLiteral::LanguageString(lex, _) => lex,
            GenericLiteral::Typed(lex, _) => lex,
        }
        .borrow()
    }

    /// The [language tag](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tag) of this literal, if any
    pub fn language_tag(&self) -> Option<&str> {
        match self {
            GenericLiteral::LanguageString(_, tag) => Some(tag.borrow()),
            _ => None,
        }
    }

    /// The [datatype](https://www.w3.org/TR/rdf11-concepts/#dfn-datatype-iri) of this literal.
    ///
    /// Simple literals have datatype `xsd:string`,
    /// language-tagged strings have datatype `rdf:langString`.
    pub fn datatype(&self) -> Iri<&str> {
        match self {
            GenericLiteral::Simple(_) => Iri::new_unchecked(xsd::string),
            GenericLiteral::LanguageString(..) => Iri::new_unchecked(rdf::langString),
            GenericLiteral::Typed(_, dt) => dt.borrowed(),
        }
    }

    /// Borrow this literal as a `GenericLiteral<&str>`.
    pub fn as_ref(&self) -> GenericLiteral<&str> {
        match self {
            GenericLiteral::Simple(lex) => GenericLiteral::Simple(lex.borrow()),
            GenericLiteral::LanguageString(lex, tag) => {
                GenericLiteral::LanguageString(lex.borrow(), tag.borrow())
            }
            GenericLiteral::Typed(lex, dt) => GenericLiteral::Typed(lex.borrow(), dt.borrowed()),
        }
    }

    /// Convert the underlying text of this literal using `f`.
    pub fn map<U, F>(self, mut f: F) -> GenericLiteral<U>
    where
        U: Borrow<str>,
        F: FnMut(T) -> U,
    {
        match self {
            GenericLiteral::Simple(lex) => GenericLiteral::Simple(f(lex)),
            GenericLiteral::LanguageString(lex, tag) => GenericLiteral::LanguageString(f(lex), f(tag)),
            GenericLiteral::Typed(lex, dt) => {
                GenericLiteral::Typed(f(lex), Iri::new_unchecked(f(dt.unwrap())))
            }
        }
    }
}
