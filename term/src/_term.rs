// this module is transparently re-exported by its parent `lib`
use crate::{BnodeId, GenericLiteral};
use rdfparse_iri::Iri;
use std::borrow::Borrow;
use std::sync::Arc;

/// An RDF term, generic over the underlying text.
///
/// Two terms are equal iff they have the same kind and all their components are equal.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum GenericTerm<T: Borrow<str>> {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri(Iri<T>),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode(BnodeId),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal(GenericLiteral<T>),
    /// A [SPARQL variable](https://www.w3.org/TR/sparql11-query/#rVar),
    /// named without its leading '?' or '$'.
    ///
    /// Variables only occur in the triple patterns of a SPARQL triples block.
    Variable(T),
}

/// The owned term type produced by the parsers.
pub type Term = GenericTerm<Arc<str>>;

/// A term borrowing its text.
pub type TermRef<'a> = GenericTerm<&'a str>;

/// The owned literal type used by [`Term`].
pub type Literal = GenericLiteral<Arc<str>>;

impl<T: Borrow<str>> GenericTerm<T> {
    /// Is this term an IRI?
    pub fn is_iri(&self) -> bool {
        matches!(self, GenericTerm::Iri(..))
    }

    /// Is this term a blank node?
    pub fn is_blank_node(&self) -> bool {
        matches!(self, GenericTerm::BlankNode(..))
    }

    /// Is this term a literal?
    pub fn is_literal(&self) -> bool {
        matches!(self, GenericTerm::Literal(..))
    }

    /// Is this term a variable?
    pub fn is_variable(&self) -> bool {
        matches!(self, GenericTerm::Variable(..))
    }

    /// The IRI of this term, if it is an IRI.
    pub fn iri(&self) -> Option<Iri<&str>> {
        match self {
            GenericTerm::Iri(iri) => Some(iri.borrowed()),
            _ => None,
        }
    }

    /// The identifier of this term, if it is a blank node.
    pub fn bnode_id(&self) -> Option<BnodeId> {
        match self {
            GenericTerm::BlankNode(id) => Some(*id),
            _ => None,
        }
    }

    /// The literal of this term, if it is a literal.
    pub fn literal(&self) -> Option<&GenericLiteral<T>> {
        match self {
            GenericTerm::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The name of this term, if it is a variable.
    pub fn variable(&self) -> Option<&str> {
        match self {
            GenericTerm::Variable(name) => Some(name.borrow()),
            _ => None,
        }
    }

    /// Borrow this term as a [`TermRef`].
    pub fn as_ref(&self) -> TermRef<'_> {
        match self {
            GenericTerm::Iri(iri) => GenericTerm::Iri(iri.borrowed()),
            GenericTerm::BlankNode(id) => GenericTerm::BlankNode(*id),
            GenericTerm::Literal(lit) => GenericTerm::Literal(lit.as_ref()),
            GenericTerm::Variable(name) => GenericTerm::Variable(name.borrow()),
        }
    }

    /// Convert the underlying text of this term using `f`.
    pub fn map<U, F>(self, mut f: F) -> GenericTerm<U>
    where
        U: Borrow<str>,
        F: FnMut(T) -> U,
    {
        match self {
            GenericTerm::Iri(iri) => GenericTerm::Iri(Iri::new_unchecked(f(iri.unwrap()))),
            GenericTerm::BlankNode(id) => GenericTerm::BlankNode(id),
            GenericTerm::Literal(lit) => GenericTerm::Literal(lit.map(f)),
            GenericTerm::Variable(name) => GenericTerm::Variable(f(name)),
        }
    }
}

impl<'a> From<TermRef<'a>> for Term {
    fn from(value: TermRef<'a>) -> Self {
        value.map(Arc::from)
    }
}

impl<T: Borrow<str>> From<Iri<T>> for GenericTerm<T> {
    fn from(value: Iri<T>) -> Self {
        GenericTerm::Iri(value)
    }
}

impl<T: Borrow<str>> From<BnodeId> for GenericTerm<T> {
    fn from(value: BnodeId) -> Self {
        GenericTerm::BlankNode(value)
    }
}

impl<T: Borrow<str>> From<GenericLiteral<T>> for GenericTerm<T> {
    fn from(value: GenericLiteral<T>) -> Self {
        GenericTerm::Literal(value)
    }
}
