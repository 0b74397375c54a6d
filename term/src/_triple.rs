// this module is transparently re-exported by its parent `lib`
use crate::Term;
use thiserror::Error;

/// An RDF triple.
///
/// Its subject is never a literal, and its predicate is always an IRI.
/// In the triple patterns of a SPARQL triples block,
/// any of its components may also be a [variable](crate::GenericTerm::Variable).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Triple {
    s: Term,
    p: Term,
    o: Term,
}

impl Triple {
    /// Build a triple, checking the kinds of its subject and predicate.
    pub fn new(s: Term, p: Term, o: Term) -> Result<Self, InvalidTriple> {
        if s.is_literal() {
            Err(InvalidTriple::LiteralSubject(s))
        } else if !(p.is_iri() || p.is_variable()) {
            Err(InvalidTriple::NonIriPredicate(p))
        } else {
            Ok(Triple { s, p, o })
        }
    }

    /// Build a triple from components known to have the right kinds.
    pub fn new_unchecked(s: Term, p: Term, o: Term) -> Self {
        debug_assert!(!s.is_literal() && (p.is_iri() || p.is_variable()));
        Triple { s, p, o }
    }

    /// The subject of this triple.
    pub fn s(&self) -> &Term {
        &self.s
    }

    /// The predicate of this triple.
    pub fn p(&self) -> &Term {
        &self.p
    }

    /// The object of this triple.
    pub fn o(&self) -> &Term {
        &self.o
    }

    /// Consume this triple into its three components.
    pub fn into_spo(self) -> [Term; 3] {
        [self.s, self.p, self.o]
    }
}

/// Raised when trying to build a triple with components of the wrong kind.
#[derive(Debug, Error)]
pub enum InvalidTriple {
    /// A literal can not be the subject of a triple.
    #[error("Literal {0} can not be the subject of a triple")]
    LiteralSubject(Term),
    /// Only IRIs (and variables) can be the predicate of a triple.
    #[error("Term {0} can not be the predicate of a triple")]
    NonIriPredicate(Term),
}
