// this module is transparently re-exported by its parent `lib`
use crate::{SharedInterner, Term, TermInterner, TermRef};

/// A factory for terms.
///
/// Parsers create every term through a factory,
/// which may cache terms or their text to save memory.
pub trait TermFactory {
    /// Get an owned term equal to `term`.
    fn make_term(&mut self, term: TermRef) -> Term;
}

impl TermFactory for TermInterner {
    fn make_term(&mut self, term: TermRef) -> Term {
        let handle = self.intern(term);
        self[handle].clone()
    }
}

impl TermFactory for SharedInterner {
    fn make_term(&mut self, term: TermRef) -> Term {
        self.intern_and_get(term).1
    }
}

/// A [`TermFactory`] that does not cache anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCache;

impl TermFactory for NoCache {
    fn make_term(&mut self, term: TermRef) -> Term {
        term.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{GenericLiteral, GenericTerm};
    use std::sync::Arc;

    fn check_factory<F: TermFactory>(mut factory: F, shares_storage: bool) {
        let t1 = factory.make_term(GenericTerm::Literal(GenericLiteral::Simple("hello")));
        let t2 = factory.make_term(GenericTerm::Literal(GenericLiteral::Simple("hello")));
        assert_eq!(t1, t2);
        match (t1, t2) {
            (
                GenericTerm::Literal(GenericLiteral::Simple(lex1)),
                GenericTerm::Literal(GenericLiteral::Simple(lex2)),
            ) => assert_eq!(Arc::ptr_eq(&lex1, &lex2), shares_storage),
            _ => panic!("not simple literals"),
        }
    }

    #[test]
    fn interner() {
        check_factory(TermInterner::new(), true);
    }

    #[test]
    fn shared_interner() {
        let shared = SharedInterner::new();
        check_factory(shared.clone(), true);
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn no_cache() {
        check_factory(NoCache, false);
    }
}
