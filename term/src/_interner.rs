// this module is transparently re-exported by its parent `lib`
use crate::{GenericLiteral, GenericTerm, Term, TermRef};
use rdfparse_iri::Iri;
use std::collections::{HashMap, HashSet};
use std::ops::Index;
use std::sync::{Arc, PoisonError, RwLock};

/// A handle to a term stored in a [`TermInterner`].
///
/// Interning structurally equal terms in the same interner always yields equal handles.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TermHandle(usize);

impl TermHandle {
    /// The position of the term in its interner, in order of first insertion.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Hash-conses terms, so that equal terms share their storage.
///
/// Strings are stashed individually,
/// so distinct terms also share their common parts (e.g. datatypes or lexical forms).
/// Interning never fails.
#[derive(Clone, Debug, Default)]
pub struct TermInterner {
    strings: HashSet<Arc<str>>,
    terms: Vec<Term>,
    index: HashMap<Term, TermHandle>,
}

impl TermInterner {
    /// Create a new empty interner
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `term`, returning a handle to the stored equal term.
    pub fn intern(&mut self, term: TermRef) -> TermHandle {
        let term = term.map(|txt| self.stash(txt));
        if let Some(handle) = self.index.get(&term) {
            return *handle;
        }
        let handle = TermHandle(self.terms.len());
        self.terms.push(term.clone());
        self.index.insert(term, handle);
        handle
    }

    /// Intern the IRI `iri`.
    pub fn intern_iri(&mut self, iri: &str) -> TermHandle {
        self.intern(GenericTerm::Iri(Iri::new_unchecked(iri)))
    }

    /// Find the handle of a term equal to `term`, if it was already interned.
    pub fn find(&self, term: TermRef) -> Option<TermHandle> {
        let term = self.lookup(term)?;
        self.index.get(&term).copied()
    }

    /// Get the term associated with `handle`, if any.
    pub fn get(&self, handle: TermHandle) -> Option<&Term> {
        self.terms.get(handle.0)
    }

    /// The number of distinct terms in this interner.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether this interner is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The number of distinct strings shared by the terms of this interner.
    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    fn stash(&mut self, txt: &str) -> Arc<str> {
        if let Some(shared) = self.strings.get(txt) {
            return shared.clone();
        }
        let shared: Arc<str> = Arc::from(txt);
        self.strings.insert(shared.clone());
        shared
    }

    // rebuild `term` out of stashed strings, without stashing new ones
    fn lookup(&self, term: TermRef) -> Option<Term> {
        let get = |txt: &str| self.strings.get(txt).cloned();
        Some(match term {
            GenericTerm::Iri(iri) => GenericTerm::Iri(Iri::new_unchecked(get(iri.as_str())?)),
            GenericTerm::BlankNode(id) => GenericTerm::BlankNode(id),
            GenericTerm::Literal(GenericLiteral::Simple(lex)) => {
                GenericTerm::Literal(GenericLiteral::Simple(get(lex)?))
            }
            GenericTerm::Literal(GenericLiteral::LanguageString(lex, tag)) => GenericTerm::Literal(
                GenericLiteral::LanguageString(get(lex)?, get(tag)?),
            ),
            GenericTerm::Literal(GenericLiteral::Typed(lex, dt)) => GenericTerm::Literal(
                GenericLiteral::Typed(get(lex)?, Iri::new_unchecked(get(dt.as_str())?)),
            ),
            GenericTerm::Variable(name) => GenericTerm::Variable(get(name)?),
        })
    }
}

impl Index<TermHandle> for TermInterner {
    type Output = Term;

    fn index(&self, handle: TermHandle) -> &Term {
        &self.terms[handle.0]
    }
}

/// A [`TermInterner`] that can be shared between threads.
///
/// Cloning a `SharedInterner` yields another handle to the same underlying interner.
/// Looking up an already interned term only requires a read lock;
/// a write lock is taken when a new term must be inserted.
#[derive(Clone, Debug, Default)]
pub struct SharedInterner(Arc<RwLock<TermInterner>>);

impl SharedInterner {
    /// Create a new empty shared interner
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `term`, returning a handle to the stored equal term.
    pub fn intern(&self, term: TermRef) -> TermHandle {
        self.intern_and_get(term).0
    }

    /// Find the handle of a term equal to `term`, if it was already interned.
    pub fn find(&self, term: TermRef) -> Option<TermHandle> {
        self.read().find(term)
    }

    /// Get (a clone of) the term associated with `handle`, if any.
    pub fn get(&self, handle: TermHandle) -> Option<Term> {
        self.read().get(handle).cloned()
    }

    /// The number of distinct terms in this interner.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether this interner is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub(crate) fn intern_and_get(&self, term: TermRef) -> (TermHandle, Term) {
        {
            let interner = self.read();
            if let Some(handle) = interner.find(term.clone()) {
                return (handle, interner[handle].clone());
            }
        }
        let mut interner = self.0.write().unwrap_or_else(PoisonError::into_inner);
        // another thread may have inserted it in the meantime, which intern handles
        let handle = interner.intern(term);
        (handle, interner[handle].clone())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, TermInterner> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::BnodeScope;
    use rdfparse_api::ns::xsd;

    fn typed<'a>(lex: &'a str, dt: &'a str) -> TermRef<'a> {
        GenericTerm::Literal(GenericLiteral::Typed(lex, Iri::new_unchecked(dt)))
    }

    #[test]
    fn idempotent() {
        let mut interner = TermInterner::new();
        let h1 = interner.intern_iri("http://example.org/a");
        let h2 = interner.intern(typed("42", xsd::integer));
        let h3 = interner.intern_iri(&String::from("http://example.org/a"));
        assert_eq!(h1, h3);
        assert_ne!(h1, h2);
        assert_eq!(interner.len(), 2);
        match &interner[h1] {
            GenericTerm::Iri(iri) => {
                let stashed = interner.strings.get("http://example.org/a").unwrap();
                assert!(Arc::ptr_eq(&iri.clone().unwrap(), stashed));
            }
            _ => panic!("not an IRI"),
        }
    }

    #[test]
    fn strings_are_shared_between_terms() {
        let mut interner = TermInterner::new();
        interner.intern(typed("1", xsd::integer));
        interner.intern(typed("2", xsd::integer));
        interner.intern(GenericTerm::Literal(GenericLiteral::Simple("1")));
        interner.intern_iri(xsd::integer);
        assert_eq!(interner.len(), 4);
        assert_eq!(interner.string_count(), 3);
    }

    #[test]
    fn find() {
        let mut interner = TermInterner::new();
        assert_eq!(interner.find(typed("1", xsd::integer)), None);
        let h = interner.intern(typed("1", xsd::integer));
        assert_eq!(interner.find(typed("1", xsd::integer)), Some(h));
        // all the strings are known, but not that combination
        assert_eq!(interner.find(typed(xsd::integer, "1")), None);
        assert_eq!(interner.get(h).map(|t| t.as_ref()), Some(typed("1", xsd::integer)));
        assert!(interner.get(TermHandle(42)).is_none());
    }

    #[test]
    fn bnodes_from_distinct_scopes_are_distinct() {
        let mut interner = TermInterner::new();
        let b1 = BnodeScope::new().label_of("x");
        let b2 = BnodeScope::new().label_of("x");
        let h1 = interner.intern(GenericTerm::BlankNode(b1));
        let h2 = interner.intern(GenericTerm::BlankNode(b2));
        assert_ne!(h1, h2);
    }

    #[test]
    fn shared_across_threads() {
        let shared = SharedInterner::new();
        let iris: Vec<String> = (0..50).map(|i| format!("http://example.org/{}", i % 10)).collect();
        std::thread::scope(|s| {
            for chunk in iris.chunks(10) {
                let shared = shared.clone();
                s.spawn(move || {
                    for iri in chunk {
                        shared.intern(GenericTerm::Iri(Iri::new_unchecked(iri.as_str())));
                    }
                });
            }
        });
        assert_eq!(shared.len(), 10);
        let h = shared.find(GenericTerm::Iri(Iri::new_unchecked("http://example.org/3")));
        assert_eq!(shared.get(h.unwrap()).unwrap().to_string(), "<http://example.org/3>");
    }
}
