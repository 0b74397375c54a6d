// this module is transparently re-exported by its parent `lib`
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_SCOPE: AtomicU32 = AtomicU32::new(0);

/// The identity of a blank node.
///
/// It is made of the id of the [`BnodeScope`] that allocated it,
/// and of an index local to that scope.
/// Blank nodes allocated by different scopes are therefore never equal,
/// even if they were produced from the same label.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BnodeId {
    scope: u32,
    index: u64,
}

impl BnodeId {
    /// The id of the scope that allocated this blank node.
    pub fn scope(&self) -> u32 {
        self.scope
    }

    /// The index of this blank node in its scope.
    pub fn index(&self) -> u64 {
        self.index
    }
}

/// Maps blank node labels to [`BnodeId`]s, for the lifetime of one parse
/// (or of several parses, when a context is explicitly carried over).
///
/// Labelled blank nodes get the same id every time their label is seen;
/// anonymous blank nodes (`[]`, collections) get a [fresh](BnodeScope::fresh) id every time.
#[derive(Debug)]
pub struct BnodeScope {
    id: u32,
    labels: HashMap<Box<str>, u64>,
    next: u64,
}

/// A point in the history of a [`BnodeScope`], to which it can be [rolled back](BnodeScope::rollback).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScopeMark(u64);

impl BnodeScope {
    /// Create a new scope, with an id that no other scope of this process has.
    pub fn new() -> Self {
        BnodeScope {
            id: NEXT_SCOPE.fetch_add(1, Ordering::Relaxed),
            labels: HashMap::new(),
            next: 0,
        }
    }

    /// The process-unique id of this scope.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The blank node associated with `label`,
    /// allocating a new one if `label` was never seen in this scope.
    pub fn label_of(&mut self, label: &str) -> BnodeId {
        let index = match self.labels.get(label) {
            Some(index) => *index,
            None => {
                let index = self.next;
                self.next += 1;
                self.labels.insert(label.into(), index);
                index
            }
        };
        BnodeId {
            scope: self.id,
            index,
        }
    }

    /// A blank node distinct from all the blank nodes allocated so far.
    pub fn fresh(&mut self) -> BnodeId {
        let index = self.next;
        self.next += 1;
        BnodeId {
            scope: self.id,
            index,
        }
    }

    /// Remember the current state of this scope.
    pub fn checkpoint(&self) -> ScopeMark {
        ScopeMark(self.next)
    }

    /// Forget every label and fresh node allocated since `mark` was taken.
    ///
    /// Blank nodes allocated after the rollback will reuse the forgotten indexes.
    pub fn rollback(&mut self, mark: ScopeMark) {
        if mark.0 < self.next {
            log::trace!("rolling back blank node scope {} to {}", self.id, mark.0);
            self.labels.retain(|_, index| *index < mark.0);
            self.next = mark.0;
        }
    }

    /// The number of labels known to this scope.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether this scope knows no label.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for BnodeScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn same_label_same_node() {
        let mut scope = BnodeScope::new();
        let b1 = scope.label_of("x");
        let b2 = scope.label_of("y");
        assert_ne!(b1, b2);
        assert_eq!(scope.label_of("x"), b1);
        assert_eq!(scope.len(), 2);
    }

    #[test]
    fn fresh_never_collides() {
        let mut scope = BnodeScope::new();
        let b1 = scope.label_of("x");
        let f1 = scope.fresh();
        let f2 = scope.fresh();
        let b2 = scope.label_of("y");
        let all = [b1, f1, f2, b2];
        for i in 0..all.len() {
            for j in (i + 1)..all.len() {
                assert_ne!(all[i], all[j]);
            }
        }
        assert_eq!(scope.len(), 2);
    }

    #[test]
    fn distinct_scopes() {
        let mut scope1 = BnodeScope::new();
        let mut scope2 = BnodeScope::new();
        assert_ne!(scope1.id(), scope2.id());
        let b1 = scope1.label_of("x");
        let b2 = scope2.label_of("x");
        assert_eq!(b1.index(), b2.index());
        assert_ne!(b1, b2);
    }

    #[test]
    fn rollback() {
        let mut scope = BnodeScope::new();
        let a = scope.label_of("a");
        let mark = scope.checkpoint();
        let b = scope.label_of("b");
        scope.fresh();
        scope.rollback(mark);
        assert_eq!(scope.len(), 1);
        assert_eq!(scope.label_of("a"), a);
        assert_eq!(scope.label_of("b"), b);
        // rolling back to the present is a no-op
        let mark = scope.checkpoint();
        scope.rollback(mark);
        assert_eq!(scope.len(), 2);
    }
}
