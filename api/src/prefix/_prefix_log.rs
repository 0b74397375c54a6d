// this module is transparently re-exported by its parent `prefix`
use super::Prefix;
use std::collections::HashMap;
use std::sync::Arc;

/// An append-only history of prefix declarations.
///
/// Later declarations of a prefix override earlier ones,
/// but earlier states of the map remain available through [snapshots](PrefixLog::snapshot),
/// so that a redeclaration never affects what was resolved before it.
#[derive(Clone, Debug, Default)]
pub struct PrefixLog {
    entries: Vec<(Prefix<Box<str>>, Arc<str>)>,
    latest: HashMap<Box<str>, usize>,
}

/// A point in the history of a [`PrefixLog`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PrefixSnapshot(usize);

impl PrefixLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `prefix` maps to `namespace` from now on.
    pub fn declare(&mut self, prefix: Prefix<Box<str>>, namespace: Arc<str>) {
        let idx = self.entries.len();
        match self.latest.get_mut(prefix.as_str()) {
            Some(latest) => *latest = idx,
            None => {
                self.latest.insert(prefix.as_str().into(), idx);
            }
        }
        self.entries.push((prefix, namespace));
    }

    /// The namespace currently associated with `prefix`, if any.
    pub fn get_namespace(&self, prefix: &str) -> Option<&Arc<str>> {
        self.latest.get(prefix).map(|idx| &self.entries[*idx].1)
    }

    /// The current point in the history of this log.
    pub fn snapshot(&self) -> PrefixSnapshot {
        PrefixSnapshot(self.entries.len())
    }

    /// The namespace that was associated with `prefix` at the given `snapshot`, if any.
    pub fn get_namespace_at(&self, snapshot: PrefixSnapshot, prefix: &str) -> Option<&Arc<str>> {
        let end = snapshot.0.min(self.entries.len());
        self.entries[..end]
            .iter()
            .rev()
            .find(|(p, _)| p.as_str() == prefix)
            .map(|(_, ns)| ns)
    }

    /// Iterate over all declarations, in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, ns)| (p.as_str(), &ns[..]))
    }

    /// The number of declarations in this log (including overridden ones).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    fn log(decls: &[(&str, &str)]) -> PrefixLog {
        let mut log = PrefixLog::new();
        for (p, ns) in decls {
            log.declare(Prefix::new_unchecked((*p).into()), (*ns).into());
        }
        log
    }

    #[test_case("", Some("tag:empty2/"); "empty redeclared")]
    #[test_case("ex", Some("tag:ex/"); "ex")]
    #[test_case("foaf", None; "undeclared")]
    fn get_namespace(prefix: &str, expected: Option<&str>) {
        let log = log(&[("", "tag:empty1/"), ("ex", "tag:ex/"), ("", "tag:empty2/")]);
        assert_eq!(log.get_namespace(prefix).map(|ns| &ns[..]), expected);
    }

    #[test]
    fn snapshots_are_not_affected_by_redeclarations() {
        let mut log = log(&[("ex", "tag:v1/")]);
        let before = log.snapshot();
        log.declare(Prefix::new_unchecked("ex".into()), "tag:v2/".into());
        log.declare(Prefix::new_unchecked("new".into()), "tag:new/".into());
        assert_eq!(log.get_namespace_at(before, "ex").map(|ns| &ns[..]), Some("tag:v1/"));
        assert_eq!(log.get_namespace_at(before, "new"), None);
        assert_eq!(log.get_namespace("ex").map(|ns| &ns[..]), Some("tag:v2/"));
        assert_eq!(log.len(), 3);
        assert_eq!(
            log.iter().collect::<Vec<_>>(),
            vec![("ex", "tag:v1/"), ("ex", "tag:v2/"), ("new", "tag:new/")]
        );
    }
}
