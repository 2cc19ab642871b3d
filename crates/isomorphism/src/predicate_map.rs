//! Correspondence between the derived predicates of two schemas.

use crate::BijectiveMap;
use parser::PredicateId;

/// A [`BijectiveMap`] from left-schema predicates to right-schema predicates.
///
/// Entries are added provisionally while a literal pairing is explored and
/// removed with [`PredicateMap::remove_domain`] when that branch fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateMap(BijectiveMap<PredicateId, PredicateId>);

impl PredicateMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `p` is mapped to something other than `q`, or `q` is the
    /// image of something other than `p`.
    #[must_use]
    pub fn is_incompatible_with_map(&self, p: PredicateId, q: PredicateId) -> bool {
        self.0.conflicts_with(&p, &q)
    }

    pub fn put(&mut self, p: PredicateId, q: PredicateId) {
        self.0.put(p, q);
    }

    #[must_use]
    pub fn contains_key(&self, p: PredicateId) -> bool {
        self.0.contains_key(&p)
    }

    /// Undo the commitment made for `p`.
    pub fn remove_domain(&mut self, p: PredicateId) {
        self.0.remove(&p);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
