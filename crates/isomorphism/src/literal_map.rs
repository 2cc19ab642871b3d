//! Correspondence between literal occurrences of two bodies.

use crate::BijectiveMap;
use std::fmt;

/// Position of a literal in the body it was taken from.
///
/// Literals are identified by occurrence, not by structure: two equal
/// literals in one body are distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LiteralId(usize);

impl LiteralId {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for LiteralId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A [`BijectiveMap`] between literal occurrences of a left and a right body.
///
/// Built fresh per body comparison and only ever extended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralMap(BijectiveMap<LiteralId, LiteralId>);

impl LiteralMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, left: LiteralId, right: LiteralId) {
        self.0.put(left, right);
    }

    /// Whether some left literal already claims `right` as its match.
    #[must_use]
    pub fn contains_in_range(&self, right: LiteralId) -> bool {
        self.0.contains_value(&right)
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
