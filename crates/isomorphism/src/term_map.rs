//! Correspondence between the terms of two clauses.

use crate::BijectiveMap;
use parser::Term;

/// A [`BijectiveMap`] over terms.
///
/// Constants are only ever paired with an equal constant and variables only
/// with variables; [`TermMap::extended`] enforces this before inserting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermMap(BijectiveMap<Term, Term>);

impl TermMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A map with each named variable pinned to itself.
    #[must_use]
    pub fn pinned(names: &[&str]) -> Self {
        let mut map = Self::new();
        for name in names {
            map.0.put(Term::var(name), Term::var(name));
        }
        map
    }

    /// True if `t1` already maps elsewhere or `t2` is already claimed.
    #[must_use]
    pub fn is_incompatible_with(&self, t1: &Term, t2: &Term) -> bool {
        self.0.conflicts_with(t1, t2)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extend a copy of this map position by position with `terms1[i] -> terms2[i]`.
    ///
    /// Fails fast at the first incompatible position; there is no
    /// backtracking within one pairing of term lists. With
    /// `renaming_allowed == false` a variable may only pair with the
    /// variable of the same name.
    #[must_use]
    pub fn extended(&self, terms1: &[Term], terms2: &[Term], renaming_allowed: bool) -> Option<Self> {
        if terms1.len() != terms2.len() {
            return None;
        }
        let mut map = self.clone();
        for (t1, t2) in terms1.iter().zip(terms2) {
            if !map.admits(t1, t2, renaming_allowed) {
                return None;
            }
            map.0.put(t1.clone(), t2.clone());
        }
        Some(map)
    }

    fn admits(&self, t1: &Term, t2: &Term, renaming_allowed: bool) -> bool {
        match (t1, t2) {
            (Term::Var(a), Term::Var(b)) => {
                (renaming_allowed || a == b) && !self.is_incompatible_with(t1, t2)
            }
            (Term::Const(a), Term::Const(b)) => a == b,
            _ => false,
        }
    }
}
