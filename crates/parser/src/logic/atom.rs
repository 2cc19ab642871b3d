//! Atoms: `Name(t1, ..., tn)`.
//!
//! An atom refers to its predicate by [`PredicateId`] inside the owning
//! schema and keeps the predicate name for printing.

use super::term::join_terms;
use super::{PredicateId, Term};
use std::collections::HashSet;
use std::fmt;

/// `Name(t1, ..., tn)`, where `n` is the predicate's arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    predicate: PredicateId,
    name: String,
    terms: Vec<Term>,
}

impl Atom {
    /// Create a new atom over the predicate `predicate` named `name`.
    #[must_use]
    pub fn new(predicate: PredicateId, name: &str, terms: Vec<Term>) -> Self {
        Self {
            predicate,
            name: name.to_string(),
            terms,
        }
    }

    /// Predicate handle in the owning schema.
    #[must_use]
    #[inline]
    pub fn predicate(&self) -> PredicateId {
        self.predicate
    }

    /// Predicate name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Terms (as a slice).
    #[must_use]
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    /// Get the set of variable names in this atom's terms.
    pub fn vars_set(&self) -> HashSet<&str> {
        self.terms.iter().filter_map(Term::as_var).collect()
    }
}

impl fmt::Display for Atom {
    /// Formats as `Name(a, b)`, always including parentheses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, join_terms(&self.terms))
    }
}
