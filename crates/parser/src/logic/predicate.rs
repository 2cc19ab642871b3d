//! Predicates of a logic schema.
//!
//! Predicates live in their schema's table and are referenced by
//! [`PredicateId`]. A predicate is derived iff it heads at least one
//! derivation rule; every other predicate is base.

use super::DerivationRule;
use std::fmt;

/// Stable index of a predicate inside its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PredicateId(usize);

impl PredicateId {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PredicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A base or derived predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    id: PredicateId,
    name: String,
    arity: usize,
    /// Explicitly declared with `.decl`; such a predicate may never head a rule.
    declared_base: bool,
    derivation_rules: Vec<DerivationRule>,
}

impl Predicate {
    pub(crate) fn new(id: PredicateId, name: &str, arity: usize) -> Self {
        Self {
            id,
            name: name.to_string(),
            arity,
            declared_base: false,
            derivation_rules: Vec::new(),
        }
    }

    #[must_use]
    #[inline]
    pub fn id(&self) -> PredicateId {
        self.id
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    #[must_use]
    #[inline]
    pub fn is_derived(&self) -> bool {
        !self.derivation_rules.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn is_base(&self) -> bool {
        !self.is_derived()
    }

    /// Rules defining this predicate, in definition order.
    #[must_use]
    #[inline]
    pub fn derivation_rules(&self) -> &[DerivationRule] {
        &self.derivation_rules
    }

    pub(crate) fn is_declared_base(&self) -> bool {
        self.declared_base
    }

    pub(crate) fn mark_declared_base(&mut self) {
        self.declared_base = true;
    }

    pub(crate) fn push_rule(&mut self, rule: DerivationRule) {
        self.derivation_rules.push(rule);
    }
}

impl fmt::Display for Predicate {
    /// `Name/arity`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}
