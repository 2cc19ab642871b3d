//! Clauses of a logic schema.
//!
//! - [`DerivationRule`]: `Head(x) :- l1, ..., ln`
//! - [`LogicConstraint`]: `@id :- l1, ..., ln` (a denial; the body must never hold)
//! - [`NormalClause`]: either of the two, borrowed from the schema

use super::literal::join_literals;
use super::{Atom, Literal};
use std::fmt;

/// A head atom plus the body that derives it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivationRule {
    head: Atom,
    body: Vec<Literal>,
}

impl DerivationRule {
    /// Construct a rule.
    #[must_use]
    pub fn new(head: Atom, body: Vec<Literal>) -> Self {
        Self { head, body }
    }

    /// Rule head.
    #[must_use]
    #[inline]
    pub fn head(&self) -> &Atom {
        &self.head
    }

    /// Rule body, in written order.
    #[must_use]
    #[inline]
    pub fn body(&self) -> &[Literal] {
        &self.body
    }
}

impl fmt::Display for DerivationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :- {}", self.head, join_literals(&self.body))
    }
}

/// A headless rule whose body must never be satisfiable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicConstraint {
    id: String,
    body: Vec<Literal>,
}

impl LogicConstraint {
    #[must_use]
    pub fn new(id: &str, body: Vec<Literal>) -> Self {
        Self {
            id: id.to_string(),
            body,
        }
    }

    /// Constraint identifier (the `1` of `@1 :- ...`).
    #[must_use]
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    #[inline]
    pub fn body(&self) -> &[Literal] {
        &self.body
    }
}

impl fmt::Display for LogicConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{} :- {}", self.id, join_literals(&self.body))
    }
}

/// A derivation rule or a logic constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalClause<'a> {
    Rule(&'a DerivationRule),
    Constraint(&'a LogicConstraint),
}

impl<'a> NormalClause<'a> {
    #[must_use]
    pub fn body(self) -> &'a [Literal] {
        match self {
            Self::Rule(r) => r.body(),
            Self::Constraint(c) => c.body(),
        }
    }

    /// Head atom; constraints have none.
    #[must_use]
    pub fn head(self) -> Option<&'a Atom> {
        match self {
            Self::Rule(r) => Some(r.head()),
            Self::Constraint(_) => None,
        }
    }
}

impl fmt::Display for NormalClause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(r) => write!(f, "{r}"),
            Self::Constraint(c) => write!(f, "{c}"),
        }
    }
}
