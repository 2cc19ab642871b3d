//! Literals of a rule or constraint body.
//!
//! - Ordinary literals: `Edge(x, y)`, `not(Edge(x, y))`
//! - Comparisons: `x > 5`, `x <> y`
//! - Booleans: `TRUE()`, `FALSE()`
//! - Custom built-ins: `#even(x)`

use super::term::join_terms;
use super::{Atom, ComparisonLiteral, Term};
use itertools::Itertools;
use std::fmt;

/// A (possibly negated) reference to a predicate's atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrdinaryLiteral {
    atom: Atom,
    positive: bool,
}

impl OrdinaryLiteral {
    #[must_use]
    pub fn new(atom: Atom, positive: bool) -> Self {
        Self { atom, positive }
    }

    #[must_use]
    #[inline]
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    #[must_use]
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    #[must_use]
    #[inline]
    pub fn terms(&self) -> &[Term] {
        self.atom.terms()
    }
}

impl fmt::Display for OrdinaryLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.atom)
        } else {
            write!(f, "not({})", self.atom)
        }
    }
}

/// `#operation(t1, ..., tn)`: a built-in test identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomLiteral {
    operation: String,
    terms: Vec<Term>,
}

impl CustomLiteral {
    #[must_use]
    pub fn new(operation: &str, terms: Vec<Term>) -> Self {
        Self {
            operation: operation.to_string(),
            terms,
        }
    }

    #[must_use]
    #[inline]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    #[must_use]
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl fmt::Display for CustomLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}({})", self.operation, join_terms(&self.terms))
    }
}

/// A literal that is not a predicate reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuiltInLiteral {
    /// `x < y`, `x = 'a'`, ...
    Comparison(ComparisonLiteral),
    /// `TRUE()` / `FALSE()`; carries no terms.
    Boolean(bool),
    /// `#op(terms)`.
    Custom(CustomLiteral),
}

impl BuiltInLiteral {
    /// Terms in positional order; booleans have none.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        match self {
            Self::Comparison(c) => c.terms(),
            Self::Boolean(_) => &[],
            Self::Custom(c) => c.terms(),
        }
    }
}

impl fmt::Display for BuiltInLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison(c) => write!(f, "{c}"),
            Self::Boolean(true) => write!(f, "TRUE()"),
            Self::Boolean(false) => write!(f, "FALSE()"),
            Self::Custom(c) => write!(f, "{c}"),
        }
    }
}

/// A body literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Ordinary(OrdinaryLiteral),
    BuiltIn(BuiltInLiteral),
}

impl Literal {
    /// Positive ordinary literal.
    #[must_use]
    pub fn positive(atom: Atom) -> Self {
        Self::Ordinary(OrdinaryLiteral::new(atom, true))
    }

    /// Negated ordinary literal.
    #[must_use]
    pub fn negative(atom: Atom) -> Self {
        Self::Ordinary(OrdinaryLiteral::new(atom, false))
    }

    /// Terms in positional order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        match self {
            Self::Ordinary(o) => o.terms(),
            Self::BuiltIn(b) => b.terms(),
        }
    }

    /// The ordinary literal, if this is one.
    #[must_use]
    pub fn as_ordinary(&self) -> Option<&OrdinaryLiteral> {
        match self {
            Self::Ordinary(o) => Some(o),
            Self::BuiltIn(_) => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinary(o) => write!(f, "{o}"),
            Self::BuiltIn(b) => write!(f, "{b}"),
        }
    }
}

/// Join literals as `l1, l2, ..., ln`.
pub(crate) fn join_literals(literals: &[Literal]) -> String {
    literals.iter().join(", ")
}
