//! Comparison literals.
//!
//! - [`ComparisonOperator`]: `= | <> | > | >= | < | <=`
//! - [`ComparisonLiteral`]: `{left} {op} {right}`
//!
//! # Example
//! ```rust
//! use parser::logic::{ComparisonLiteral, ComparisonOperator, Term};
//! let cmp = ComparisonLiteral::new(Term::var("x"), ComparisonOperator::LessThan, Term::var("y"));
//! assert_eq!(cmp.to_string(), "x < y");
//! ```

use super::Term;
use crate::{Lexeme, ParserError, Result, Rule};
use pest::iterators::Pair;
use std::fmt;

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Equal,            // =
    NotEqual,         // <>
    GreaterThan,      // >
    GreaterEqualThan, // >=
    LessThan,         // <
    LessEqualThan,    // <=
}

impl ComparisonOperator {
    /// The operator that keeps the comparison's meaning once its operands
    /// are swapped: `x < y` holds iff `y > x` does.
    #[must_use]
    pub fn symmetric(self) -> Self {
        match self {
            Self::Equal => Self::Equal,
            Self::NotEqual => Self::NotEqual,
            Self::GreaterThan => Self::LessThan,
            Self::GreaterEqualThan => Self::LessEqualThan,
            Self::LessThan => Self::GreaterThan,
            Self::LessEqualThan => Self::GreaterEqualThan,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::GreaterThan => ">",
            Self::GreaterEqualThan => ">=",
            Self::LessThan => "<",
            Self::LessEqualThan => "<=",
        };
        write!(f, "{sym}")
    }
}

impl Lexeme for ComparisonOperator {
    fn from_parsed_rule(parsed_rule: Pair<Rule>) -> Result<Self> {
        match parsed_rule.as_str() {
            "=" => Ok(Self::Equal),
            "<>" => Ok(Self::NotEqual),
            ">" => Ok(Self::GreaterThan),
            ">=" => Ok(Self::GreaterEqualThan),
            "<" => Ok(Self::LessThan),
            "<=" => Ok(Self::LessEqualThan),
            other => Err(ParserError::InvalidComparisonOperator(other.to_string())),
        }
    }
}

/// `{left} {op} {right}` built-in comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComparisonLiteral {
    operator: ComparisonOperator,
    terms: [Term; 2],
}

impl ComparisonLiteral {
    /// Create a new comparison.
    #[must_use]
    pub fn new(left: Term, operator: ComparisonOperator, right: Term) -> Self {
        Self {
            operator,
            terms: [left, right],
        }
    }

    /// Left-hand term.
    #[must_use]
    #[inline]
    pub fn left(&self) -> &Term {
        &self.terms[0]
    }

    /// Operator.
    #[must_use]
    #[inline]
    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    /// Right-hand term.
    #[must_use]
    #[inline]
    pub fn right(&self) -> &Term {
        &self.terms[1]
    }

    /// Both operands, left first.
    #[must_use]
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Both operands, right first.
    #[must_use]
    pub fn reversed_terms(&self) -> [Term; 2] {
        [self.terms[1].clone(), self.terms[0].clone()]
    }
}

impl fmt::Display for ComparisonLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left(), self.operator, self.right())
    }
}

impl Lexeme for ComparisonLiteral {
    /// Parse `term ~ comparison_operator ~ term`.
    fn from_parsed_rule(parsed_rule: Pair<Rule>) -> Result<Self> {
        let mut inner = parsed_rule.into_inner();
        let left = Term::from_parsed_rule(crate::next_inner(&mut inner, "comparison left")?)?;
        let operator =
            ComparisonOperator::from_parsed_rule(crate::next_inner(&mut inner, "comparison operator")?)?;
        let right = Term::from_parsed_rule(crate::next_inner(&mut inner, "comparison right")?)?;
        Ok(Self::new(left, operator, right))
    }
}
