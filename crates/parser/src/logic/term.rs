//! Terms: variables and constants.

use crate::primitive::ConstType;
use crate::{next_inner, Lexeme, ParserError, Result, Rule};
use itertools::Itertools;
use pest::iterators::Pair;
use std::fmt;

/// A term: a variable identified by name or a constant identified by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    Var(String),
    Const(ConstType),
}

impl Term {
    /// Shorthand for a variable term.
    #[must_use]
    pub fn var(name: &str) -> Self {
        Self::Var(name.to_string())
    }

    #[must_use]
    pub fn is_var(&self) -> bool {
        matches!(self, Self::Var(_))
    }

    #[must_use]
    pub fn is_const(&self) -> bool {
        matches!(self, Self::Const(_))
    }

    /// Variable name, if this is a variable.
    #[must_use]
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Self::Var(v) => Some(v),
            Self::Const(_) => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(v) => write!(f, "{v}"),
            Self::Const(c) => write!(f, "{c}"),
        }
    }
}

impl Lexeme for Term {
    /// Parse `constant | variable`.
    fn from_parsed_rule(parsed_rule: Pair<Rule>) -> Result<Self> {
        let mut inner = parsed_rule.into_inner();
        let term = next_inner(&mut inner, "term")?;
        match term.as_rule() {
            Rule::variable => Ok(Self::Var(term.as_str().to_string())),
            Rule::constant => ConstType::from_parsed_rule(term).map(Self::Const),
            other => Err(ParserError::UnexpectedRule(
                "term".into(),
                format!("{other:?}"),
            )),
        }
    }
}

/// Join terms as `t1, t2, ..., tn`.
pub(crate) fn join_terms(terms: &[Term]) -> String {
    terms.iter().join(", ")
}
