use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParserError {
    #[error("Parser error: failed to parse logic schema: {0}")]
    FailedToParseSchema(String),
    #[error("Parser error: failed to parse literal list: {0}")]
    FailedToParseBody(String),
    #[error("Parser error: unexpected rule in {0}: {1}")]
    UnexpectedRule(String, String),
    #[error("Parser error: Missing '{0}'")]
    Missing(String),
    #[error("Parser error: failed to parse integer literal '{0}'")]
    InvalidInteger(String),
    #[error("Parser error: Invalid comparison operator '{0}'")]
    InvalidComparisonOperator(String),
    #[error("Parser error: predicate '{name}' used with arity {found}, but it has arity {expected}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("Parser error: predicate '{0}' is declared base but heads a derivation rule")]
    DerivedBaseConflict(String),
    #[error("Parser error: Duplicate declaration for predicate '{0}'")]
    DuplicateDeclaration(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ParserError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<pest::error::Error<crate::Rule>> for ParserError {
    fn from(e: pest::error::Error<crate::Rule>) -> Self {
        Self::FailedToParseSchema(e.to_string())
    }
}
