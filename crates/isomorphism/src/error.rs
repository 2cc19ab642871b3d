use std::fmt;
use thiserror::Error;

/// Which operand of a comparison an input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Caller faults. Structural mismatches are never errors: they are `false`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IsomorphismError {
    #[error("Isomorphism error: unknown predicate '{name}' in the {side} schema")]
    UnknownPredicate { side: Side, name: String },
}
