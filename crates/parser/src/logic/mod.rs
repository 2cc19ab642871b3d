//! Logic components of a schema.
//!
//! - [`term`]: variables and constants
//! - [`atom`]: a predicate reference plus its terms
//! - [`comparison`]: comparison operators and comparison literals
//! - [`literal`]: ordinary (possibly negated) and built-in literals
//! - [`predicate`]: base and derived predicates
//! - [`rule`]: derivation rules, logic constraints and normal clauses
//!
//! # Example
//! ```rust
//! use parser::logic::{ComparisonOperator, Term};
//!
//! assert_eq!(ComparisonOperator::LessThan.symmetric(), ComparisonOperator::GreaterThan);
//! assert!(Term::var("x").is_var());
//! ```

pub mod atom;
pub mod comparison;
pub mod literal;
pub mod predicate;
pub mod rule;
pub mod term;

// Re-exports for a convenient public surface.
pub use atom::Atom;
pub use comparison::{ComparisonLiteral, ComparisonOperator};
pub use literal::{BuiltInLiteral, CustomLiteral, Literal, OrdinaryLiteral};
pub use predicate::{Predicate, PredicateId};
pub use rule::{DerivationRule, LogicConstraint, NormalClause};
pub use term::Term;
