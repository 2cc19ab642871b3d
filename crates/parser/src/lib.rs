//! Logic Schema Parser Library
//!
//! Parser, printer and in-memory model for logic schemas: base predicates,
//! derived predicates defined by derivation rules, and logic constraints
//! (denials) over ordinary and built-in literals.
//!
//! ```rust
//! use parser::LogicSchema;
//!
//! let schema = LogicSchema::parse_str(
//!     "Der(x) :- R(x, y)
//!      @1 :- P(x), Der(x)",
//! )
//! .unwrap();
//! assert_eq!(schema.base_predicates().count(), 2);
//! assert_eq!(schema.constraints().len(), 1);
//! ```

pub mod error;
pub mod logic;
pub mod primitive;
pub mod schema;


// Re-export core types for convenient access
pub use error::ParserError;
pub use logic::{
    Atom, BuiltInLiteral, ComparisonLiteral, ComparisonOperator, CustomLiteral,
    DerivationRule, Literal, LogicConstraint, NormalClause, OrdinaryLiteral, Predicate,
    PredicateId, Term,
};
pub use primitive::ConstType;
pub use schema::LogicSchema;

use pest::iterators::Pair;
use pest_derive::Parser;

/// Parser result type.
pub type Result<T> = std::result::Result<T, ParserError>;

/// The schema parser is powered by Pest, a PEG parser framework.
#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct LogicSchemaParser;

/// Trait for converting context-free Pest parse trees into schema types.
///
/// Constructs that reference predicates (atoms, literals, clauses) need the
/// schema's predicate table and are built by [`LogicSchema`] instead.
pub trait Lexeme: Sized {
    /// Converts a Pest parse rule into a structured type.
    fn from_parsed_rule(parsed_rule: Pair<Rule>) -> Result<Self>;
}

/// Take the next inner pair or report which piece of `what` is missing.
pub(crate) fn next_inner<'i>(
    inner: &mut pest::iterators::Pairs<'i, Rule>,
    what: &str,
) -> Result<Pair<'i, Rule>> {
    inner
        .next()
        .ok_or_else(|| ParserError::Missing(what.to_string()))
}
