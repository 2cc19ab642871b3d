//! Structural isomorphism between logic schemas and their parts.
//!
//! Given two [`LogicSchema`]s and a set of [`IsomorphismOptions`], the
//! [`IsomorphismComparator`] decides whether two literal lists, constraints,
//! derivation rules, predicates or whole schemas are identical up to:
//! - consistent renaming of variables,
//! - reordering of body literals (and of the rules of a derived predicate),
//! - consistent renaming of derived predicates.
//!
//! Base predicates and constants are always rigid.
//!
//! # Example
//! ```
//! use isomorphism::{are_isomorphic, IsomorphismOptions};
//! use parser::LogicSchema;
//!
//! let left = LogicSchema::parse_str("Der(x) :- R(x, y)\n@1 :- P(x), Der(x)").unwrap();
//! let right = LogicSchema::parse_str("Alt(a) :- R(a, b)\n@1 :- Alt(z), P(z)").unwrap();
//!
//! assert!(are_isomorphic(IsomorphismOptions::default(), &left, &right));
//! assert!(!are_isomorphic(IsomorphismOptions::strict(), &left, &right));
//! ```

mod bijective_map;
mod comparator;
mod error;
mod literal_map;
mod options;
mod predicate_map;
mod search;
mod term_map;

#[cfg(test)]
mod proptest_tests;

pub use bijective_map::BijectiveMap;
pub use comparator::{IsomorphismComparator, SearchStats};
pub use error::{IsomorphismError, Side};
pub use literal_map::{LiteralId, LiteralMap};
pub use options::IsomorphismOptions;
pub use predicate_map::PredicateMap;
pub use term_map::TermMap;

use parser::LogicSchema;

/// Whether `left` and `right` are isomorphic under `options`.
#[must_use]
pub fn are_isomorphic(options: IsomorphismOptions, left: &LogicSchema, right: &LogicSchema) -> bool {
    IsomorphismComparator::new(options, left, right).are_isomorphic_schemas()
}
