//! Symmetries an isomorphism check may exploit.

use std::fmt;

/// Which renamings two structures may differ by and still be isomorphic.
///
/// Immutable once built. The default allows all three symmetries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsomorphismOptions {
    change_variable_names_allowed: bool,
    change_literal_order_allowed: bool,
    changing_derived_predicate_name_allowed: bool,
}

impl Default for IsomorphismOptions {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

impl IsomorphismOptions {
    #[must_use]
    pub const fn new(
        change_variable_names_allowed: bool,
        change_literal_order_allowed: bool,
        changing_derived_predicate_name_allowed: bool,
    ) -> Self {
        Self {
            change_variable_names_allowed,
            change_literal_order_allowed,
            changing_derived_predicate_name_allowed,
        }
    }

    /// No symmetry allowed: structures must match verbatim.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(false, false, false)
    }

    /// Variables may be renamed consistently within a clause.
    #[must_use]
    #[inline]
    pub fn change_variable_names_allowed(&self) -> bool {
        self.change_variable_names_allowed
    }

    /// Body literals (and the rules of one derived predicate) may be permuted.
    #[must_use]
    #[inline]
    pub fn change_literal_order_allowed(&self) -> bool {
        self.change_literal_order_allowed
    }

    /// Derived predicates may be renamed consistently across the schema.
    #[must_use]
    #[inline]
    pub fn changing_derived_predicate_name_allowed(&self) -> bool {
        self.changing_derived_predicate_name_allowed
    }
}

impl fmt::Display for IsomorphismOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "variables: {}, literal order: {}, derived names: {}",
            allowed(self.change_variable_names_allowed),
            allowed(self.change_literal_order_allowed),
            allowed(self.changing_derived_predicate_name_allowed)
        )
    }
}

fn allowed(flag: bool) -> &'static str {
    if flag {
        "free"
    } else {
        "fixed"
    }
}
