//! Property-based tests for schema isomorphism using proptest.
//!
//! Random schemas are generated as descriptions, rendered to text (optionally
//! transformed by one of the allowed symmetries) and parsed back.

use crate::{are_isomorphic, IsomorphismOptions};
use itertools::Itertools;
use parser::LogicSchema;
use proptest::collection::vec;
use proptest::prelude::*;

/// Base predicates every generated schema declares.
const BASE: [(&str, usize); 3] = [("B0", 1), ("B1", 2), ("B2", 2)];
/// Arities of the derived predicates `D0` and `D1`.
const DERIVED: [usize; 2] = [1, 2];
const OPERATORS: [&str; 6] = ["<", "<=", "=", "<>", ">", ">="];
const CUSTOM: [&str; 2] = ["even", "odd"];

#[derive(Debug, Clone)]
enum TermDesc {
    Var(u8),   // Variable index 0-3
    Const(u8), // Integer constant 0-2
}

#[derive(Debug, Clone)]
enum LiteralDesc {
    /// Predicate index: 0-2 base, 3-4 derived.
    Ordinary {
        predicate: usize,
        positive: bool,
        terms: Vec<TermDesc>,
    },
    Comparison(TermDesc, usize, TermDesc),
    Custom(usize, TermDesc),
    Boolean(bool),
}

#[derive(Debug, Clone)]
struct SchemaDesc {
    /// `(derived index, body)`
    rules: Vec<(usize, Vec<LiteralDesc>)>,
    constraints: Vec<Vec<LiteralDesc>>,
}

/// Symmetries applied while rendering.
#[derive(Debug, Clone, Copy, Default)]
struct Rendering {
    rename_variables: bool,
    reverse_bodies: bool,
    reverse_clauses: bool,
    rename_derived: bool,
}

impl Rendering {
    const IDENTITY: Self = Self {
        rename_variables: false,
        reverse_bodies: false,
        reverse_clauses: false,
        rename_derived: false,
    };

    fn term(&self, term: &TermDesc) -> String {
        match term {
            TermDesc::Var(i) if self.rename_variables => format!("z{}", 3 - i),
            TermDesc::Var(i) => format!("x{i}"),
            TermDesc::Const(c) => c.to_string(),
        }
    }

    fn terms(&self, terms: &[TermDesc]) -> String {
        terms.iter().map(|t| self.term(t)).join(", ")
    }

    fn derived_name(&self, index: usize) -> String {
        if self.rename_derived {
            format!("Alt{index}")
        } else {
            format!("D{index}")
        }
    }

    fn literal(&self, literal: &LiteralDesc) -> String {
        match literal {
            LiteralDesc::Ordinary {
                predicate,
                positive,
                terms,
            } => {
                let (name, arity) = match BASE.get(*predicate) {
                    Some(&(name, arity)) => (name.to_string(), arity),
                    None => {
                        let index = predicate - BASE.len();
                        (self.derived_name(index), DERIVED[index])
                    }
                };
                let atom = format!("{name}({})", self.terms(&terms[..arity]));
                if *positive {
                    atom
                } else {
                    format!("not({atom})")
                }
            }
            LiteralDesc::Comparison(left, op, right) => {
                format!("{} {} {}", self.term(left), OPERATORS[*op], self.term(right))
            }
            LiteralDesc::Custom(op, term) => format!("#{}({})", CUSTOM[*op], self.term(term)),
            LiteralDesc::Boolean(true) => "TRUE()".to_string(),
            LiteralDesc::Boolean(false) => "FALSE()".to_string(),
        }
    }

    fn body(&self, body: &[LiteralDesc]) -> String {
        let mut literals = body.iter().map(|l| self.literal(l)).collect_vec();
        if self.reverse_bodies {
            literals.reverse();
        }
        literals.join(", ")
    }

    fn render(&self, schema: &SchemaDesc) -> String {
        let head_vars = [TermDesc::Var(0), TermDesc::Var(1)];
        let mut clauses = schema
            .rules
            .iter()
            .map(|(index, body)| {
                let head = self.terms(&head_vars[..DERIVED[*index]]);
                format!("{}({head}) :- {}", self.derived_name(*index), self.body(body))
            })
            .chain(schema.constraints.iter().map(|body| format!(":- {}", self.body(body))))
            .collect_vec();
        if self.reverse_clauses {
            clauses.reverse();
        }
        BASE.iter()
            .map(|(name, arity)| format!(".decl {name}/{arity}"))
            .chain(clauses)
            .join("\n")
    }
}

fn arb_term() -> impl Strategy<Value = TermDesc> {
    prop_oneof![
        3 => (0..4u8).prop_map(TermDesc::Var),
        1 => (0..3u8).prop_map(TermDesc::Const),
    ]
}

/// Literals over base predicates only, or over base and derived ones.
fn arb_literal(with_derived: bool) -> impl Strategy<Value = LiteralDesc> {
    let predicates = if with_derived {
        BASE.len() + DERIVED.len()
    } else {
        BASE.len()
    };
    prop_oneof![
        4 => (0..predicates, any::<bool>(), vec(arb_term(), 2))
            .prop_map(|(predicate, positive, terms)| LiteralDesc::Ordinary { predicate, positive, terms }),
        1 => (arb_term(), 0..OPERATORS.len(), arb_term())
            .prop_map(|(left, op, right)| LiteralDesc::Comparison(left, op, right)),
        1 => (0..CUSTOM.len(), arb_term()).prop_map(|(op, term)| LiteralDesc::Custom(op, term)),
        1 => any::<bool>().prop_map(LiteralDesc::Boolean),
    ]
}

fn arb_body(with_derived: bool) -> impl Strategy<Value = Vec<LiteralDesc>> {
    vec(arb_literal(with_derived), 1..=3)
}

/// Each derived predicate gets one or two non-recursive rules.
fn arb_schema() -> impl Strategy<Value = SchemaDesc> {
    (
        vec(arb_body(false), 1..=2),
        vec(arb_body(false), 1..=2),
        vec(arb_body(true), 0..=3),
    )
        .prop_map(|(d0, d1, constraints)| SchemaDesc {
            rules: d0
                .into_iter()
                .map(|body| (0, body))
                .chain(d1.into_iter().map(|body| (1, body)))
                .collect(),
            constraints,
        })
}

fn arb_options() -> impl Strategy<Value = IsomorphismOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(variables, order, derived)| IsomorphismOptions::new(variables, order, derived))
}

fn parse(text: &str) -> LogicSchema {
    LogicSchema::parse_str(text).expect("generated schema parses")
}

fn iso(text1: &str, text2: &str, options: IsomorphismOptions) -> bool {
    are_isomorphic(options, &parse(text1), &parse(text2))
}

// =========================================================================
// Invariance under allowed symmetries
// =========================================================================

proptest! {
    /// Reflexivity: every schema is isomorphic to itself under any options
    #[test]
    fn isomorphism_reflexivity(schema in arb_schema(), options in arb_options()) {
        let text = Rendering::IDENTITY.render(&schema);
        prop_assert!(iso(&text, &text, options), "schema must match itself:\n{}", text);
    }

    /// Consistent variable renaming is invisible when renaming is allowed
    #[test]
    fn isomorphism_variable_renaming(schema in arb_schema()) {
        let original = Rendering::IDENTITY.render(&schema);
        let renamed = Rendering { rename_variables: true, ..Rendering::default() }.render(&schema);
        prop_assert!(iso(&original, &renamed, IsomorphismOptions::new(true, false, false)));
        prop_assert!(!iso(&original, &renamed, IsomorphismOptions::new(false, true, true)));
    }

    /// Reversed bodies are invisible when literal reordering is allowed
    #[test]
    fn isomorphism_literal_reordering(schema in arb_schema()) {
        let original = Rendering::IDENTITY.render(&schema);
        let reversed = Rendering { reverse_bodies: true, ..Rendering::default() }.render(&schema);
        prop_assert!(iso(&original, &reversed, IsomorphismOptions::new(false, true, false)));
    }

    /// Clause order never matters at schema level
    #[test]
    fn isomorphism_clause_order(schema in arb_schema(), options in arb_options()) {
        let original = Rendering::IDENTITY.render(&schema);
        let reversed = Rendering { reverse_clauses: true, ..Rendering::default() }.render(&schema);
        prop_assert!(iso(&original, &reversed, options));
    }

    /// Consistent derived predicate renaming is invisible when allowed
    #[test]
    fn isomorphism_derived_renaming(schema in arb_schema()) {
        let original = Rendering::IDENTITY.render(&schema);
        let renamed = Rendering { rename_derived: true, ..Rendering::default() }.render(&schema);
        prop_assert!(iso(&original, &renamed, IsomorphismOptions::new(false, false, true)));
        prop_assert!(!iso(&original, &renamed, IsomorphismOptions::new(true, true, false)));
    }

    /// All symmetries at once under the default options
    #[test]
    fn isomorphism_all_symmetries(schema in arb_schema()) {
        let original = Rendering::IDENTITY.render(&schema);
        let transformed = Rendering {
            rename_variables: true,
            reverse_bodies: true,
            reverse_clauses: true,
            rename_derived: true,
        }
        .render(&schema);
        prop_assert!(iso(&original, &transformed, IsomorphismOptions::default()));
    }
}

// =========================================================================
// Symmetry of the relation
// =========================================================================

proptest! {
    /// iso(a, b) == iso(b, a) for unrelated schemas
    #[test]
    fn isomorphism_symmetry(a in arb_schema(), b in arb_schema(), options in arb_options()) {
        let (a, b) = (Rendering::IDENTITY.render(&a), Rendering::IDENTITY.render(&b));
        prop_assert_eq!(iso(&a, &b, options), iso(&b, &a, options));
    }

    /// iso(a, t(a)) == iso(t(a), a) for a symmetry t, whatever the options
    #[test]
    fn isomorphism_symmetry_transformed(
        schema in arb_schema(),
        options in arb_options(),
        flags in (any::<bool>(), any::<bool>(), any::<bool>()),
    ) {
        let original = Rendering::IDENTITY.render(&schema);
        let transformed = Rendering {
            rename_variables: flags.0,
            reverse_bodies: flags.1,
            reverse_clauses: false,
            rename_derived: flags.2,
        }
        .render(&schema);
        prop_assert_eq!(
            iso(&original, &transformed, options),
            iso(&transformed, &original, options)
        );
    }
}
