//! Logic schema representation and construction.
//!
//! A schema contains:
//! - A predicate table (base and derived predicates, referenced by [`PredicateId`])
//! - The derivation rules of every derived predicate (owned by the predicate)
//! - Logic constraints
//!
//! Printing a schema with `Display` yields text that parses back into an
//! equivalent schema.

use crate::logic::{
    Atom, BuiltInLiteral, ComparisonLiteral, CustomLiteral, DerivationRule, Literal,
    LogicConstraint, NormalClause, Predicate, PredicateId, Term,
};
use crate::{next_inner, Lexeme, LogicSchemaParser, ParserError, Result, Rule};
use pest::{iterators::Pair, Parser};
use std::collections::HashMap;
use std::{fmt, fs};
use tracing::{debug, info};

/// A complete logic schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogicSchema {
    predicates: Vec<Predicate>,
    by_name: HashMap<String, PredicateId>,
    constraints: Vec<LogicConstraint>,
}

impl fmt::Display for LogicSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for predicate in self.base_predicates() {
            writeln!(f, ".decl {predicate}")?;
        }
        for rule in self.derivation_rules() {
            writeln!(f, "{rule}")?;
        }
        for constraint in &self.constraints {
            writeln!(f, "{constraint}")?;
        }
        Ok(())
    }
}

impl LogicSchema {
    /// An empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a schema from a file.
    pub fn parse(path: &str) -> Result<Self> {
        let unparsed = fs::read_to_string(path)?;
        let schema = Self::parse_str(&unparsed)?;
        info!(
            "Parsed schema '{}' ({} predicates, {} constraints)",
            path,
            schema.predicates.len(),
            schema.constraints.len()
        );
        Ok(schema)
    }

    /// Parse a schema from text.
    pub fn parse_str(text: &str) -> Result<Self> {
        let top = LogicSchemaParser::parse(Rule::schema, text)?
            .next()
            .ok_or_else(|| ParserError::FailedToParseSchema("empty parse tree".into()))?;

        let mut schema = Self::new();
        for node in top.into_inner() {
            match node.as_rule() {
                Rule::declaration => schema.load_declaration(node)?,
                Rule::rule => schema.load_rule(node)?,
                Rule::constraint => schema.load_constraint(node)?,
                Rule::EOI => {}
                other => {
                    return Err(ParserError::UnexpectedRule(
                        "schema".into(),
                        format!("{other:?}"),
                    ))
                }
            }
        }
        debug!(
            "Schema built: {} base, {} derived, {} constraints",
            schema.base_predicates().count(),
            schema.derived_predicates().count(),
            schema.constraints.len()
        );
        Ok(schema)
    }

    /// Parse a bare literal list (`P(x), x < 3`) against this schema's
    /// predicate table. Unknown predicates are added as base predicates.
    pub fn parse_body(&mut self, text: &str) -> Result<Vec<Literal>> {
        let top = LogicSchemaParser::parse(Rule::body_only, text)
            .map_err(|e| ParserError::FailedToParseBody(e.to_string()))?
            .next()
            .ok_or_else(|| ParserError::FailedToParseBody("empty parse tree".into()))?;
        let mut inner = top.into_inner();
        self.build_body(next_inner(&mut inner, "body")?)
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// All predicates, in first-use order.
    #[must_use]
    #[inline]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Predicate behind a handle issued by this schema.
    ///
    /// # Panics
    /// Panics if `id` was issued by another schema with more predicates.
    #[must_use]
    #[inline]
    pub fn predicate(&self, id: PredicateId) -> &Predicate {
        &self.predicates[id.index()]
    }

    /// Predicate by name.
    #[must_use]
    pub fn predicate_by_name(&self, name: &str) -> Option<&Predicate> {
        self.by_name.get(name).map(|&id| self.predicate(id))
    }

    pub fn base_predicates(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter().filter(|p| p.is_base())
    }

    pub fn derived_predicates(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter().filter(|p| p.is_derived())
    }

    /// Every derivation rule, grouped by predicate.
    pub fn derivation_rules(&self) -> impl Iterator<Item = &DerivationRule> {
        self.predicates
            .iter()
            .flat_map(|p| p.derivation_rules().iter())
    }

    #[must_use]
    #[inline]
    pub fn constraints(&self) -> &[LogicConstraint] {
        &self.constraints
    }

    /// All derivation rules followed by all constraints.
    #[must_use]
    pub fn normal_clauses(&self) -> Vec<NormalClause<'_>> {
        self.derivation_rules()
            .map(NormalClause::Rule)
            .chain(self.constraints.iter().map(NormalClause::Constraint))
            .collect()
    }

    // ---------------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------------

    /// Handle for `name/arity`, registering the predicate on first use.
    pub fn intern_predicate(&mut self, name: &str, arity: usize) -> Result<PredicateId> {
        if let Some(&id) = self.by_name.get(name) {
            let expected = self.predicate(id).arity();
            if expected != arity {
                return Err(ParserError::ArityMismatch {
                    name: name.to_string(),
                    expected,
                    found: arity,
                });
            }
            return Ok(id);
        }
        let id = PredicateId::new(self.predicates.len());
        self.predicates.push(Predicate::new(id, name, arity));
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Declare `name/arity` as a base predicate.
    pub fn declare_base(&mut self, name: &str, arity: usize) -> Result<PredicateId> {
        let id = self.intern_predicate(name, arity)?;
        let predicate = &mut self.predicates[id.index()];
        if predicate.is_derived() {
            return Err(ParserError::DerivedBaseConflict(name.to_string()));
        }
        if predicate.is_declared_base() {
            return Err(ParserError::DuplicateDeclaration(name.to_string()));
        }
        predicate.mark_declared_base();
        Ok(id)
    }

    /// Build an atom over `name`, registering the predicate if needed.
    pub fn atom(&mut self, name: &str, terms: Vec<Term>) -> Result<Atom> {
        let id = self.intern_predicate(name, terms.len())?;
        Ok(Atom::new(id, name, terms))
    }

    /// Attach a derivation rule to its head predicate, making it derived.
    pub fn add_rule(&mut self, rule: DerivationRule) -> Result<()> {
        let predicate = &mut self.predicates[rule.head().predicate().index()];
        if predicate.is_declared_base() {
            return Err(ParserError::DerivedBaseConflict(predicate.name().to_string()));
        }
        predicate.push_rule(rule);
        Ok(())
    }

    pub fn add_constraint(&mut self, constraint: LogicConstraint) {
        self.constraints.push(constraint);
    }

    /// Identifier for a constraint written without `@id`: the first number
    /// from one past the constraint count that no constraint uses yet.
    fn next_constraint_id(&self) -> String {
        (self.constraints.len() + 1..)
            .map(|n| n.to_string())
            .find(|id| self.constraints.iter().all(|c| c.id() != id))
            .unwrap_or_default()
    }

    // ---------------------------------------------------------------------
    // Parse tree conversion
    // ---------------------------------------------------------------------

    /// `.decl Name/arity`
    fn load_declaration(&mut self, parsed_rule: Pair<Rule>) -> Result<()> {
        let mut inner = parsed_rule.into_inner();
        let name = next_inner(&mut inner, "declared predicate name")?.as_str();
        let arity_str = next_inner(&mut inner, "declared arity")?.as_str();
        let arity = arity_str
            .parse::<usize>()
            .map_err(|_| ParserError::InvalidInteger(arity_str.to_string()))?;
        self.declare_base(name, arity)?;
        Ok(())
    }

    /// `atom :- body`
    fn load_rule(&mut self, parsed_rule: Pair<Rule>) -> Result<()> {
        let mut inner = parsed_rule.into_inner();
        let head = self.build_atom(next_inner(&mut inner, "rule head")?)?;
        let body = self.build_body(next_inner(&mut inner, "rule body")?)?;
        self.add_rule(DerivationRule::new(head, body))
    }

    /// `(@id)? :- body`
    fn load_constraint(&mut self, parsed_rule: Pair<Rule>) -> Result<()> {
        let mut id = None;
        let mut body = None;
        for node in parsed_rule.into_inner() {
            match node.as_rule() {
                Rule::constraint_id => id = Some(node.as_str().to_string()),
                Rule::body => body = Some(self.build_body(node)?),
                other => {
                    return Err(ParserError::UnexpectedRule(
                        "constraint".into(),
                        format!("{other:?}"),
                    ))
                }
            }
        }
        let body = body.ok_or_else(|| ParserError::Missing("constraint body".into()))?;
        let id = id.unwrap_or_else(|| self.next_constraint_id());
        self.add_constraint(LogicConstraint::new(&id, body));
        Ok(())
    }

    fn build_body(&mut self, parsed_rule: Pair<Rule>) -> Result<Vec<Literal>> {
        parsed_rule
            .into_inner()
            .map(|literal| self.build_literal(literal))
            .collect()
    }

    /// `Name(terms)`
    fn build_atom(&mut self, parsed_rule: Pair<Rule>) -> Result<Atom> {
        let mut inner = parsed_rule.into_inner();
        let name = next_inner(&mut inner, "predicate name")?.as_str();
        let terms = inner.map(Term::from_parsed_rule).collect::<Result<Vec<_>>>()?;
        self.atom(name, terms)
    }

    fn build_literal(&mut self, parsed_rule: Pair<Rule>) -> Result<Literal> {
        let mut inner = parsed_rule.into_inner();
        let node = next_inner(&mut inner, "literal")?;
        match node.as_rule() {
            Rule::atom => Ok(Literal::positive(self.build_atom(node)?)),
            Rule::neg_atom => {
                let mut neg = node.into_inner();
                let atom = self.build_atom(next_inner(&mut neg, "negated atom")?)?;
                Ok(Literal::negative(atom))
            }
            Rule::comparison => Ok(Literal::BuiltIn(BuiltInLiteral::Comparison(
                ComparisonLiteral::from_parsed_rule(node)?,
            ))),
            Rule::boolean => {
                let mut b = node.into_inner();
                let value = next_inner(&mut b, "boolean value")?.as_rule() == Rule::true_literal;
                Ok(Literal::BuiltIn(BuiltInLiteral::Boolean(value)))
            }
            Rule::custom => {
                let mut custom = node.into_inner();
                let operation = next_inner(&mut custom, "custom operation")?.as_str();
                let terms = custom
                    .map(Term::from_parsed_rule)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Literal::BuiltIn(BuiltInLiteral::Custom(CustomLiteral::new(
                    operation, terms,
                ))))
            }
            other => Err(ParserError::UnexpectedRule(
                "literal".into(),
                format!("{other:?}"),
            )),
        }
    }
}
