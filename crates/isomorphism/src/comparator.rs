//! Backtracking search for structural isomorphisms between logic schemas.
//!
//! Two structures are isomorphic when some combination of the symmetries
//! allowed by [`IsomorphismOptions`] (variable renaming, literal reordering,
//! derived predicate renaming) makes them identical. The search matches one
//! literal at a time against every admissible candidate on the other side,
//! threading three correspondences through it:
//!
//! - a [`TermMap`], copied and extended per candidate,
//! - a [`LiteralMap`], copied and extended per candidate,
//! - a shared [`PredicateMap`], extended in place and restored on backtrack.
//!
//! Pairing two derived literals for the first time creates an obligation to
//! show that the two predicates' derivation rules are isomorphic as well.
//! Obligations are goals on an explicit work-list and run once the literals
//! of the current body are paired, so a later choice can still be rejected
//! by an earlier commitment and vice versa. Schemas with thousands of
//! clauses or deeply chained derived predicates need no native recursion.

use crate::search::{Goal, Search};
use crate::{IsomorphismError, IsomorphismOptions, LiteralId, LiteralMap, PredicateMap, Side, TermMap};
use itertools::Itertools;
use parser::{
    Atom, BuiltInLiteral, DerivationRule, Literal, LogicConstraint, LogicSchema, NormalClause,
    OrdinaryLiteral, PredicateId,
};
use std::cell::Cell;
use tracing::{debug, trace};

/// Search effort spent by one comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Literal pairings whose term maps were explored.
    pub candidates: usize,
    /// Predicate commitments undone after a failed branch.
    pub rollbacks: usize,
    /// Goals taken from the work-list.
    pub obligations: usize,
}

/// Outcome of expanding one goal.
enum Step {
    Failed,
    /// Fully handled, with no alternative left to retry.
    Done,
    /// Took an alternative; resume from this cursor on backtrack.
    Chose(usize),
}

/// Decides isomorphism between structures of a left and a right schema.
///
/// Literals, rules and constraints handed to the comparator must belong to
/// the schema on their side: predicate handles are resolved against it.
pub struct IsomorphismComparator<'s> {
    options: IsomorphismOptions,
    left: &'s LogicSchema,
    right: &'s LogicSchema,
    candidates: Cell<usize>,
    rollbacks: Cell<usize>,
    obligations: Cell<usize>,
}

impl<'s> IsomorphismComparator<'s> {
    #[must_use]
    pub fn new(options: IsomorphismOptions, left: &'s LogicSchema, right: &'s LogicSchema) -> Self {
        Self {
            options,
            left,
            right,
            candidates: Cell::new(0),
            rollbacks: Cell::new(0),
            obligations: Cell::new(0),
        }
    }

    #[must_use]
    pub fn options(&self) -> IsomorphismOptions {
        self.options
    }

    /// Accumulated effort of every comparison run so far.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            candidates: self.candidates.get(),
            rollbacks: self.rollbacks.get(),
            obligations: self.obligations.get(),
        }
    }

    // ---------------------------------------------------------------------
    // Entry points
    // ---------------------------------------------------------------------

    /// Whether two literal lists are isomorphic.
    #[must_use]
    pub fn are_isomorphic_literals(&self, literals1: &[Literal], literals2: &[Literal]) -> bool {
        self.are_isomorphic_literals_pinned(literals1, literals2, &[])
    }

    /// Like [`Self::are_isomorphic_literals`], but each variable in `pinned`
    /// must map to itself.
    #[must_use]
    pub fn are_isomorphic_literals_pinned(
        &self,
        literals1: &[Literal],
        literals2: &[Literal],
        pinned: &[&str],
    ) -> bool {
        let mut search = Search::new(PredicateMap::new());
        search.push(Goal::body(literals1, literals2, TermMap::pinned(pinned)));
        self.run(search)
    }

    /// Whether two constraints are isomorphic. Identifiers are ignored.
    #[must_use]
    pub fn are_isomorphic_constraints(
        &self,
        constraint1: &LogicConstraint,
        constraint2: &LogicConstraint,
    ) -> bool {
        let mut search = Search::new(PredicateMap::new());
        search.push(Goal::body(constraint1.body(), constraint2.body(), TermMap::new()));
        self.run(search)
    }

    /// Whether two derivation rules are isomorphic.
    ///
    /// Head terms are paired positionally and seed the body comparison; the
    /// head predicates are paired like two derived literals.
    #[must_use]
    pub fn are_isomorphic_derivation_rules(
        &self,
        rule1: &DerivationRule,
        rule2: &DerivationRule,
    ) -> bool {
        let mut pmap = PredicateMap::new();
        let Some(tmap) = self.head_term_map(rule1.head(), rule2.head(), &pmap) else {
            return false;
        };
        pmap.put(rule1.head().predicate(), rule2.head().predicate());
        let mut search = Search::new(pmap);
        search.push(Goal::body(rule1.body(), rule2.body(), tmap));
        self.run(search)
    }

    /// Whether the left and right schemas are isomorphic.
    ///
    /// Base predicates must coincide by name and arity, used or not. The
    /// normal clauses may then be matched in any order, whatever the options.
    #[must_use]
    pub fn are_isomorphic_schemas(&self) -> bool {
        if !self.base_predicates_correspond() {
            debug!("Base predicates differ; schemas are not isomorphic");
            return false;
        }
        let clauses1 = self.left.normal_clauses();
        let clauses2 = self.right.normal_clauses();
        if clauses1.len() != clauses2.len() {
            debug!("Clause counts differ; schemas are not isomorphic");
            return false;
        }

        let mut search = Search::new(PredicateMap::new());
        let claims = search.new_claim_set(clauses2.len());
        search.push(Goal::Clauses {
            left: &clauses1,
            right: &clauses2,
            next: 0,
            claims,
        });
        let found = self.run(search);
        debug!(
            "Schema comparison finished: isomorphic={found}, {:?}",
            self.stats()
        );
        found
    }

    /// Whether the left predicate `name1` and the right predicate `name2`
    /// are isomorphic: same arity, both base with the same name, or both
    /// derived with isomorphic derivation rules.
    pub fn are_isomorphic_predicates(
        &self,
        name1: &str,
        name2: &str,
    ) -> Result<bool, IsomorphismError> {
        let p1 = self
            .left
            .predicate_by_name(name1)
            .ok_or_else(|| IsomorphismError::UnknownPredicate {
                side: Side::Left,
                name: name1.to_string(),
            })?;
        let p2 = self
            .right
            .predicate_by_name(name2)
            .ok_or_else(|| IsomorphismError::UnknownPredicate {
                side: Side::Right,
                name: name2.to_string(),
            })?;

        if p1.arity() != p2.arity() || p1.is_derived() != p2.is_derived() {
            return Ok(false);
        }
        if p1.name() != p2.name()
            && (p1.is_base() || !self.options.changing_derived_predicate_name_allowed())
        {
            return Ok(false);
        }
        if p1.is_base() {
            return Ok(true);
        }

        let mut pmap = PredicateMap::new();
        pmap.put(p1.id(), p2.id());
        let mut search = Search::new(pmap);
        search.push(Goal::DerivationRules {
            left: p1.id(),
            right: p2.id(),
        });
        Ok(self.run(search))
    }

    // ---------------------------------------------------------------------
    // Search
    // ---------------------------------------------------------------------

    /// Take goals from the work-list until it is empty (isomorphic) or no
    /// choice point is left to backtrack to (not isomorphic).
    fn run<'a>(&self, mut search: Search<'a>) -> bool
    where
        's: 'a,
    {
        let found = 'search: loop {
            let Some(first) = search.next_goal() else {
                break true;
            };
            self.obligations.set(self.obligations.get() + 1);

            let (mut goal, mut cursor, mut mark) = (first, 0, search.mark());
            loop {
                match self.expand(&mut search, &goal, cursor) {
                    Step::Done => break,
                    Step::Chose(resume) => {
                        search.choose(goal, resume, mark);
                        break;
                    }
                    Step::Failed => {
                        let Some(choice) = search.backtrack() else {
                            break 'search false;
                        };
                        (goal, cursor, mark) = choice;
                    }
                }
            }
        };
        self.rollbacks.set(self.rollbacks.get() + search.rollbacks());
        found
    }

    fn expand<'a>(&self, search: &mut Search<'a>, goal: &Goal<'a>, cursor: usize) -> Step
    where
        's: 'a,
    {
        match goal {
            Goal::Clauses {
                left,
                right,
                next,
                claims,
            } => self.step_clauses(search, (*left, *right), *next, *claims, cursor),
            Goal::Rules {
                left,
                right,
                any_order,
                next,
                claims,
            } => self.step_rules(search, (*left, *right), *any_order, *next, *claims, cursor),
            Goal::DerivationRules { left, right } => {
                self.step_derivation_rules(search, *left, *right)
            }
            Goal::Body {
                left,
                right,
                next,
                lmap,
                tmap,
            } => self.step_body(search, (*left, *right), *next, lmap, tmap, cursor),
        }
    }

    /// Pair the next left clause with an unclaimed right clause of the same
    /// shape. Rules commit their head predicates, constraints pair with
    /// constraints.
    fn step_clauses<'a>(
        &self,
        search: &mut Search<'a>,
        (left, right): (&'a [NormalClause<'a>], &'a [NormalClause<'a>]),
        next: usize,
        claims: usize,
        cursor: usize,
    ) -> Step {
        if left.len() != right.len() {
            return Step::Failed;
        }
        let Some(&first) = left.get(next) else {
            return Step::Done;
        };

        for (j, &candidate) in right.iter().enumerate().skip(cursor) {
            if search.is_claimed(claims, j) || first.body().len() != candidate.body().len() {
                continue;
            }
            let (tmap, heads) = match (first, candidate) {
                (NormalClause::Constraint(_), NormalClause::Constraint(_)) => (TermMap::new(), None),
                (NormalClause::Rule(r1), NormalClause::Rule(r2)) => {
                    let Some(tmap) = self.head_term_map(r1.head(), r2.head(), search.pmap()) else {
                        continue;
                    };
                    (tmap, Some((r1.head().predicate(), r2.head().predicate())))
                }
                _ => continue,
            };

            if let Some((p, q)) = heads.filter(|&(p, _)| !search.pmap().contains_key(p)) {
                self.commit(search, p, q);
            }
            search.claim(claims, j);
            search.push(Goal::Clauses {
                left,
                right,
                next: next + 1,
                claims,
            });
            search.push(Goal::body(first.body(), candidate.body(), tmap));
            return Step::Chose(j + 1);
        }
        Step::Failed
    }

    /// Pair the next left rule with an unclaimed right rule (or, in fixed
    /// order, the rule at the same position). Heads seed the body term map.
    fn step_rules<'a>(
        &self,
        search: &mut Search<'a>,
        (left, right): (&'a [DerivationRule], &'a [DerivationRule]),
        any_order: bool,
        next: usize,
        claims: usize,
        cursor: usize,
    ) -> Step {
        if left.len() != right.len() {
            return Step::Failed;
        }
        let Some(first) = left.get(next) else {
            return Step::Done;
        };
        let (from, to) = if any_order {
            (cursor, right.len())
        } else {
            (cursor.max(next), next + 1)
        };

        for (j, candidate) in right.iter().enumerate().take(to).skip(from) {
            if search.is_claimed(claims, j) || first.body().len() != candidate.body().len() {
                continue;
            }
            let Some(tmap) = self.head_term_map(first.head(), candidate.head(), search.pmap()) else {
                continue;
            };
            search.claim(claims, j);
            search.push(Goal::Rules {
                left,
                right,
                any_order,
                next: next + 1,
                claims,
            });
            search.push(Goal::body(first.body(), candidate.body(), tmap));
            return Step::Chose(j + 1);
        }
        Step::Failed
    }

    fn step_derivation_rules<'a>(
        &self,
        search: &mut Search<'a>,
        left: PredicateId,
        right: PredicateId,
    ) -> Step
    where
        's: 'a,
    {
        let (schema1, schema2): (&'s LogicSchema, &'s LogicSchema) = (self.left, self.right);
        let (p1, p2) = (schema1.predicate(left), schema2.predicate(right));
        trace!("Checking derivation rules of {p1} against {p2}");

        let (rules1, rules2) = (p1.derivation_rules(), p2.derivation_rules());
        if rules1.len() != rules2.len() {
            return Step::Failed;
        }
        let claims = search.new_claim_set(rules2.len());
        search.push(Goal::Rules {
            left: rules1,
            right: rules2,
            any_order: self.options.change_literal_order_allowed(),
            next: 0,
            claims,
        });
        Step::Done
    }

    /// Pair the next left literal with an admissible right literal.
    ///
    /// A right literal can match under up to two term maps, so alternative
    /// `k` of candidate `j` sits at cursor position `2 * j + k`.
    fn step_body<'a>(
        &self,
        search: &mut Search<'a>,
        (left, right): (&'a [Literal], &'a [Literal]),
        next: usize,
        lmap: &LiteralMap,
        tmap: &TermMap,
        cursor: usize,
    ) -> Step {
        if left.len() != right.len() {
            return Step::Failed;
        }
        let Some(lit1) = left.get(next) else {
            return Step::Done;
        };
        let (from, to) = if self.options.change_literal_order_allowed() {
            (cursor / 2, right.len())
        } else {
            ((cursor / 2).max(next), next + 1)
        };

        for (j, lit2) in right.iter().enumerate().take(to).skip(from) {
            if lmap.contains_in_range(LiteralId::new(j)) {
                continue;
            }
            let maps = self.compatible_term_maps(lit1, lit2, search.pmap(), tmap);
            for (k, new_tmap) in maps.into_iter().enumerate() {
                let alternative = 2 * j + k;
                if alternative < cursor {
                    continue;
                }
                self.candidates.set(self.candidates.get() + 1);
                trace!("Trying {lit1} ~ {lit2}");

                let mut new_lmap = lmap.clone();
                new_lmap.put(LiteralId::new(next), LiteralId::new(j));
                let fresh = self
                    .derived_pair(lit1, lit2)
                    .filter(|&(p, _)| !search.pmap().contains_key(p));
                if let Some((p, q)) = fresh {
                    self.commit(search, p, q);
                    search.push(Goal::DerivationRules { left: p, right: q });
                }
                search.push(Goal::Body {
                    left,
                    right,
                    next: next + 1,
                    lmap: new_lmap,
                    tmap: new_tmap,
                });
                return Step::Chose(alternative + 1);
            }
        }
        Step::Failed
    }

    // ---------------------------------------------------------------------
    // Compatibility
    // ---------------------------------------------------------------------

    /// Term maps under which `lit1` matches `lit2`: none, one, or (for a
    /// self-symmetric comparison matched both ways) two.
    fn compatible_term_maps(
        &self,
        lit1: &Literal,
        lit2: &Literal,
        pmap: &PredicateMap,
        tmap: &TermMap,
    ) -> Vec<TermMap> {
        match (lit1, lit2) {
            (Literal::Ordinary(o1), Literal::Ordinary(o2)) => {
                self.ordinary_term_map(o1, o2, pmap, tmap).into_iter().collect()
            }
            (Literal::BuiltIn(b1), Literal::BuiltIn(b2)) => self.built_in_term_maps(b1, b2, tmap),
            _ => Vec::new(),
        }
    }

    fn ordinary_term_map(
        &self,
        o1: &OrdinaryLiteral,
        o2: &OrdinaryLiteral,
        pmap: &PredicateMap,
        tmap: &TermMap,
    ) -> Option<TermMap> {
        let (id1, id2) = (o1.atom().predicate(), o2.atom().predicate());
        let (p1, p2) = (self.left.predicate(id1), self.right.predicate(id2));

        if p1.arity() != p2.arity() || p1.is_derived() != p2.is_derived() {
            return None;
        }
        if p1.is_base() {
            if p1.name() != p2.name() {
                return None;
            }
        } else if pmap.is_incompatible_with_map(id1, id2)
            || (!self.options.changing_derived_predicate_name_allowed() && p1.name() != p2.name())
        {
            return None;
        }
        if o1.is_positive() != o2.is_positive() {
            return None;
        }
        tmap.extended(o1.terms(), o2.terms(), self.renaming_allowed())
    }

    fn built_in_term_maps(
        &self,
        b1: &BuiltInLiteral,
        b2: &BuiltInLiteral,
        tmap: &TermMap,
    ) -> Vec<TermMap> {
        let renaming = self.renaming_allowed();
        match (b1, b2) {
            (BuiltInLiteral::Comparison(c1), BuiltInLiteral::Comparison(c2)) => {
                let mut maps = Vec::with_capacity(2);
                if c1.operator() == c2.operator() {
                    maps.extend(tmap.extended(c1.terms(), c2.terms(), renaming));
                }
                if c1.operator().symmetric() == c2.operator() {
                    maps.extend(tmap.extended(c1.terms(), &c2.reversed_terms(), renaming));
                }
                maps
            }
            (BuiltInLiteral::Boolean(v1), BuiltInLiteral::Boolean(v2)) => {
                if v1 == v2 {
                    vec![tmap.clone()]
                } else {
                    Vec::new()
                }
            }
            (BuiltInLiteral::Custom(c1), BuiltInLiteral::Custom(c2)) => {
                if c1.operation() != c2.operation() {
                    return Vec::new();
                }
                tmap.extended(c1.terms(), c2.terms(), renaming)
                    .into_iter()
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Term map induced by two rule heads, if their predicates may correspond.
    fn head_term_map(&self, head1: &Atom, head2: &Atom, pmap: &PredicateMap) -> Option<TermMap> {
        let (id1, id2) = (head1.predicate(), head2.predicate());
        if head1.arity() != head2.arity() || pmap.is_incompatible_with_map(id1, id2) {
            return None;
        }
        if !self.options.changing_derived_predicate_name_allowed() && head1.name() != head2.name() {
            return None;
        }
        TermMap::new().extended(head1.terms(), head2.terms(), self.renaming_allowed())
    }

    /// Predicates of two ordinary literals over derived predicates.
    fn derived_pair(&self, lit1: &Literal, lit2: &Literal) -> Option<(PredicateId, PredicateId)> {
        let p = lit1.as_ordinary()?.atom().predicate();
        let q = lit2.as_ordinary()?.atom().predicate();
        (self.left.predicate(p).is_derived() && self.right.predicate(q).is_derived())
            .then_some((p, q))
    }

    fn base_predicates_correspond(&self) -> bool {
        let signatures = |schema: &LogicSchema| {
            schema
                .base_predicates()
                .map(|p| (p.name().to_string(), p.arity()))
                .sorted()
                .collect_vec()
        };
        signatures(self.left) == signatures(self.right)
    }

    fn renaming_allowed(&self) -> bool {
        self.options.change_variable_names_allowed()
    }


    fn commit(&self, search: &mut Search<'_>, p: PredicateId, q: PredicateId) {
        debug!(
            "Pairing {} with {}",
            self.left.predicate(p),
            self.right.predicate(q)
        );
        search.commit(p, q);
    }
}
