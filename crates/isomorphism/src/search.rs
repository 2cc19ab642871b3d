//! Work-list, choice points and undo trail of the isomorphism search.
//!
//! The search never recurses natively. Pending work is a stack of [`Goal`]s;
//! every change to the search state (goals taken or added, predicate pairs
//! committed, right-hand items claimed) is recorded on a trail. A choice
//! point remembers the goal it expanded, where to resume among its
//! alternatives, and the trail height before the expansion, so backtracking
//! restores the work-list and the [`PredicateMap`] together.

use crate::{LiteralMap, PredicateMap, TermMap};
use parser::{DerivationRule, Literal, NormalClause, PredicateId};
use tracing::trace;

/// One unit of pending work.
#[derive(Debug, Clone)]
pub(crate) enum Goal<'a> {
    /// Pair the left clauses from `next` on with unclaimed right clauses.
    Clauses {
        left: &'a [NormalClause<'a>],
        right: &'a [NormalClause<'a>],
        next: usize,
        claims: usize,
    },
    /// Pair the left rules from `next` on with unclaimed right rules.
    Rules {
        left: &'a [DerivationRule],
        right: &'a [DerivationRule],
        any_order: bool,
        next: usize,
        claims: usize,
    },
    /// Show the rules of two freshly paired derived predicates isomorphic.
    DerivationRules { left: PredicateId, right: PredicateId },
    /// Pair the left body literals from `next` on.
    Body {
        left: &'a [Literal],
        right: &'a [Literal],
        next: usize,
        lmap: LiteralMap,
        tmap: TermMap,
    },
}

impl<'a> Goal<'a> {
    /// A whole body comparison seeded with `tmap`.
    pub(crate) fn body(left: &'a [Literal], right: &'a [Literal], tmap: TermMap) -> Self {
        Self::Body {
            left,
            right,
            next: 0,
            lmap: LiteralMap::new(),
            tmap,
        }
    }
}

enum Undo<'a> {
    Popped(Goal<'a>),
    Pushed,
    Committed(PredicateId),
    Claimed { set: usize, index: usize },
    Allocated,
}

struct Choice<'a> {
    goal: Goal<'a>,
    cursor: usize,
    mark: usize,
}

/// Mutable state of one search.
pub(crate) struct Search<'a> {
    goals: Vec<Goal<'a>>,
    trail: Vec<Undo<'a>>,
    choices: Vec<Choice<'a>>,
    claims: Vec<Vec<bool>>,
    pmap: PredicateMap,
    rollbacks: usize,
}

impl<'a> Search<'a> {
    /// An empty search starting from the pairings in `pmap`.
    pub(crate) fn new(pmap: PredicateMap) -> Self {
        Self {
            goals: Vec::new(),
            trail: Vec::new(),
            choices: Vec::new(),
            claims: Vec::new(),
            pmap,
            rollbacks: 0,
        }
    }

    #[inline]
    pub(crate) fn pmap(&self) -> &PredicateMap {
        &self.pmap
    }

    /// Predicate commitments undone so far.
    #[inline]
    pub(crate) fn rollbacks(&self) -> usize {
        self.rollbacks
    }

    /// Current trail height.
    #[inline]
    pub(crate) fn mark(&self) -> usize {
        self.trail.len()
    }

    /// Take the next goal; `None` once all work is done.
    pub(crate) fn next_goal(&mut self) -> Option<Goal<'a>> {
        let goal = self.goals.pop()?;
        self.trail.push(Undo::Popped(goal.clone()));
        Some(goal)
    }

    /// Schedule `goal`. Goals pushed later run first.
    pub(crate) fn push(&mut self, goal: Goal<'a>) {
        self.goals.push(goal);
        self.trail.push(Undo::Pushed);
    }

    pub(crate) fn commit(&mut self, p: PredicateId, q: PredicateId) {
        self.pmap.put(p, q);
        self.trail.push(Undo::Committed(p));
    }

    /// A fresh set of `len` unclaimed right-hand items.
    pub(crate) fn new_claim_set(&mut self, len: usize) -> usize {
        self.claims.push(vec![false; len]);
        self.trail.push(Undo::Allocated);
        self.claims.len() - 1
    }

    pub(crate) fn is_claimed(&self, set: usize, index: usize) -> bool {
        self.claims[set][index]
    }

    pub(crate) fn claim(&mut self, set: usize, index: usize) {
        self.claims[set][index] = true;
        self.trail.push(Undo::Claimed { set, index });
    }

    /// Remember that `goal` has alternatives left from `cursor` on, to be
    /// retried from the state at trail height `mark`.
    pub(crate) fn choose(&mut self, goal: Goal<'a>, cursor: usize, mark: usize) {
        self.choices.push(Choice { goal, cursor, mark });
    }

    /// Return to the most recent choice point: `(goal, cursor, mark)`, or
    /// `None` when no alternative is left anywhere.
    pub(crate) fn backtrack(&mut self) -> Option<(Goal<'a>, usize, usize)> {
        let choice = self.choices.pop()?;
        self.undo_to(choice.mark);
        Some((choice.goal, choice.cursor, choice.mark))
    }

    fn undo_to(&mut self, mark: usize) {
        while self.trail.len() > mark {
            let Some(undo) = self.trail.pop() else {
                break;
            };
            match undo {
                Undo::Popped(goal) => self.goals.push(goal),
                Undo::Pushed => {
                    self.goals.pop();
                }
                Undo::Committed(p) => {
                    trace!("Undoing pairing of predicate {p}");
                    self.pmap.remove_domain(p);
                    self.rollbacks += 1;
                }
                Undo::Claimed { set, index } => self.claims[set][index] = false,
                Undo::Allocated => {
                    self.claims.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> PredicateId {
        PredicateId::new(i)
    }

    #[test]
    fn backtracking_restores_goals_claims_and_pairings() {
        let mut search = Search::new(PredicateMap::new());
        search.push(Goal::DerivationRules { left: p(0), right: p(0) });
        let first = search.next_goal().expect("initial goal");
        let mark = search.mark();

        let set = search.new_claim_set(2);
        search.claim(set, 1);
        search.commit(p(1), p(2));
        search.push(Goal::DerivationRules { left: p(1), right: p(2) });
        search.choose(first, 1, mark);

        assert!(search.is_claimed(set, 1));
        assert!(!search.pmap().is_incompatible_with_map(p(1), p(2)));
        assert!(search.pmap().contains_key(p(1)));

        let (goal, cursor, resumed_mark) = search.backtrack().expect("a choice point");
        assert!(matches!(goal, Goal::DerivationRules { left, .. } if left == p(0)));
        assert_eq!((cursor, resumed_mark), (1, mark));
        assert!(!search.pmap().contains_key(p(1)));
        assert_eq!(search.rollbacks(), 1);
        assert!(search.next_goal().is_none());
        assert!(search.backtrack().is_none());
    }

    #[test]
    fn undone_pops_put_goals_back() {
        let mut search = Search::new(PredicateMap::new());
        search.push(Goal::DerivationRules { left: p(0), right: p(1) });
        let mark = search.mark();
        search.choose(Goal::DerivationRules { left: p(5), right: p(5) }, 0, mark);
        assert!(search.next_goal().is_some());
        assert!(search.next_goal().is_none());

        search.backtrack().expect("a choice point");
        assert!(matches!(
            search.next_goal(),
            Some(Goal::DerivationRules { right, .. }) if right == p(1)
        ));
    }
}
