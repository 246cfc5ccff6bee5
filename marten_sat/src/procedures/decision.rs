/*!
Choosing a branching atom, and the polarity to try first.

# Overview

The core decision procedure is *most-constrained*: branch on an unvalued atom occurring in the
most clauses which are yet to be satisfied, exactly the quantity the
[tallies](crate::db::assignment) maintain.
Ties break to the lowest atom, so the choice is a pure function of the search state.

If no unvalued atom occurs in an unsatisfied clause the search is stuck: no further valuation can
satisfy the remaining clauses, and no candidate is returned.
For this reason the driver asks whether every clause is satisfied *before* asking for a candidate.

The polarity to try first is the *majority sign* of the atom across unsatisfied clauses, with
ties preferring true.

# Randomness

With a positive [random_decision_bias](crate::config::Config::random_decision_bias) a uniformly
random unvalued atom is branched on instead, with the configured probability.
Any unvalued atom may be chosen, including one with no unsatisfied occurrences.
*/

use rand::seq::IteratorRandom;

use crate::{context::GenericContext, structures::atom::Atom};

impl<R: rand::Rng> GenericContext<R> {
    /// The branching atom to try next, if any.
    pub fn choose_atom(&mut self) -> Option<Atom> {
        if self.config.random_decision_bias > 0.0
            && self.rng.random_bool(self.config.random_decision_bias)
        {
            self.random_unvalued_atom()
        } else {
            self.most_constrained_atom()
        }
    }

    /// An unvalued atom with the greatest count of occurrences in unsatisfied clauses, or none if
    /// every unvalued atom has no such occurrence.
    ///
    /// Ties break to the lowest atom.
    pub fn most_constrained_atom(&self) -> Option<Atom> {
        let mut candidate = None;
        let mut candidate_tally = 0;

        for atom in self.assignment_db.unvalued_atoms() {
            let tally = self.assignment_db.tally_sum(atom);
            if tally > candidate_tally {
                candidate = Some(atom);
                candidate_tally = tally;
            }
        }

        candidate
    }

    /// A uniformly random unvalued atom, or none if every atom has a value.
    pub fn random_unvalued_atom(&mut self) -> Option<Atom> {
        let GenericContext {
            assignment_db, rng, ..
        } = self;
        assignment_db.unvalued_atoms().choose(rng)
    }

    /// The polarity of the given atom to try first: the majority sign of the atom across
    /// unsatisfied clauses, with ties preferring true.
    pub fn preferred_polarity(&self, atom: Atom) -> bool {
        self.assignment_db.positive_tally(atom) >= self.assignment_db.negative_tally(atom)
    }
}

#[cfg(test)]
mod decision_tests {
    use crate::{
        config::Config,
        context::Context,
        structures::{clause::CClause, literal::CLiteral},
    };

    fn assembled(clauses: Vec<CClause>) -> Context {
        let mut the_context = Context::from_config(Config::default());
        for clause in clauses {
            the_context.add_clause(clause).expect("clause addition failure");
        }
        the_context.assemble();
        the_context
    }

    #[test]
    fn the_most_constrained_atom_is_chosen() {
        // 1 2 0 / -2 3 0 / 2 -3 0
        let ctx = assembled(vec![
            vec![CLiteral::new(0, true), CLiteral::new(1, true)],
            vec![CLiteral::new(1, false), CLiteral::new(2, true)],
            vec![CLiteral::new(1, true), CLiteral::new(2, false)],
        ]);

        assert_eq!(ctx.most_constrained_atom(), Some(1));
    }

    #[test]
    fn ties_break_to_the_lowest_atom() {
        // 1 2 0 / -1 -2 0
        let ctx = assembled(vec![
            vec![CLiteral::new(0, true), CLiteral::new(1, true)],
            vec![CLiteral::new(0, false), CLiteral::new(1, false)],
        ]);

        assert_eq!(ctx.most_constrained_atom(), Some(0));
    }

    #[test]
    fn no_candidate_without_unsatisfied_occurrences() {
        // 1 2 0, satisfied by 1, leaving 2 with a zero tally.
        let mut ctx = assembled(vec![vec![CLiteral::new(0, true), CLiteral::new(1, true)]]);

        assert!(ctx.assign(CLiteral::new(0, true)));
        assert_eq!(ctx.most_constrained_atom(), None);
    }

    #[test]
    fn majority_polarity_is_preferred() {
        // -1 2 0 / -1 3 0 / 1 -3 0
        let ctx = assembled(vec![
            vec![CLiteral::new(0, false), CLiteral::new(1, true)],
            vec![CLiteral::new(0, false), CLiteral::new(2, true)],
            vec![CLiteral::new(0, true), CLiteral::new(2, false)],
        ]);

        assert!(!ctx.preferred_polarity(0));
        assert!(ctx.preferred_polarity(1));
    }

    #[test]
    fn polarity_ties_prefer_true() {
        // 1 2 0 / -1 -2 0
        let ctx = assembled(vec![
            vec![CLiteral::new(0, true), CLiteral::new(1, true)],
            vec![CLiteral::new(0, false), CLiteral::new(1, false)],
        ]);

        assert!(ctx.preferred_polarity(0));
    }
}
