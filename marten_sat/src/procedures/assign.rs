/*!
Valuing and unvaluing an atom, with all the clause bookkeeping which follows.

# Overview

[assign](GenericContext::assign) values an atom and walks the appearance list of the atom, so
every counter attached to a clause containing the atom is revised in a single pass:

- An occurrence agreeing with the value may give the clause its satisfier, in which case the whole
  clause leaves the heuristic tallies.
- An occurrence falsified by the value leaves the atom's own tallies, and may reveal the clause to
  be unit (enqueued for propagation) or empty (a conflict).

On a conflict, the conflict is attributed to the empty clause, and the partial walk is reversed by
the bounded form of unassign before failure is returned --- the caller never observes a
half-applied assignment.

# Ordering

Within the walk, the remaining-literal counter of a clause is decremented *before* the
satisfied/unit/empty decision for that clause is read.
The decision reads the post-decrement value.
*/

use crate::{
    context::GenericContext,
    misc::log::targets,
    structures::literal::{CLiteral, Literal},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Values the atom of the given literal with the polarity of the literal, and revises every
    /// counter which follows.
    ///
    /// Returns false on a conflict, with the partial application already reversed.
    /// Valuing an atom which already has a value --- any value --- succeeds without effect, which
    /// makes repeat entries on the propagation queue safe.
    pub fn assign(&mut self, literal: CLiteral) -> bool {
        let atom = literal.atom();
        if self.assignment_db.value_of(atom).is_some() {
            return true;
        }
        self.assignment_db.set_value(atom, literal.polarity());
        log::trace!(target: targets::VALUATION, "Valued {literal}");

        // The index of the appearance at which an empty clause was found, with the clause.
        let mut conflict = None;

        let GenericContext {
            formula,
            assignment_db,
            propagation_q,
            ..
        } = self;

        for (index, occurrence) in formula.appearances(atom).iter().enumerate() {
            let clause = occurrence.clause;
            assignment_db.rem[clause] -= 1;

            if occurrence.polarity == literal.polarity() {
                // The occurrence agrees with the value.
                if assignment_db.satisfier[clause].is_none() {
                    assignment_db.satisfier[clause] = Some(atom);
                    assignment_db.unsatisfied -= 1;
                    assignment_db.unmark_clause(formula.clause(clause));
                }
            } else {
                // The occurrence is falsified by the value.
                assignment_db.retire_tally(atom, occurrence.polarity);

                if assignment_db.satisfier[clause].is_none() {
                    match assignment_db.rem[clause] {
                        0 => {
                            conflict = Some((index, clause));
                            break;
                        }

                        1 => {
                            // The clause is unit: find its sole unvalued literal.
                            // A duplicate-literal clause may have none, as the walk values the
                            // atom before the walk begins.
                            let unit = formula
                                .clause(clause)
                                .iter()
                                .find(|candidate| {
                                    assignment_db.value_of(candidate.atom()).is_none()
                                });
                            if let Some(unit) = unit {
                                log::trace!(target: targets::QUEUE, "Queued {unit} from clause {clause}");
                                propagation_q.push(*unit, clause);
                            }
                        }

                        _ => {}
                    }
                }
            }
        }

        match conflict {
            None => true,

            Some((index, clause)) => {
                log::trace!(target: targets::CONFLICT, "Contradiction on {literal} in clause {clause}");
                self.counters.total_conflicts += 1;

                self.note_clause_conflict(atom, clause);
                self.unassign_upto(literal, index + 1);

                false
            }
        }
    }

    /// Reverses the first `upto` steps of an assign of the given literal.
    ///
    /// The bounded form exists so a mid-assign conflict does not reverse appearances the assign
    /// never processed.
    /// Unvaluing an atom without a value is without effect.
    pub fn unassign_upto(&mut self, literal: CLiteral, upto: usize) {
        let atom = literal.atom();
        if self.assignment_db.value_of(atom).is_none() {
            return;
        }
        debug_assert_eq!(self.assignment_db.value_of(atom), Some(literal.polarity()));

        self.assignment_db.clear_value(atom);
        log::trace!(target: targets::VALUATION, "Unvalued {literal}");

        let GenericContext {
            formula,
            assignment_db,
            ..
        } = self;

        for occurrence in &formula.appearances(atom)[..upto] {
            let clause = occurrence.clause;
            assignment_db.rem[clause] += 1;

            if occurrence.polarity == literal.polarity() {
                if assignment_db.satisfier[clause] == Some(atom) {
                    assignment_db.satisfier[clause] = None;
                    assignment_db.unsatisfied += 1;
                    assignment_db.mark_clause(formula.clause(clause));
                }
            } else {
                assignment_db.restore_tally(atom, occurrence.polarity);
            }
        }
    }

    /// Reverses an assign of the given literal in full.
    pub fn unassign(&mut self, literal: CLiteral) {
        let appearance_count = self.formula.appearances(literal.atom()).len();
        self.unassign_upto(literal, appearance_count);
    }
}

#[cfg(test)]
mod assign_tests {
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
    fn satisfier_is_the_first_agreeing_atom() {
        // 1 2 0
        let mut ctx = assembled(vec![vec![CLiteral::new(0, true), CLiteral::new(1, true)]]);

        assert!(ctx.assign(CLiteral::new(0, true)));
        assert!(ctx.assign(CLiteral::new(1, true)));

        assert_eq!(ctx.assignment_db.satisfier[0], Some(0));
        assert!(ctx.assignment_db.all_satisfied());
        assert!(ctx.assignment_db.consistent_with(&ctx.formula));
    }

    #[test]
    fn assign_is_idempotent() {
        let mut ctx = assembled(vec![vec![CLiteral::new(0, true)]]);

        assert!(ctx.assign(CLiteral::new(0, true)));
        let snapshot = ctx.assignment_db.clone();

        // A repeat, and even a contrary, assign of a valued atom is without effect.
        assert!(ctx.assign(CLiteral::new(0, true)));
        assert!(ctx.assign(CLiteral::new(0, false)));
        assert_eq!(ctx.assignment_db, snapshot);
    }

    #[test]
    fn units_are_queued() {
        // 1 2 0, assigning -1 makes the clause unit on 2.
        let mut ctx = assembled(vec![vec![CLiteral::new(0, true), CLiteral::new(1, true)]]);

        assert!(ctx.assign(CLiteral::new(0, false)));

        assert_eq!(ctx.propagation_q.len(), 1);
        assert_eq!(ctx.propagation_q.literal_at(0), CLiteral::new(1, true));
        assert_eq!(ctx.propagation_q.forcing_clause(1), 0);
    }

    #[test]
    fn a_conflict_rolls_the_assign_back() {
        // 1 0 / 1 2 0, assigning -1 empties the first clause.
        let mut ctx = assembled(vec![
            vec![CLiteral::new(0, true)],
            vec![CLiteral::new(0, true), CLiteral::new(1, true)],
        ]);
        let snapshot = ctx.assignment_db.clone();

        assert!(!ctx.assign(CLiteral::new(0, false)));

        assert_eq!(ctx.assignment_db, snapshot);
        assert!(ctx.assignment_db.consistent_with(&ctx.formula));
        assert_eq!(ctx.counters.total_conflicts, 1);
    }

    #[test]
    fn undo_isolation() {
        // 1 -2 0 / 2 3 0 / -1 -3 0
        let mut ctx = assembled(vec![
            vec![CLiteral::new(0, true), CLiteral::new(1, false)],
            vec![CLiteral::new(1, true), CLiteral::new(2, true)],
            vec![CLiteral::new(0, false), CLiteral::new(2, false)],
        ]);
        let fresh = ctx.assignment_db.clone();

        for polarity in [true, false] {
            let literal = CLiteral::new(0, polarity);
            assert!(ctx.assign(literal));
            assert!(ctx.assignment_db.consistent_with(&ctx.formula));

            ctx.unassign(literal);
            assert_eq!(ctx.assignment_db, fresh);
        }
    }

    #[test]
    fn tallies_follow_satisfaction() {
        // 1 -2 0 / 2 3 0
        let mut ctx = assembled(vec![
            vec![CLiteral::new(0, true), CLiteral::new(1, false)],
            vec![CLiteral::new(1, true), CLiteral::new(2, true)],
        ]);

        // Satisfying the first clause removes its literals from the tallies of unvalued atoms.
        assert!(ctx.assign(CLiteral::new(0, true)));
        assert_eq!(ctx.assignment_db.negative_tally(1), 0);
        assert_eq!(ctx.assignment_db.positive_tally(1), 1);
        assert_eq!(ctx.assignment_db.tally_sum(2), 1);
        assert!(ctx.assignment_db.consistent_with(&ctx.formula));
    }

    #[test]
    fn duplicate_literals_handled() {
        // 1 1 0, both occurrences walked, no unit found on the way to satisfaction.
        let mut ctx = assembled(vec![vec![CLiteral::new(0, true), CLiteral::new(0, true)]]);

        assert!(ctx.assign(CLiteral::new(0, true)));
        assert_eq!(ctx.assignment_db.rem[0], 0);
        assert!(ctx.assignment_db.all_satisfied());
        assert!(ctx.propagation_q.is_empty());

        ctx.unassign(CLiteral::new(0, true));
        assert!(ctx.assignment_db.consistent_with(&ctx.formula));
    }

    #[test]
    fn complementary_literals_handled() {
        // 1 -1 0, satisfied by either value of the atom.
        let mut ctx = assembled(vec![vec![CLiteral::new(0, true), CLiteral::new(0, false)]]);

        assert!(ctx.assign(CLiteral::new(0, false)));
        assert!(ctx.assignment_db.all_satisfied());
        assert_eq!(ctx.assignment_db.rem[0], 0);

        ctx.unassign(CLiteral::new(0, false));
        assert!(ctx.assignment_db.consistent_with(&ctx.formula));
    }
}
