/*!
Determines the satisfiability of the formula in a context.

# Overview

The search is a depth-first recursion over branching atoms.
At each node:

1. If every clause is satisfied, the formula is satisfiable --- this is checked *before* a
   branching atom is sought, as a satisfying (partial) valuation may well leave atoms, and so
   candidate branches, open.
2. Otherwise a branching atom is [chosen](crate::procedures::decision), its conflict records are
   cleared, and the current length of the propagation queue is recorded as the restore point for
   the branch.
3. The preferred polarity is attempted: the atom is valued, the queue is drained, and the search
   recurses.
   Each stage of an attempt which succeeds is matched by an exactly-scoped undo if a later stage
   fails, so a failed attempt leaves no trace beyond the conflict records.
4. If the attempt fails the conflict records of the atom steer the return:
   - If no failure beneath the branch named the atom, the failures did not depend on the atom, and
     the opposite polarity would fare no better: the search *backjumps*, returning failure
     immediately.
     The recursion unwinds through as many such nodes as are irrelevant to the accumulated
     conflicts --- no frames are popped explicitly, as returning through an already-tried node
     costs nothing thanks to the maintained state.
   - Otherwise the lifted conflict knowledge is absorbed and the opposite polarity is attempted,
     whose result is the result of the node.

# Input units

Before the recursion begins the queue is seeded with the literal of every clause which is unit as
given.
Such clauses never *become* unit --- their remaining-literal counter never transitions to one ---
and so would otherwise escape propagation entirely, leaving a branch free to falsify one directly
and mistake the self-inflicted conflict for an unsatisfiable subtree.
Draining the seeded queue settles these literals for the whole search, and may alone decide the
formula.

# Termination

With no branching atom available and some clause unsatisfied, no valuation of the remaining atoms
can help, and the search fails.
On typical inputs termination happens through the satisfied check instead.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
    reports::Report,
    structures::literal::{CLiteral, Literal},
    types::err,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context.
    ///
    /// The first call assembles the formula store; later calls return the settled report.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Input => self.assemble(),
            ContextState::Solving => return Err(err::ErrorKind::InvalidState),
            ContextState::Satisfiable | ContextState::Unsatisfiable => return Ok(self.report()),
        }
        self.state = ContextState::Solving;

        let satisfiable = self.queue_input_units() && self.dfs(0);

        self.state = match satisfiable {
            true => ContextState::Satisfiable,
            false => ContextState::Unsatisfiable,
        };

        log::info!(
            "Solve complete: {} after {} decisions, {} propagations, {} conflicts, {} backjumps",
            self.report(),
            self.counters.total_decisions,
            self.counters.total_propagations,
            self.counters.total_conflicts,
            self.counters.total_backjumps,
        );

        Ok(self.report())
    }

    /// Queues the literal of every clause which is unit as given, and drains the queue.
    ///
    /// Returns false if the drain found a conflict, in which case the formula is unsatisfiable.
    fn queue_input_units(&mut self) -> bool {
        let GenericContext {
            formula,
            propagation_q,
            ..
        } = self;

        for (index, clause) in formula.clauses().enumerate() {
            if let [literal] = clause.as_slice() {
                log::trace!(target: targets::QUEUE, "Queued input unit {literal}");
                propagation_q.push(*literal, index);
            }
        }

        self.propagate_from(0)
    }

    /// The depth-first search, from a node at the given level.
    fn dfs(&mut self, level: usize) -> bool {
        if self.assignment_db.all_satisfied() {
            return true;
        }

        let Some(atom) = self.choose_atom() else {
            // Unsatisfied clauses remain and no unvalued atom occurs in any of them.
            return false;
        };

        self.counters.total_decisions += 1;

        let first_try = self.preferred_polarity(atom);
        log::trace!(target: targets::DECISION, "Branching on {atom} at level {level}");

        self.propagation_q.set_mark(atom);
        self.conflict_db.clear(atom);

        if self.try_value(CLiteral::new(atom, first_try), level) {
            return true;
        }

        if self.conflict_db.implicated(atom) {
            self.conflict_db.absorb(atom);
            self.try_value(CLiteral::new(atom, !first_try), level)
        } else {
            self.counters.total_backjumps += 1;
            log::trace!(target: targets::BACKJUMP, "Backjumping past level {level}");
            false
        }
    }

    /// A single attempt at a value for a branching atom: value, drain the queue, recurse.
    ///
    /// On failure at any stage the earlier stages are undone, in reverse.
    fn try_value(&mut self, literal: CLiteral, level: usize) -> bool {
        self.counters.total_attempts += 1;
        let mark = self.propagation_q.mark_of(literal.atom());

        if self.assign(literal) {
            if self.propagate_from(mark) {
                if self.dfs(level + 1) {
                    return true;
                }
                self.unwind_propagations(mark, self.propagation_q.len());
            }
            self.unassign(literal);
        }

        false
    }
}

#[cfg(test)]
mod solve_tests {
    use crate::{
        config::Config,
        context::Context,
        reports::Report,
        structures::{clause::CClause, literal::CLiteral},
        types::err::ErrorKind,
    };

    fn context_over(clauses: Vec<CClause>) -> Context {
        let mut the_context = Context::from_config(Config::default());
        for clause in clauses {
            the_context.add_clause(clause).expect("clause addition failure");
        }
        the_context
    }

    #[test]
    fn one_literal() {
        let mut ctx = context_over(vec![vec![CLiteral::new(0, true)]]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(0), Some(true));
    }

    #[test]
    fn conflict() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let mut ctx = context_over(vec![vec![p, q], vec![-p, -q], vec![p, -q], vec![-p, q]]);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn unit_conjunct() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let mut ctx = context_over(vec![vec![p, q], vec![-p]]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(0), Some(false));
        assert_eq!(ctx.value_of(1), Some(true));
    }

    #[test]
    fn an_empty_formula_is_satisfiable() {
        let mut ctx = context_over(vec![]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model(), Some(vec![]));
    }

    #[test]
    fn an_empty_clause_is_unsatisfiable() {
        let mut ctx = context_over(vec![vec![CLiteral::new(0, true)], vec![]]);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn a_settled_report_is_returned_again() {
        let mut ctx = context_over(vec![vec![CLiteral::new(0, true)]]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn clauses_are_refused_after_a_solve() {
        let mut ctx = context_over(vec![vec![CLiteral::new(0, true)]]);

        assert!(ctx.solve().is_ok());
        assert_eq!(
            ctx.add_clause(vec![CLiteral::new(0, false)]),
            Err(ErrorKind::InvalidState)
        );
    }

    #[test]
    fn input_units_settle_before_branching() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        // -1 0 alongside clauses giving 1 a positive majority: without the input unit pass,
        // branching true on 1 would be mistaken for an unsatisfiable subtree.
        let mut ctx = context_over(vec![vec![-p], vec![p, q], vec![p, r]]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(0), Some(false));
        assert_eq!(ctx.counters.total_decisions, 0);
    }
}
