/*!
Draining and unwinding the queue of unit consequences.

# Overview

[propagate_from](GenericContext::propagate_from) applies queued consequences in order, from a
given position to the end of the queue --- and the queue may grow while the loop runs, as applying
a consequence may reveal further unit clauses.

Applying a consequence begins by clearing the conflict records of the atom: a fresh implication's
conflict record starts empty.
A repeat entry for an atom which already has a value is applied without effect.

# Unwinding

On a conflict, [unwind_propagations](GenericContext::unwind_propagations) reverses the committed
consequences in reverse order.
For each, the conflict database is told the propagation happened *before* the atom is unvalued:
that the consequence was forced at all is itself a conflict dependency, and must be visible up the
tree --- and the attribution reads the literals of the forcing clause, so must run while the
record is intact.
*/

use crate::{
    context::GenericContext,
    misc::log::targets,
    structures::literal::Literal,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Applies queued consequences from the given position to the (possibly growing) end of the
    /// queue.
    ///
    /// On a conflict, consequences committed by this call are unwound and false is returned.
    pub fn propagate_from(&mut self, from: usize) -> bool {
        let mut index = from;

        while index < self.propagation_q.len() {
            let literal = self.propagation_q.literal_at(index);

            self.conflict_db.clear(literal.atom());
            self.counters.total_propagations += 1;
            log::trace!(target: targets::PROPAGATION, "Propagating {literal}");

            if !self.assign(literal) {
                self.unwind_propagations(from, index);
                return false;
            }

            index += 1;
        }

        true
    }

    /// Reverses the consequences at queue positions `low..high`, in reverse order, and restores
    /// the queue to length `low`.
    pub fn unwind_propagations(&mut self, low: usize, high: usize) {
        for index in (low..high).rev() {
            let literal = self.propagation_q.literal_at(index);
            let atom = literal.atom();

            // Attribution strictly before unassign: see the module documentation.
            let forcing = self.propagation_q.forcing_clause(atom);
            self.note_clause_conflict(atom, forcing);

            self.unassign(literal);
        }

        self.propagation_q.truncate(low);
    }
}
