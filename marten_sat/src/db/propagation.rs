/*!
The propagation queue --- pending unit consequences, and the markers used to unwind them.

# Overview

A single growable queue of literals in enqueue order, together with:

- `mark`, for each atom, the queue length at the moment the atom was taken as a branching atom ---
  the restore point for the queue when the branch is undone.
- `forced_by`, for each atom, the clause which forced the most recent enqueue of the atom.

# Duplicates

An atom may sit on the queue more than once: queueing does not check the valuation, and a later
enqueue of an atom overwrites the atom's forcing clause.
This is safe, as applying a queued literal is idempotent --- an atom with a value is left as it is.

# Soundness

`forced_by` is written on every push, so the entry for an atom is meaningful whenever the atom
appears on the queue --- and only ever read for such atoms.
*/

use crate::{
    db::ClauseIndex,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The propagation queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropagationQ {
    /// Pending unit consequences, in enqueue order.
    queue: Vec<CLiteral>,

    /// For each atom, the queue length at the moment the atom was taken as a branching atom.
    mark: Vec<usize>,

    /// For each atom, the clause which forced the most recent enqueue of the atom.
    forced_by: Vec<ClauseIndex>,
}

impl PropagationQ {
    /// A fresh, empty, queue over the given count of atoms.
    pub fn new(atom_count: usize) -> Self {
        PropagationQ {
            queue: Vec::new(),
            mark: vec![0; atom_count],
            forced_by: vec![0; atom_count],
        }
    }

    /// The length of the queue.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The literal at the given position of the queue.
    pub fn literal_at(&self, index: usize) -> CLiteral {
        self.queue[index]
    }

    /// Enqueues a literal forced by the given clause.
    pub fn push(&mut self, literal: CLiteral, clause: ClauseIndex) {
        self.forced_by[literal.atom() as usize] = clause;
        self.queue.push(literal);
    }

    /// Discards every queue entry from the given length on.
    pub fn truncate(&mut self, length: usize) {
        self.queue.truncate(length);
    }

    /// Records the current queue length as the restore point for the given atom.
    pub fn set_mark(&mut self, atom: Atom) {
        self.mark[atom as usize] = self.queue.len();
    }

    /// The recorded restore point for the given atom.
    pub fn mark_of(&self, atom: Atom) -> usize {
        self.mark[atom as usize]
    }

    /// The clause which forced the most recent enqueue of the given atom.
    pub fn forcing_clause(&self, atom: Atom) -> ClauseIndex {
        self.forced_by[atom as usize]
    }
}

#[cfg(test)]
mod propagation_q_tests {
    use super::*;

    #[test]
    fn push_records_the_forcing_clause() {
        let mut q = PropagationQ::new(3);

        q.push(CLiteral::new(1, true), 4);
        q.push(CLiteral::new(2, false), 7);

        assert_eq!(q.len(), 2);
        assert_eq!(q.literal_at(0), CLiteral::new(1, true));
        assert_eq!(q.forcing_clause(1), 4);
        assert_eq!(q.forcing_clause(2), 7);
    }

    #[test]
    fn a_later_push_overwrites_the_forcing_clause() {
        let mut q = PropagationQ::new(2);

        q.push(CLiteral::new(0, true), 1);
        q.push(CLiteral::new(0, true), 2);

        assert_eq!(q.len(), 2);
        assert_eq!(q.forcing_clause(0), 2);
    }

    #[test]
    fn marks_restore_the_queue() {
        let mut q = PropagationQ::new(2);

        q.push(CLiteral::new(0, true), 0);
        q.set_mark(1);
        q.push(CLiteral::new(1, true), 1);

        assert_eq!(q.mark_of(1), 1);
        q.truncate(q.mark_of(1));
        assert_eq!(q.len(), 1);
    }
}
