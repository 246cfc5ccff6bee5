/*!
The conflict database --- for each atom, the atoms implicated in failures observed at the atom.

# Overview

The database maintains a pair of relations over atoms:

- `conflict[v]`, the atoms whose assignments contributed to a failure observed at *v*.
- `in_conflict[u]`, the inverse --- the atoms which have named *u* in their conflict set.

Together these drive conflict-directed backjumping: when every attempt beneath a branching atom
fails and no failure named the atom, the atom was irrelevant to the failures and the search may
return past the atom without trying its other polarity.

# Invariants

Two invariants define a coherent database:

1. **Symmetry**: `u ∈ conflict[v]` *if and only if* `v ∈ in_conflict[u]`.
2. **Irreflexivity**: `v ∉ conflict[v]`.

Both are upheld by routing every insertion through a single edge primitive which always writes
both sides and refuses self edges --- neither relation is ever mutated without the other.

Clearing is different: [clear](ConflictDB::clear) removes only the sets attached to the given
atom, and [absorb](ConflictDB::absorb) consumes `in_conflict` one-sidedly.
Both mirror the defined clearing points of a solve (a fresh branch, or a fresh propagation), where
knowledge attached to an atom is discarded wholesale and any entries naming the atom elsewhere are
stale rather than wrong.
So, symmetry is an invariant of insertion, not of the database across a full solve.
*/

use std::collections::BTreeSet;

use crate::{
    context::GenericContext,
    db::ClauseIndex,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The conflict database.
#[derive(Clone, Debug, Default)]
pub struct ConflictDB {
    /// For each atom, the atoms whose assignments contributed to a failure observed at the atom.
    conflict: Vec<BTreeSet<Atom>>,

    /// For each atom, the atoms which have named the atom in their conflict set.
    in_conflict: Vec<BTreeSet<Atom>>,
}

impl ConflictDB {
    /// A fresh database over the given count of atoms, with every set empty.
    pub fn new(atom_count: usize) -> Self {
        ConflictDB {
            conflict: vec![BTreeSet::new(); atom_count],
            in_conflict: vec![BTreeSet::new(); atom_count],
        }
    }

    /// Records that the assignment of `source` contributed to a failure observed at `observer`.
    ///
    /// Writes both sides of the relation, and skips self edges.
    fn note_edge(&mut self, source: Atom, observer: Atom) {
        if source != observer {
            self.conflict[observer as usize].insert(source);
            self.in_conflict[source as usize].insert(observer);
        }
    }

    /// Attributes a failure observed at `observer` to the given clause: every other atom of the
    /// clause is recorded as a contributor.
    pub fn attribute_clause(&mut self, observer: Atom, clause: &[CLiteral]) {
        for literal in clause {
            self.note_edge(literal.atom(), observer);
        }
    }

    /// Lifts the conflict knowledge recorded at atoms which named `atom`.
    ///
    /// For each *u* with `atom ∈ conflict[u]`, the contributors to *u*'s conflicts (other than
    /// `atom` itself) become contributors to `atom`'s.
    /// The consumed `in_conflict[atom]` is cleared.
    pub fn absorb(&mut self, atom: Atom) {
        let sources = std::mem::take(&mut self.in_conflict[atom as usize]);
        for source in sources {
            let lifted: Vec<Atom> = self.conflict[source as usize]
                .iter()
                .copied()
                .filter(|ancestor| *ancestor != atom)
                .collect();
            for ancestor in lifted {
                self.note_edge(ancestor, atom);
            }
        }
    }

    /// Whether some failure has named the given atom.
    pub fn implicated(&self, atom: Atom) -> bool {
        !self.in_conflict[atom as usize].is_empty()
    }

    /// The conflict set of the given atom.
    pub fn conflict_set(&self, atom: Atom) -> &BTreeSet<Atom> {
        &self.conflict[atom as usize]
    }

    /// Clears both sets attached to the given atom.
    pub fn clear(&mut self, atom: Atom) {
        self.conflict[atom as usize].clear();
        self.in_conflict[atom as usize].clear();
    }

    /// Whether symmetry and irreflexivity hold across the database.
    ///
    /// Exact only while every mutation has been an insertion: [clear](ConflictDB::clear) and
    /// [absorb](ConflictDB::absorb) leave stale one-sided entries.
    /// A diagnostic, for use by tests and debugging --- a solve never calls this.
    pub fn coherent(&self) -> bool {
        for (observer, sources) in self.conflict.iter().enumerate() {
            for source in sources {
                if *source as usize == observer {
                    return false;
                }
                if !self.in_conflict[*source as usize].contains(&(observer as Atom)) {
                    return false;
                }
            }
        }
        for (source, observers) in self.in_conflict.iter().enumerate() {
            for observer in observers {
                if !self.conflict[*observer as usize].contains(&(source as Atom)) {
                    return false;
                }
            }
        }
        true
    }
}

impl<R: rand::Rng> GenericContext<R> {
    /// Attributes a failure observed at `observer` to the given clause becoming empty, then
    /// absorbs the conflict knowledge of any atom which had named `observer`.
    pub(crate) fn note_clause_conflict(&mut self, observer: Atom, clause: ClauseIndex) {
        self.conflict_db
            .attribute_clause(observer, self.formula.clause(clause));
        self.conflict_db.absorb(observer);
    }
}
