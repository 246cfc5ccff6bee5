/*!
The assignment database --- the valuation, and the counters which follow it.

# Overview

The database holds the mutable search state attached to a valuation:

- `valuation`, a (partial) function from atoms to truth values.
- `rem`, for each clause, a count of the literals of the clause whose atom has no value.
- `satisfier`, for each clause, the *first* atom whose assignment satisfied the clause, if any.
- `unsatisfied`, a count of the clauses without a satisfier.
- `positive_tally` and `negative_tally`, for each atom, counts of occurrences of the atom with the
  respective polarity in clauses without a satisfier.

The tallies drive the branching heuristics: the most-constrained choice maximises the tally sum,
and the preferred polarity is the majority tally.

# Invariants

For every atom *without* a value the tallies are exact: `positive_tally[a]` is the number of
clauses which both lack a satisfier and contain the literal *a*, and likewise for
`negative_tally[a]`.

For an atom *with* a value the tallies may drift while the value stands, as valuing an atom
retires the occurrences falsified by the value from its own tallies.
Every drift is reversed when the value is cleared, as each mutation of the database is paired with
an exact inverse.
The drift is harmless: the heuristics only consult atoms without a value.

The tallies are signed for this reason, and for this reason alone.
*/

use crate::structures::{
    atom::Atom,
    clause::Clause,
    formula::Formula,
    literal::{CLiteral, Literal},
};

/// The assignment database.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssignmentDB {
    /// The current (partial) valuation.
    valuation: Vec<Option<bool>>,

    /// For each clause, a count of the literals of the clause whose atom has no value.
    pub(crate) rem: Vec<u32>,

    /// For each clause, the first atom whose assignment satisfied the clause, if any.
    pub(crate) satisfier: Vec<Option<Atom>>,

    /// A count of the clauses without a satisfier.
    pub(crate) unsatisfied: usize,

    /// For each atom, a count of positive occurrences in clauses without a satisfier.
    positive_tally: Vec<i32>,

    /// For each atom, a count of negative occurrences in clauses without a satisfier.
    negative_tally: Vec<i32>,
}

impl AssignmentDB {
    /// A fresh database for the given formula: no valued atoms, every clause unsatisfied.
    pub fn new(formula: &Formula) -> Self {
        let atom_count = formula.atom_count();
        let clause_count = formula.clause_count();

        let mut positive_tally = vec![0; atom_count];
        let mut negative_tally = vec![0; atom_count];
        for atom in 0..atom_count {
            for occurrence in formula.appearances(atom as Atom) {
                match occurrence.polarity {
                    true => positive_tally[atom] += 1,
                    false => negative_tally[atom] += 1,
                }
            }
        }

        AssignmentDB {
            valuation: vec![None; atom_count],
            rem: formula.clauses().map(|clause| clause.len() as u32).collect(),
            satisfier: vec![None; clause_count],
            unsatisfied: clause_count,
            positive_tally,
            negative_tally,
        }
    }

    /// A count of the atoms of the database.
    pub fn atom_count(&self) -> usize {
        self.valuation.len()
    }

    /// The value of the given atom, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The current valuation, as a slice of optional booleans indexed by atom.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// An iterator over the atoms without a value, in atom order.
    pub fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.valuation
            .iter()
            .enumerate()
            .filter_map(|(atom, value)| value.is_none().then_some(atom as Atom))
    }

    /// Whether every clause has a satisfier.
    pub fn all_satisfied(&self) -> bool {
        self.unsatisfied == 0
    }

    /// A count of the clauses without a satisfier.
    pub fn unsatisfied_count(&self) -> usize {
        self.unsatisfied
    }

    /// The positive tally of the given atom.
    pub fn positive_tally(&self, atom: Atom) -> i32 {
        self.positive_tally[atom as usize]
    }

    /// The negative tally of the given atom.
    pub fn negative_tally(&self, atom: Atom) -> i32 {
        self.negative_tally[atom as usize]
    }

    /// The sum of the tallies of the given atom.
    pub fn tally_sum(&self, atom: Atom) -> i32 {
        self.positive_tally[atom as usize] + self.negative_tally[atom as usize]
    }

    pub(crate) fn set_value(&mut self, atom: Atom, value: bool) {
        self.valuation[atom as usize] = Some(value);
    }

    pub(crate) fn clear_value(&mut self, atom: Atom) {
        self.valuation[atom as usize] = None;
    }

    /// Removes every literal of the clause from the tallies.
    ///
    /// Called when the clause gains a satisfier.
    pub(crate) fn unmark_clause(&mut self, clause: &[CLiteral]) {
        for literal in clause {
            match literal.polarity() {
                true => self.positive_tally[literal.atom() as usize] -= 1,
                false => self.negative_tally[literal.atom() as usize] -= 1,
            }
        }
    }

    /// Returns every literal of the clause to the tallies.
    ///
    /// Called when the clause loses its satisfier.
    pub(crate) fn mark_clause(&mut self, clause: &[CLiteral]) {
        for literal in clause {
            match literal.polarity() {
                true => self.positive_tally[literal.atom() as usize] += 1,
                false => self.negative_tally[literal.atom() as usize] += 1,
            }
        }
    }

    /// Removes a single occurrence with the given polarity from the tallies of the given atom.
    ///
    /// Called when valuing the atom falsifies the occurrence.
    pub(crate) fn retire_tally(&mut self, atom: Atom, polarity: bool) {
        match polarity {
            true => self.positive_tally[atom as usize] -= 1,
            false => self.negative_tally[atom as usize] -= 1,
        }
    }

    /// Returns a single occurrence with the given polarity to the tallies of the given atom.
    ///
    /// The inverse of [retire_tally](AssignmentDB::retire_tally).
    pub(crate) fn restore_tally(&mut self, atom: Atom, polarity: bool) {
        match polarity {
            true => self.positive_tally[atom as usize] += 1,
            false => self.negative_tally[atom as usize] += 1,
        }
    }

    /// Whether the database agrees with a from-scratch reading of the formula on the current
    /// valuation.
    ///
    /// Checks the remaining-literal counters, the satisfier records, the unsatisfied count, and
    /// the tallies of every atom without a value.
    /// A diagnostic, for use by tests and debugging --- a solve never calls this.
    pub fn consistent_with(&self, formula: &Formula) -> bool {
        let mut unsatisfied = 0;

        for (index, clause) in formula.clauses().enumerate() {
            let unvalued = clause
                .literals()
                .filter(|literal| self.value_of(literal.atom()).is_none())
                .count();
            if self.rem[index] as usize != unvalued {
                return false;
            }

            let satisfied = clause.satisfied_on(&self.valuation);
            if satisfied != self.satisfier[index].is_some() {
                return false;
            }

            match self.satisfier[index] {
                None => unsatisfied += 1,
                Some(atom) => {
                    let witnessed = clause.literals().any(|literal| {
                        literal.atom() == atom && self.value_of(atom) == Some(literal.polarity())
                    });
                    if !witnessed {
                        return false;
                    }
                }
            }
        }

        if unsatisfied != self.unsatisfied {
            return false;
        }

        for atom in self.unvalued_atoms() {
            let mut positive = 0;
            let mut negative = 0;
            for occurrence in formula.appearances(atom) {
                if self.satisfier[occurrence.clause].is_none() {
                    match occurrence.polarity {
                        true => positive += 1,
                        false => negative += 1,
                    }
                }
            }
            if self.positive_tally(atom) != positive || self.negative_tally(atom) != negative {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod assignment_db_tests {
    use super::*;

    fn formula() -> Formula {
        // 1 -2 0 / 2 3 0
        Formula::from_clauses(
            3,
            vec![
                vec![CLiteral::new(0, true), CLiteral::new(1, false)],
                vec![CLiteral::new(1, true), CLiteral::new(2, true)],
            ],
        )
    }

    #[test]
    fn fresh_state() {
        let formula = formula();
        let db = AssignmentDB::new(&formula);

        assert_eq!(db.unsatisfied_count(), 2);
        assert_eq!(db.rem, vec![2, 2]);
        assert_eq!(db.tally_sum(1), 2);
        assert_eq!(db.negative_tally(1), 1);
        assert!(db.consistent_with(&formula));
    }

    #[test]
    fn clause_marks() {
        let formula = formula();
        let mut db = AssignmentDB::new(&formula);

        db.unmark_clause(formula.clause(0));
        assert_eq!(db.positive_tally(0), 0);
        assert_eq!(db.negative_tally(1), 0);

        db.mark_clause(formula.clause(0));
        assert_eq!(db.positive_tally(0), 1);
        assert_eq!(db.negative_tally(1), 1);
    }
}
