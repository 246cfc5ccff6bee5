//! The formula store --- clauses, and for each atom the clauses the atom appears in.
//!
//! The store is assembled once from the full collection of clauses and is immutable afterwards.
//! Clauses are stored ragged, sized from the input.
//!
//! Cross references are by index in both directions: a clause is a list of literals, and an
//! [appearance list](Formula::appearances) is a list of (clause index, polarity) pairs.
//! No pointer cycles, and no semantic validation: a clause with duplicate or complementary
//! literals is stored verbatim, with one appearance entry for each occurrence.

use crate::{
    db::ClauseIndex,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
};

/// An occurrence of an atom in a clause, with the polarity of the occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occurrence {
    /// The clause the atom occurs in.
    pub clause: ClauseIndex,

    /// The polarity of the occurrence.
    pub polarity: bool,
}

/// The formula store.
#[derive(Clone, Debug, Default)]
pub struct Formula {
    /// A count of the atoms of the formula, as promised by the problem header (or grown to cover
    /// the literals read).
    atom_count: usize,

    /// The clauses of the formula, in the order read.
    clauses: Vec<CClause>,

    /// For each atom, every occurrence of the atom across the formula.
    appearances: Vec<Vec<Occurrence>>,
}

impl Formula {
    /// Assembles a store from the full collection of clauses.
    ///
    /// Appearance lists are built with a count pass followed by a fill pass, so each list is
    /// allocated to exact length.
    pub fn from_clauses(atom_count: usize, clauses: Vec<CClause>) -> Self {
        let mut counts = vec![0_usize; atom_count];
        for clause in &clauses {
            for literal in clause {
                counts[literal.atom() as usize] += 1;
            }
        }

        let mut appearances: Vec<Vec<Occurrence>> =
            counts.iter().map(|count| Vec::with_capacity(*count)).collect();

        for (index, clause) in clauses.iter().enumerate() {
            for literal in clause {
                appearances[literal.atom() as usize].push(Occurrence {
                    clause: index,
                    polarity: literal.polarity(),
                });
            }
        }

        Formula {
            atom_count,
            clauses,
            appearances,
        }
    }

    /// A count of the atoms of the formula.
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// A count of the clauses of the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The literals of the given clause.
    pub fn clause(&self, index: ClauseIndex) -> &[CLiteral] {
        &self.clauses[index]
    }

    /// An iterator over the clauses of the formula, in the order read.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// Every occurrence of the given atom across the formula.
    pub fn appearances(&self, atom: Atom) -> &[Occurrence] {
        &self.appearances[atom as usize]
    }
}

#[cfg(test)]
mod formula_tests {
    use crate::structures::literal::CLiteral;

    use super::*;

    fn two_clauses() -> Formula {
        let clauses = vec![
            vec![CLiteral::new(0, true), CLiteral::new(1, false)],
            vec![CLiteral::new(1, true), CLiteral::new(2, true)],
        ];
        Formula::from_clauses(3, clauses)
    }

    #[test]
    fn counts() {
        let formula = two_clauses();
        assert_eq!(formula.atom_count(), 3);
        assert_eq!(formula.clause_count(), 2);
    }

    #[test]
    fn appearance_lists() {
        let formula = two_clauses();

        assert_eq!(
            formula.appearances(1),
            &[
                Occurrence { clause: 0, polarity: false },
                Occurrence { clause: 1, polarity: true },
            ]
        );
        assert_eq!(formula.appearances(2).len(), 1);
    }

    #[test]
    fn duplicate_literals_duplicate_appearances() {
        let clause = vec![CLiteral::new(0, true), CLiteral::new(0, true)];
        let formula = Formula::from_clauses(1, vec![clause]);
        assert_eq!(formula.appearances(0).len(), 2);
    }
}
