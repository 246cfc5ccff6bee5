//! Helpers for exercising marten_sat: formula generators, a reference evaluator, and shorthand
//! for solving DIMACS strings.
//!
//! The evaluator is deliberately independent of the solver's structures --- a clause is a vector
//! of signed integers and a model is a vector of booleans --- so a reported model is checked
//! against a plain reading of the input rather than against the solver's own bookkeeping.

use rand_xoshiro::{rand_core::SeedableRng, Xoshiro256PlusPlus};

use marten_sat::{config::Config, context::Context, reports::Report};

/// A context over the clauses of the given DIMACS string.
pub fn context_from_dimacs(dimacs: &str) -> Context {
    let mut the_context = Context::from_config(Config::default());
    match the_context.read_dimacs(dimacs.as_bytes()) {
        Ok(_) => the_context,
        Err(e) => panic!("Failed to read formula: {e:?}"),
    }
}

/// A solved context over the clauses of the given DIMACS string.
pub fn solved_context(dimacs: &str) -> Context {
    let mut the_context = context_from_dimacs(dimacs);
    match the_context.solve() {
        Ok(_) => the_context,
        Err(e) => panic!("Solve failure: {e:?}"),
    }
}

/// The report from solving the given DIMACS string.
pub fn report_of(dimacs: &str) -> Report {
    solved_context(dimacs).report()
}

/// The clauses of a DIMACS string, as plain vectors of signed integers.
///
/// A minimal reading for the reference evaluator: skips to the problem line, then collects
/// integers into clauses at each `0`.
pub fn clauses_of(dimacs: &str) -> Vec<Vec<i32>> {
    let mut clauses = vec![];
    let mut clause = vec![];

    let mut lines = dimacs.lines();
    for line in lines.by_ref() {
        if line.starts_with('p') {
            break;
        }
    }

    for line in lines {
        if line.starts_with('c') {
            continue;
        }
        if line.starts_with('%') {
            break;
        }
        for item in line.split_whitespace() {
            let literal = item.parse::<i32>().expect("unreadable literal");
            match literal {
                0 => clauses.push(std::mem::take(&mut clause)),
                _ => clause.push(literal),
            }
        }
    }

    clauses
}

/// Whether every clause has a literal which is true under the model.
///
/// The model is indexed by atom: literal `l` is true when `model[|l| - 1]` matches the sign.
pub fn evaluate(clauses: &[Vec<i32>], model: &[bool]) -> bool {
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|literal| model[literal.unsigned_abs() as usize - 1] == (*literal > 0))
    })
}

/// A satisfiable chain: the first atom is forced, and each clause passes the force along.
///
/// Solvable by a single decision (or none) and unit propagation alone.
pub fn chain(length: usize) -> String {
    assert!(0 < length);

    let mut dimacs = format!("p cnf {length} {length}\n1 0\n");
    for atom in 1..length {
        dimacs.push_str(format!("-{} {} 0\n", atom, atom + 1).as_str());
    }
    dimacs
}

/// The pigeonhole principle for `holes + 1` pigeons and `holes` holes, as an unsatisfiable CNF.
///
/// Atom `p * holes + h + 1` places pigeon `p` in hole `h`.
/// Each pigeon must sit in some hole, and no two pigeons may share one.
pub fn pigeonhole(holes: usize) -> String {
    assert!(0 < holes);
    let pigeons = holes + 1;

    let atom = |pigeon: usize, hole: usize| pigeon * holes + hole + 1;

    let mut clauses = vec![];

    for pigeon in 0..pigeons {
        let somewhere: Vec<String> = (0..holes)
            .map(|hole| atom(pigeon, hole).to_string())
            .collect();
        clauses.push(format!("{} 0", somewhere.join(" ")));
    }

    for hole in 0..holes {
        for first in 0..pigeons {
            for second in (first + 1)..pigeons {
                clauses.push(format!("-{} -{} 0", atom(first, hole), atom(second, hole)));
            }
        }
    }

    format!(
        "p cnf {} {}\n{}\n",
        pigeons * holes,
        clauses.len(),
        clauses.join("\n")
    )
}

/// A uniform random 3-SAT instance: each clause draws three distinct atoms and random polarities.
pub fn uniform_random_3sat(atom_count: usize, clause_count: usize, seed: u64) -> String {
    use rand::{seq::index::sample, Rng};
    assert!(3 <= atom_count);

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut dimacs = format!("p cnf {atom_count} {clause_count}\n");

    for _ in 0..clause_count {
        for atom in sample(&mut rng, atom_count, 3) {
            let polarity = if rng.random_bool(0.5) { "" } else { "-" };
            dimacs.push_str(format!("{}{} ", polarity, atom + 1).as_str());
        }
        dimacs.push_str("0\n");
    }

    dimacs
}

#[cfg(test)]
mod helper_tests {
    use super::*;

    #[test]
    fn evaluation() {
        let clauses = vec![vec![1, -2], vec![2, 3]];

        assert!(evaluate(&clauses, &[true, false, true]));
        assert!(!evaluate(&clauses, &[false, true, false]));
    }

    #[test]
    fn chain_shape() {
        let clauses = clauses_of(&chain(3));
        assert_eq!(clauses, vec![vec![1], vec![-1, 2], vec![-2, 3]]);
    }

    #[test]
    fn pigeonhole_shape() {
        // Two pigeons, one hole: both forced in, and excluded from sharing.
        let clauses = clauses_of(&pigeonhole(1));
        assert_eq!(clauses, vec![vec![1], vec![2], vec![-1, -2]]);
    }

    #[test]
    fn random_instances_are_reproducible() {
        assert_eq!(
            uniform_random_3sat(20, 60, 7),
            uniform_random_3sat(20, 60, 7)
        );
        assert_ne!(
            uniform_random_3sat(20, 60, 7),
            uniform_random_3sat(20, 60, 8)
        );
    }
}
