/*!
Methods for building the formula of a context.

Clauses are received one at a time, either [programatically](GenericContext::add_clause) or from
the [DIMACS](GenericContext::read_dimacs) representation of a formula, and buffered.
The first call to [solve](crate::procedures::solve) assembles the buffer into the immutable
[formula store](crate::structures::formula) and sizes every search database from the result.

No semantic validation is performed: clauses with duplicate or complementary literals --- and
empty clauses --- are accepted verbatim.

# DIMACS

The reader consumes:
- Any number of preamble lines which do not start with `p`.
- One problem line, `p cnf <atoms> <clauses>`.
- The promised number of clauses, each a whitespace-separated sequence of nonzero signed decimal
  integers terminated by `0`, with terminators free to span lines.

Lines starting with `c` are skipped throughout, and a line starting with `%` ends the formula
early (a convention of the SATLIB benchmark library).
Content after the promised number of clauses is ignored.
*/

use std::io::BufRead;

use crate::{
    context::{ContextState, GenericContext},
    db::{assignment::AssignmentDB, conflict::ConflictDB, propagation::PropagationQ},
    misc::log::targets,
    structures::{
        atom::ATOM_MAX,
        clause::CClause,
        formula::Formula,
        literal::{IntLiteral, Literal},
    },
    types::err::{self, BuildError, ParseError},
};

/// Details of a parsed DIMACS input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms promised by the problem line.
    pub expected_atoms: Option<usize>,

    /// The count of clauses promised by the problem line.
    pub expected_clauses: Option<usize>,

    /// The count of atoms known to the context after the read.
    pub added_atoms: usize,

    /// The count of clauses added by the read.
    pub added_clauses: usize,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Ensures the context covers the given count of atoms.
    pub fn ensure_atoms(&mut self, count: usize) -> Result<(), err::ErrorKind> {
        // A count of ATOM_MAX + 1 atoms still ends at the atom ATOM_MAX.
        if count > ATOM_MAX as usize + 1 {
            return Err(err::ErrorKind::from(BuildError::AtomsExhausted));
        }
        if count > self.atom_bound {
            self.atom_bound = count;
        }
        Ok(())
    }

    /// Adds a clause to the context, verbatim.
    ///
    /// The atoms of the clause are ensured as a side effect.
    pub fn add_clause(&mut self, clause: CClause) -> Result<(), err::ErrorKind> {
        match self.state {
            ContextState::Input => {}
            _ => return Err(err::ErrorKind::InvalidState),
        }

        for literal in &clause {
            self.ensure_atoms(literal.atom() as usize + 1)?;
        }

        self.clause_buffer.push(clause);
        Ok(())
    }

    /// Reads a DIMACS file into the context.
    ///
    /// ```rust
    /// # use marten_sat::config::Config;
    /// # use marten_sat::context::Context;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// p cnf 4 3
    ///  1  2       0
    /// -1  2  3    0
    ///        3 -4 0
    /// ");
    ///
    /// assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut buffer = String::default();
        let mut info = ParserInfo::default();

        let mut lines = 0;

        // First phase, skip the preamble and read the problem line.
        let expected_clauses = 'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(err::ErrorKind::from(ParseError::MissingHeader)),
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }

            if !buffer.starts_with('p') {
                continue 'preamble_loop;
            }

            let mut problem_details = buffer.split_whitespace();
            if problem_details.next() != Some("p") || problem_details.next() != Some("cnf") {
                return Err(err::ErrorKind::from(ParseError::ProblemSpecification));
            }

            let atoms: usize = match problem_details.next().map(str::parse) {
                Some(Ok(count)) => count,
                _ => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
            };

            let clauses: usize = match problem_details.next().map(str::parse) {
                Some(Ok(count)) => count,
                _ => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
            };

            self.ensure_atoms(atoms)?;

            log::info!(target: targets::PARSE, "Problem of {atoms} atoms and {clauses} clauses");
            info.expected_atoms = Some(atoms);
            info.expected_clauses = Some(clauses);

            break 'preamble_loop clauses;
        };

        // Second phase, read the promised clauses.
        let mut clause_buffer: CClause = Vec::default();

        'formula_loop: while info.added_clauses < expected_clauses {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }

            match buffer.chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => continue 'formula_loop,
                _ => {}
            }

            for item in buffer.split_whitespace() {
                match item {
                    "0" => {
                        let clause = std::mem::take(&mut clause_buffer);
                        self.add_clause(clause)?;
                        info.added_clauses += 1;
                        if info.added_clauses == expected_clauses {
                            break 'formula_loop;
                        }
                    }
                    _ => match item.parse::<IntLiteral>() {
                        Ok(int) if int != 0 => clause_buffer.push(int.canonical()),
                        _ => return Err(err::ErrorKind::from(ParseError::Literal(lines))),
                    },
                }
            }
        }

        if info.added_clauses < expected_clauses || !clause_buffer.is_empty() {
            return Err(err::ErrorKind::from(ParseError::PrematureEnd));
        }

        info.added_atoms = self.atom_bound;

        Ok(info)
    }

    /// Assembles buffered clauses into the formula store and sizes every search database from the
    /// result.
    ///
    /// Called once, by the first call to solve --- the store is immutable afterwards.
    pub(crate) fn assemble(&mut self) {
        let clauses = std::mem::take(&mut self.clause_buffer);
        self.formula = Formula::from_clauses(self.atom_bound, clauses);

        self.assignment_db = AssignmentDB::new(&self.formula);
        self.conflict_db = ConflictDB::new(self.formula.atom_count());
        self.propagation_q = PropagationQ::new(self.formula.atom_count());

        log::info!(
            target: targets::PARSE,
            "Assembled {} clauses over {} atoms",
            self.formula.clause_count(),
            self.formula.atom_count()
        );
    }
}
