use crate::{
    config::Config,
    db::{assignment::AssignmentDB, conflict::ConflictDB, propagation::PropagationQ},
    reports::Report,
    structures::{atom::Atom, clause::CClause, formula::Formula},
};

use super::{ContextState, Counters};

/// A generic context, parameterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng), consulted only when
/// [random_decision_bias](crate::config::Config::random_decision_bias) is positive.
///
/// # Example
///
/// ```rust
/// # use marten_sat::config::Config;
/// # use marten_sat::context::GenericContext;
/// # use rand_xoshiro::Xoshiro256PlusPlus;
/// # use rand_xoshiro::rand_core::SeedableRng;
/// let context = GenericContext::from_config_and_rng(
///     Config::default(),
///     Xoshiro256PlusPlus::seed_from_u64(0),
/// );
/// ```
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The formula store.
    /// Immutable once assembled --- see [structures::formula](crate::structures::formula).
    pub formula: Formula,

    /// The assignment database.
    /// See [db::assignment](crate::db::assignment) for details.
    pub assignment_db: AssignmentDB,

    /// The conflict database.
    /// See [db::conflict](crate::db::conflict) for details.
    pub conflict_db: ConflictDB,

    /// The propagation queue.
    /// See [db::propagation](crate::db::propagation) for details.
    pub propagation_q: PropagationQ,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// Clauses received and not yet assembled into the formula store.
    pub(crate) clause_buffer: Vec<CClause>,

    /// A count of atoms promised so far, by header or by literal.
    pub(crate) atom_bound: usize,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Creates a context from some given configuration and source of randomness.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),

            formula: Formula::default(),
            assignment_db: AssignmentDB::default(),
            conflict_db: ConflictDB::default(),
            propagation_q: PropagationQ::default(),

            state: ContextState::Input,
            rng,

            clause_buffer: Vec::default(),
            atom_bound: 0,
        }
    }

    /// A high-level report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// A count of the atoms of the context.
    pub fn atom_count(&self) -> usize {
        self.atom_bound
    }

    /// The value of the given atom on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.assignment_db.value_of(atom)
    }

    /// The current valuation, as a slice of optional booleans indexed by atom.
    pub fn valuation(&self) -> &[Option<bool>] {
        self.assignment_db.valuation()
    }

    /// A full assignment witnessing satisfiability, if the context is satisfiable.
    ///
    /// The search stops as soon as every clause is satisfied, so the witnessing valuation may be
    /// partial --- atoms without a value are reported as false, any value being fine.
    pub fn model(&self) -> Option<Vec<bool>> {
        match self.state {
            ContextState::Satisfiable => Some(
                self.assignment_db
                    .valuation()
                    .iter()
                    .map(|value| value.unwrap_or(false))
                    .collect(),
            ),
            _ => None,
        }
    }
}
