/*!
Configuration of a context.

All configuration for a context is contained within the context, set before clauses are added.
Defaults keep a solve fully deterministic.
*/

pub mod defaults;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The probability of branching on a uniformly random unvalued atom rather than the
    /// most-constrained atom.
    ///
    /// At the default of zero, branching is a pure function of the search state.
    pub random_decision_bias: f64,

    /// The seed for the source of randomness.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            random_decision_bias: defaults::RANDOM_DECISION_BIAS,
            seed: defaults::RNG_SEED,
        }
    }
}
