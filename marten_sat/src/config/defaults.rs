//! Default values for configuration options.

/// The default probability of a random branching decision.
pub const RANDOM_DECISION_BIAS: f64 = 0.0;

/// The default seed for the source of randomness.
pub const RNG_SEED: u64 = 0;
