use rand_xoshiro::{rand_core::SeedableRng, Xoshiro256PlusPlus};

use crate::config::Config;

use super::GenericContext;

/// A context which uses [Xoshiro256PlusPlus] as a source of randomness.
pub type Context = GenericContext<Xoshiro256PlusPlus>;

impl Context {
    /// Creates a context from some given configuration, with the source of randomness seeded from
    /// the configuration.
    pub fn from_config(config: Config) -> Self {
        let rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
        GenericContext::from_config_and_rng(config, rng)
    }
}
