//! The context --- to which formulas are added and within which solves take place.
//!
//! Strictly, a [GenericContext] and a [Context].
//!
//! The generic context is designed to be generic over various parameters.
//! Though, for the moment this is limited to the source of randomness.
//!
//! # Example
//! ```rust
//! # use marten_sat::config::Config;
//! # use marten_sat::context::Context;
//! # use marten_sat::reports::Report;
//! # use marten_sat::structures::literal::CLiteral;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p = CLiteral::new(0, true);
//! let q = CLiteral::new(1, true);
//!
//! assert!(the_context.add_clause(vec![p, q]).is_ok());
//! assert!(the_context.add_clause(vec![-p]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(1), Some(true));
//! ```

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context is accepting clauses.
    Input,

    /// A solve is in progress.
    Solving,

    /// The formula is known to be satisfiable, with a witnessing valuation.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
