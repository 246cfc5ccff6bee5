//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! marten_sat implements the depth-first backtracking search of the DPLL family, extended with
//! conflict-directed backjumping.
//! Propagation is counter based: each clause carries a count of its literals without a value and a
//! record of the atom which satisfied it, and both are revised incrementally as atoms are valued
//! and unvalued.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built with a [configuration](crate::config), and clauses may be added through the
//! [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or
//! [programatically](crate::context::GenericContext::add_clause).
//!
//! Internally, and at a high-level, a solve is viewed in terms of a handful of databases:
//! - A formula is stored in a [formula store](crate::structures::formula), immutable for the
//!   duration of a solve.
//! - A valuation, together with the per-clause counters which follow it, is stored in an
//!   [assignment database](crate::db::assignment).
//! - Consequences of the valuation are stored on a [propagation queue](crate::db::propagation).
//! - The atoms implicated in failures are stored in a [conflict database](crate::db::conflict),
//!   which steers the return path of the search.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [assign procedure](crate::procedures::assign) to inspect the bookkeeping which makes the
//!   heuristics cheap.
//! - The [structures](crate::structures) to familiarise yourself with the abstract elements of a
//!   solve and their representation (formulas, clauses, etc.)
//!
//! # Example
//!
//! ```rust
//! # use marten_sat::config::Config;
//! # use marten_sat::context::Context;
//! # use marten_sat::reports::Report;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//! p cnf 3 3
//!  1       0
//! -1  2    0
//!     -2 3 0
//! ");
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(0), Some(true));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of
//! targets are defined in order to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) logs
//! related to the propagation queue can be filtered with `RUST_LOG=queue …`.

#![allow(clippy::collapsible_else_if)]
#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
