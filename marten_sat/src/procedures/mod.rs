//! The algorithm for determining satisfiability, factored into a collection of procedures.
//!
//! - [assign](crate::procedures::assign) --- valuing and unvaluing an atom, with all the clause
//!   bookkeeping which follows.
//! - [propagation](crate::procedures::propagation) --- draining and unwinding the queue of unit
//!   consequences.
//! - [decision](crate::procedures::decision) --- choosing a branching atom and the polarity to
//!   try first.
//! - [solve](crate::procedures::solve) --- the depth-first search itself, with conflict-directed
//!   backjumping.
//!
//! Each procedure is a method on a [context](crate::context::GenericContext), and a contradiction
//! is signalled by a boolean rather than an error: every failure is expected, and every success
//! path is matched by a precisely-scoped undo on the failure path.

pub mod assign;
pub mod decision;
pub mod propagation;
pub mod solve;
