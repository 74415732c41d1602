//! CP-based rostering formulation.
//!
//! Bridges the rostering domain models to the `pumpkin-solver` constraint
//! engine. Builds the assignment model (decision variables, hard
//! constraints, workload-balance objective) from a `RosterProblem`, runs
//! the engine, and decodes the answer into a `Roster`.
//!
//! # Key Components
//!
//! - **Variables**: [`DecisionVars`], [`SlotKey`] — the 0/1 decision pool
//! - **Builder**: [`RosterCpBuilder`] — encoding, solve call, decoding
//! - **Outcome**: [`RosterSolution`], [`SolverStatus`], [`SolverConfig`]
//!
//! # Design
//!
//! This module only formulates; it contains no search. The engine supplies
//! propagation and branch-and-bound, and the formulation speaks to it
//! through linear sums, max-equality, and multiplication-equality over
//! bounded integer variables, so any engine with those primitives could be
//! substituted behind the builder.
//!
//! # Reference
//! Rossi, van Beek & Walsh (2006), "Handbook of Constraint Programming"

mod builder;
mod solver;
mod variables;

pub use builder::RosterCpBuilder;
pub use solver::{RosterSolution, SolverConfig, SolverStatus};
pub use variables::{DecisionVars, SlotKey};
