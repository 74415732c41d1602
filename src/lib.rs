//! Nurse rostering via constraint programming.
//!
//! Translates a month of coverage requirements and absence requests into a
//! constraint model — 0/1 assignment variables, hard coverage and
//! eligibility constraints, a squared-workload fairness objective — and
//! delegates solving to the `pumpkin-solver` engine. An optimal answer is
//! decoded into a concrete per-day, per-shift roster.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `RosterProblem`, `Day`,
//!   `ShiftRequirement`, `Nurse`, `Roster`
//! - **`validation`**: Input integrity checks (duplicate IDs, negative
//!   headcounts)
//! - **`cp`**: The constraint formulation, solve call, and decoding
//! - **`io`**: JSON storage boundary
//! - **`demo_data`**: A worked example problem
//!
//! # Architecture
//!
//! Model construction is synchronous and owns no global state: every run
//! builds its own engine instance, so independent horizons can be solved
//! concurrently. Search itself is delegated entirely to the engine.
//!
//! # References
//!
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Rossi, van Beek & Walsh (2006), "Handbook of Constraint Programming"

pub mod cp;
pub mod demo_data;
pub mod io;
pub mod models;
pub mod validation;
