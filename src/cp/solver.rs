//! Solve configuration and outcome types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::Roster;

/// Status of the engine after a solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolverStatus {
    /// Proven optimal solution found.
    Optimal,
    /// A solution was found but optimality was not proven before the time
    /// budget ran out. No roster is extracted for this status.
    Feasible,
    /// No assignment satisfies the constraints.
    Infeasible,
    /// The time budget ran out before any solution was found.
    Unknown,
}

impl SolverStatus {
    /// Returns the status as a SCREAMING_SNAKE_CASE string.
    ///
    /// ```
    /// use u_roster::cp::SolverStatus;
    ///
    /// assert_eq!(SolverStatus::Optimal.as_str(), "OPTIMAL");
    /// assert_eq!(SolverStatus::Infeasible.as_str(), "INFEASIBLE");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            SolverStatus::Optimal => "OPTIMAL",
            SolverStatus::Feasible => "FEASIBLE",
            SolverStatus::Infeasible => "INFEASIBLE",
            SolverStatus::Unknown => "UNKNOWN",
        }
    }
}

/// Solve configuration.
///
/// The time budget is the only external knob: its expiry downgrades the
/// outcome to `Feasible` or `Unknown`, which is distinct from `Infeasible`.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Stop proving after this duration. `None` solves to completion.
    pub time_limit: Option<Duration>,
}

impl SolverConfig {
    /// Sets the time budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// Outcome of one rostering run.
#[derive(Debug, Clone)]
pub struct RosterSolution {
    /// Engine verdict.
    pub status: SolverStatus,
    /// Sum of squared per-nurse shift counts, when a solution was found.
    pub objective_value: Option<i64>,
    /// The extracted roster. Populated only for `Optimal`.
    pub roster: Option<Roster>,
    /// Wall-clock solve time in milliseconds.
    pub solve_time_ms: i64,
}

impl RosterSolution {
    /// Creates an empty outcome with the given status.
    pub fn empty(status: SolverStatus, solve_time_ms: i64) -> Self {
        Self {
            status,
            objective_value: None,
            roster: None,
            solve_time_ms,
        }
    }

    /// Whether the engine found any solution (optimal or not).
    pub fn is_solution_found(&self) -> bool {
        matches!(self.status, SolverStatus::Optimal | SolverStatus::Feasible)
    }

    /// Whether the outcome carries an extracted roster.
    pub fn is_optimal(&self) -> bool {
        self.status == SolverStatus::Optimal
    }
}
