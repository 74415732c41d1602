//! Rostering domain models.
//!
//! Provides the core data types for describing a rostering problem and its
//! solution. The problem side captures the horizon (year/month), its days
//! with per-day shift requirements, and the nurses with absence requests;
//! the solution side is the concrete roster.
//!
//! # Domain Mappings
//!
//! | u-roster | Healthcare | Retail | Operations |
//! |----------|-----------|--------|------------|
//! | Nurse | Nurse | Clerk | Operator |
//! | Day | Calendar Day | Trading Day | Duty Day |
//! | Shift | Ward Shift | Store Shift | Watch |
//! | Roster | Ward Roster | Staff Plan | Watch Bill |

mod problem;
mod roster;

pub use problem::{Day, Nurse, RosterProblem, ShiftRequirement};
pub use roster::{DayRoster, Roster, ShiftAssignment};
