//! JSON storage boundary.
//!
//! Reads problem data from disk and persists rosters. The wire shapes are
//! exactly the serde representations of the domain models; nothing here
//! knows about the CP formulation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::{Roster, RosterProblem};

/// Reads a rostering problem from a JSON file.
pub fn read_problem_file<P: AsRef<Path>>(path: P) -> Result<RosterProblem> {
    let contents = fs::read_to_string(path.as_ref())
        .with_context(|| format!("failed to read problem file at {}", path.as_ref().display()))?;
    serde_json::from_str(&contents).context("failed to parse problem json")
}

/// Reads a roster back from a JSON file.
pub fn read_roster_file<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let contents = fs::read_to_string(path.as_ref())
        .with_context(|| format!("failed to read roster file at {}", path.as_ref().display()))?;
    serde_json::from_str(&contents).context("failed to parse roster json")
}

/// Writes a roster to a JSON file.
pub fn write_roster_file<P: AsRef<Path>>(roster: &Roster, path: P) -> Result<()> {
    let contents = serde_json::to_string_pretty(roster).context("failed to serialize roster")?;
    fs::write(path.as_ref(), contents)
        .with_context(|| format!("failed to write roster file at {}", path.as_ref().display()))?;
    Ok(())
}

/// File name a roster is persisted under, derived from its horizon.
pub fn roster_file_name(year: i32, month: i32) -> String {
    format!("schedule_{year}_{month}.json")
}
