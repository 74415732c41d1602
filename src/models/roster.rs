//! Roster (solution) model.
//!
//! A roster is the solved counterpart of a problem: for every day and every
//! shift, the list of nurses assigned. Exact coverage guarantees each nurse
//! list has precisely the required headcount.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete roster for one horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Calendar year of the horizon.
    pub year: i32,
    /// Calendar month of the horizon.
    pub month: i32,
    /// Days in ascending `day_of_month` order.
    pub days: Vec<DayRoster>,
}

/// Assignments for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRoster {
    /// Day identifier.
    pub day_of_month: i32,
    /// Shifts in the same order as the problem input.
    pub shifts: Vec<ShiftAssignment>,
}

/// Nurses assigned to one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Shift identifier, unique within its day.
    pub shift_identifier: i32,
    /// Assigned nurses, in nurse input order.
    pub nurses: Vec<i32>,
}

impl Roster {
    /// Creates an empty roster for the given horizon.
    pub fn new(year: i32, month: i32) -> Self {
        Self {
            year,
            month,
            days: Vec::new(),
        }
    }

    /// Finds the entry for a given day.
    pub fn day(&self, day_of_month: i32) -> Option<&DayRoster> {
        self.days.iter().find(|d| d.day_of_month == day_of_month)
    }

    /// Nurses assigned to a specific shift on a specific day.
    pub fn nurses_on(&self, day_of_month: i32, shift_identifier: i32) -> Option<&[i32]> {
        self.day(day_of_month)?
            .shifts
            .iter()
            .find(|s| s.shift_identifier == shift_identifier)
            .map(|s| s.nurses.as_slice())
    }

    /// Number of shifts worked per nurse across the whole horizon.
    ///
    /// Only nurses with at least one assignment appear in the map.
    pub fn shift_counts_by_nurse(&self) -> HashMap<i32, usize> {
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for day in &self.days {
            for shift in &day.shifts {
                for &nurse in &shift.nurses {
                    *counts.entry(nurse).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    /// Days (in roster order) on which a nurse works at least one shift.
    pub fn worked_days(&self, nurse_identifier: i32) -> Vec<i32> {
        self.days
            .iter()
            .filter(|d| {
                d.shifts
                    .iter()
                    .any(|s| s.nurses.contains(&nurse_identifier))
            })
            .map(|d| d.day_of_month)
            .collect()
    }

    /// Total number of (nurse, day, shift) assignments.
    pub fn total_assignments(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| &d.shifts)
            .map(|s| s.nurses.len())
            .sum()
    }
}

impl DayRoster {
    /// Creates a day entry with no shifts.
    pub fn new(day_of_month: i32) -> Self {
        Self {
            day_of_month,
            shifts: Vec::new(),
        }
    }
}

impl ShiftAssignment {
    /// Creates an empty shift entry.
    pub fn new(shift_identifier: i32) -> Self {
        Self {
            shift_identifier,
            nurses: Vec::new(),
        }
    }
}
