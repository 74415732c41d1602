//! Rostering problem model.
//!
//! A problem describes one planning horizon (a month): the days to staff,
//! each day's shifts with their required headcounts, and the nurses with
//! their requested absence days. Shifts are owned by their day — headcounts
//! and shift identifiers may differ from day to day, so there is no global
//! day × shift grid.
//!
//! # Reference
//! Burke et al. (2004), "The State of the Art of Nurse Rostering"

use serde::{Deserialize, Serialize};

/// A complete rostering problem for one planning horizon.
///
/// `day_of_month` values are unique across `days` and define the day
/// ordering by ascending numeric value (relevant for the consecutive-day
/// cap). Shift identifiers are unique only within their owning day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterProblem {
    /// Calendar year of the horizon.
    pub year: i32,
    /// Calendar month of the horizon.
    pub month: i32,
    /// Days to staff, each with its own shift list.
    pub days: Vec<Day>,
    /// Nurses available for assignment.
    pub nurses: Vec<Nurse>,
}

/// One day of the horizon and the shifts it needs staffed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Day identifier, unique within the horizon.
    pub day_of_month: i32,
    /// Shifts to staff on this day, in presentation order.
    pub shifts: Vec<ShiftRequirement>,
}

/// Coverage requirement for a single shift on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRequirement {
    /// Shift identifier, unique within its owning day.
    pub shift_identifier: i32,
    /// Exact number of nurses this shift must have. Zero is legal and
    /// forces the shift to stay empty.
    pub number_of_nurses_required: i32,
}

/// A nurse and their requested absence days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nurse {
    /// Nurse identifier, unique and stable across the horizon.
    pub nurse_identifier: i32,
    /// Days (by `day_of_month`) the nurse asked not to work. Entries that
    /// match no day in the horizon are ignored.
    #[serde(default)]
    pub days_off_requested: Vec<i32>,
}

impl RosterProblem {
    /// Creates an empty problem for the given horizon.
    pub fn new(year: i32, month: i32) -> Self {
        Self {
            year,
            month,
            days: Vec::new(),
            nurses: Vec::new(),
        }
    }

    /// Adds a day.
    pub fn with_day(mut self, day: Day) -> Self {
        self.days.push(day);
        self
    }

    /// Adds a nurse.
    pub fn with_nurse(mut self, nurse: Nurse) -> Self {
        self.nurses.push(nurse);
        self
    }

    /// Returns the days sorted by ascending `day_of_month`.
    ///
    /// This is the authoritative day ordering: input order is presentation
    /// only, consecutive-day reasoning and output both use numeric order.
    pub fn days_in_order(&self) -> Vec<&Day> {
        let mut days: Vec<&Day> = self.days.iter().collect();
        days.sort_by_key(|d| d.day_of_month);
        days
    }

    /// Total number of shift entries across all days.
    ///
    /// Upper bound on the number of shifts any single nurse can work.
    pub fn total_shift_slots(&self) -> usize {
        self.days.iter().map(|d| d.shifts.len()).sum()
    }

    /// Sum of required headcounts across all shifts of all days.
    ///
    /// In any accepted roster the number of assignments equals this exactly.
    pub fn total_required(&self) -> i32 {
        self.days
            .iter()
            .flat_map(|d| &d.shifts)
            .map(|s| s.number_of_nurses_required)
            .sum()
    }

    /// Number of nurses.
    pub fn nurse_count(&self) -> usize {
        self.nurses.len()
    }

    /// Number of days in the horizon.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

impl Day {
    /// Creates a day with no shifts.
    pub fn new(day_of_month: i32) -> Self {
        Self {
            day_of_month,
            shifts: Vec::new(),
        }
    }

    /// Adds a shift requirement.
    pub fn with_shift(mut self, shift_identifier: i32, number_of_nurses_required: i32) -> Self {
        self.shifts.push(ShiftRequirement {
            shift_identifier,
            number_of_nurses_required,
        });
        self
    }

    /// Number of shifts on this day.
    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }
}

impl ShiftRequirement {
    /// Creates a shift requirement.
    pub fn new(shift_identifier: i32, number_of_nurses_required: i32) -> Self {
        Self {
            shift_identifier,
            number_of_nurses_required,
        }
    }
}

impl Nurse {
    /// Creates a nurse with no absence requests.
    pub fn new(nurse_identifier: i32) -> Self {
        Self {
            nurse_identifier,
            days_off_requested: Vec::new(),
        }
    }

    /// Adds requested absence days.
    pub fn with_days_off(mut self, days: impl IntoIterator<Item = i32>) -> Self {
        self.days_off_requested.extend(days);
        self
    }

    /// Whether the nurse requested the given day off.
    pub fn is_off(&self, day_of_month: i32) -> bool {
        self.days_off_requested.contains(&day_of_month)
    }
}
