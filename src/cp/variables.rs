//! Decision variables for the rostering formulation.
//!
//! Two variable families, both 0/1 bounded integers in the engine so they
//! can be summed, compared, and fed to the max-equality propagator:
//!
//! - one assignment variable per (nurse, day, shift) triple present in the
//!   input — "this nurse works this shift on this day",
//! - one works-day variable per (nurse, day) — "this nurse works any shift
//!   on this day".
//!
//! Keys are composite domain identifiers, never positional indices: days own
//! heterogeneous shift sets and identifiers need not be contiguous.

use std::collections::HashMap;

use pumpkin_solver::variables::DomainId;
use pumpkin_solver::Solver;

use crate::models::{Day, Nurse, RosterProblem};

/// Composite key for one (nurse, day, shift) decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    /// Nurse identifier.
    pub nurse: i32,
    /// Day identifier (`day_of_month`).
    pub day: i32,
    /// Shift identifier within the day.
    pub shift: i32,
}

impl SlotKey {
    /// Creates a key from domain identifiers.
    pub fn new(nurse: i32, day: i32, shift: i32) -> Self {
        Self { nurse, day, shift }
    }
}

/// The decision-variable pool for one rostering run.
///
/// Allocation is total and injective: every valid (nurse, day, shift) triple
/// in the input gets exactly one assignment variable, every (nurse, day)
/// pair exactly one works-day variable, and nothing else is created. The
/// pool is owned by a single run; independent horizons allocate independent
/// pools against independent engine instances.
#[derive(Debug)]
pub struct DecisionVars {
    assignments: HashMap<SlotKey, DomainId>,
    work_days: HashMap<(i32, i32), DomainId>,
}

impl DecisionVars {
    /// Allocates all decision variables for the problem in the given engine.
    pub fn allocate(solver: &mut Solver, problem: &RosterProblem) -> Self {
        let mut assignments = HashMap::new();
        let mut work_days = HashMap::new();

        for nurse in &problem.nurses {
            for day in &problem.days {
                for shift in &day.shifts {
                    let key = SlotKey::new(
                        nurse.nurse_identifier,
                        day.day_of_month,
                        shift.shift_identifier,
                    );
                    assignments.insert(key, solver.new_bounded_integer(0, 1));
                }
                work_days.insert(
                    (nurse.nurse_identifier, day.day_of_month),
                    solver.new_bounded_integer(0, 1),
                );
            }
        }

        Self {
            assignments,
            work_days,
        }
    }

    /// The assignment variable for a (nurse, day, shift) triple.
    ///
    /// Allocation is total over the input, so a valid key always resolves.
    pub fn assignment(&self, key: SlotKey) -> DomainId {
        self.assignments[&key]
    }

    /// The works-day variable for a (nurse, day) pair.
    pub fn work_day(&self, nurse: i32, day_of_month: i32) -> DomainId {
        self.work_days[&(nurse, day_of_month)]
    }

    /// All assignment variables of one nurse on one day, in shift order.
    pub fn day_slots(&self, nurse: i32, day: &Day) -> Vec<DomainId> {
        day.shifts
            .iter()
            .map(|s| self.assignment(SlotKey::new(nurse, day.day_of_month, s.shift_identifier)))
            .collect()
    }

    /// All assignment variables of one shift across the nurses, in nurse order.
    pub fn shift_slots(&self, nurses: &[Nurse], day_of_month: i32, shift: i32) -> Vec<DomainId> {
        nurses
            .iter()
            .map(|n| self.assignment(SlotKey::new(n.nurse_identifier, day_of_month, shift)))
            .collect()
    }

    /// All assignment variables of one nurse across the horizon.
    pub fn nurse_slots(&self, nurse: i32, days: &[&Day]) -> Vec<DomainId> {
        days.iter().flat_map(|d| self.day_slots(nurse, d)).collect()
    }

    /// Number of assignment variables.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Number of works-day variables.
    pub fn work_day_count(&self) -> usize {
        self.work_days.len()
    }
}
