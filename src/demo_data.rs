//! Demo problem data.

use crate::models::{Day, Nurse, RosterProblem};

/// A five-nurse, seven-day, three-shifts-per-day week.
///
/// 27 required assignments in total; nurse 0 has requested days 2 and 4
/// off, and the third shift of day 4 needs nobody. The optimum distributes
/// the load as two nurses with 6 shifts and three with 5.
pub fn five_nurse_week() -> RosterProblem {
    let headcounts = [
        [2, 1, 1],
        [1, 2, 1],
        [1, 1, 2],
        [1, 1, 0],
        [2, 1, 1],
        [2, 2, 1],
        [1, 2, 1],
    ];

    let mut problem = RosterProblem::new(2024, 6);
    for (i, day_headcounts) in headcounts.iter().enumerate() {
        let mut day = Day::new(i as i32 + 1);
        for (j, &required) in day_headcounts.iter().enumerate() {
            day = day.with_shift(j as i32 + 1, required);
        }
        problem = problem.with_day(day);
    }

    problem = problem.with_nurse(Nurse::new(0).with_days_off([2, 4]));
    for nurse in 1..5 {
        problem = problem.with_nurse(Nurse::new(nurse));
    }
    problem
}
