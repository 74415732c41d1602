//! CP formulation of the rostering problem.
//!
//! Translates a [`RosterProblem`] into an engine model and decodes the
//! engine's answer back into a [`Roster`]. The encoding follows the classic
//! assignment formulation:
//!
//! 1. at most one shift per nurse per day,
//! 2. works-day indicators linked to the day's assignment variables by
//!    max-equality (so they can be summed over day windows),
//! 3. requested absence days force a nurse's daily assignments to zero,
//! 4. every shift is staffed with exactly its required headcount,
//! 5. no nurse works 4 consecutive days.
//!
//! Fairness is encoded by minimising the sum of squared per-nurse shift
//! counts: coverage fixes the total number of assignments, so the squared
//! sum is a convex stand-in for workload variance.
//!
//! # Reference
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Rossi, van Beek & Walsh (2006), "Handbook of Constraint Programming"

use std::collections::HashSet;
use std::time::Instant;

use pumpkin_solver::constraints::{self, Constraint};
use pumpkin_solver::results::{OptimisationResult, ProblemSolution, Solution};
use pumpkin_solver::termination::{Indefinite, TimeBudget};
use pumpkin_solver::variables::{DomainId, TransformableVariable};
use pumpkin_solver::Solver;
use tracing::info;

use super::solver::{RosterSolution, SolverConfig, SolverStatus};
use super::variables::{DecisionVars, SlotKey};
use crate::models::{Day, DayRoster, Roster, RosterProblem, ShiftAssignment};

/// Conflict detected at the root while posting constraints: the model is
/// already unsatisfiable before search starts.
struct RootConflict;

/// Builds a CP model from a rostering problem and solves it.
///
/// Each builder owns its engine instance, so independent horizons can be
/// built and solved concurrently.
///
/// # Example
/// ```no_run
/// use u_roster::cp::{RosterCpBuilder, SolverConfig};
/// use u_roster::models::{Day, Nurse, RosterProblem};
///
/// let problem = RosterProblem::new(2024, 6)
///     .with_day(Day::new(1).with_shift(1, 1))
///     .with_nurse(Nurse::new(0));
/// let outcome = RosterCpBuilder::new(&problem).solve(&SolverConfig::default());
/// assert!(outcome.is_optimal());
/// ```
pub struct RosterCpBuilder<'a> {
    problem: &'a RosterProblem,
}

impl<'a> RosterCpBuilder<'a> {
    /// Creates a builder for the given problem.
    pub fn new(problem: &'a RosterProblem) -> Self {
        Self { problem }
    }

    /// Builds the model, runs the engine, and decodes the outcome.
    ///
    /// Only a proven-optimal outcome yields a roster. A time budget that
    /// expires with a solution in hand reports `Feasible`; with none,
    /// `Unknown`. Both are distinct from `Infeasible`.
    pub fn solve(&self, config: &SolverConfig) -> RosterSolution {
        let start = Instant::now();

        let mut solver = Solver::default();
        let vars = DecisionVars::allocate(&mut solver, self.problem);

        info!(
            nurses = self.problem.nurse_count(),
            days = self.problem.day_count(),
            assignment_vars = vars.assignment_count(),
            work_day_vars = vars.work_day_count(),
            "allocated rostering decision variables"
        );

        let objective = match self.encode(&mut solver, &vars) {
            Ok(objective) => objective,
            Err(RootConflict) => {
                info!("root conflict while posting constraints");
                return RosterSolution::empty(
                    SolverStatus::Infeasible,
                    start.elapsed().as_millis() as i64,
                );
            }
        };

        let mut brancher = solver.default_brancher_over_all_propositional_variables();
        let result = match config.time_limit {
            Some(limit) => solver.minimise(
                &mut brancher,
                &mut TimeBudget::starting_now(limit),
                objective,
            ),
            None => solver.minimise(&mut brancher, &mut Indefinite, objective),
        };
        let solve_time_ms = start.elapsed().as_millis() as i64;

        let outcome = match result {
            OptimisationResult::Optimal(solution) => RosterSolution {
                status: SolverStatus::Optimal,
                objective_value: Some(i64::from(solution.get_integer_value(objective))),
                roster: Some(self.decode_solution(&solution, &vars)),
                solve_time_ms,
            },
            OptimisationResult::Satisfiable(solution) => RosterSolution {
                status: SolverStatus::Feasible,
                objective_value: Some(i64::from(solution.get_integer_value(objective))),
                roster: None,
                solve_time_ms,
            },
            OptimisationResult::Unsatisfiable => {
                RosterSolution::empty(SolverStatus::Infeasible, solve_time_ms)
            }
            OptimisationResult::Unknown => {
                RosterSolution::empty(SolverStatus::Unknown, solve_time_ms)
            }
        };

        info!(
            status = outcome.status.as_str(),
            objective = outcome.objective_value,
            solve_time_ms,
            "rostering solve finished"
        );
        outcome
    }

    /// Posts all constraints and the objective; returns the objective
    /// variable to minimise.
    fn encode(&self, solver: &mut Solver, vars: &DecisionVars) -> Result<DomainId, RootConflict> {
        let days = self.problem.days_in_order();

        // Per nurse and day: at most one shift, and the works-day indicator
        // equals the maximum of the day's assignment variables. A day with
        // no shifts pins the indicator to zero.
        for nurse in &self.problem.nurses {
            for day in &days {
                let work = vars.work_day(nurse.nurse_identifier, day.day_of_month);
                let slots = vars.day_slots(nurse.nurse_identifier, day);
                if slots.is_empty() {
                    post(solver, constraints::equals(vec![work], 0))?;
                    continue;
                }
                post(solver, constraints::less_than_or_equals(slots.clone(), 1))?;
                post(solver, constraints::maximum(slots, work))?;
            }
        }

        // Requested absence days zero out the nurse's assignments. Requests
        // naming a day outside the horizon match nothing and are skipped.
        for nurse in &self.problem.nurses {
            let requested: HashSet<i32> = nurse.days_off_requested.iter().copied().collect();
            for day in &days {
                if !requested.contains(&day.day_of_month) {
                    continue;
                }
                let slots = vars.day_slots(nurse.nurse_identifier, day);
                if slots.is_empty() {
                    continue;
                }
                post(solver, constraints::equals(slots, 0))?;
            }
        }

        // Exact coverage: over- and under-staffing are both infeasible.
        for day in &days {
            for shift in &day.shifts {
                let slots =
                    vars.shift_slots(&self.problem.nurses, day.day_of_month, shift.shift_identifier);
                if slots.is_empty() {
                    if shift.number_of_nurses_required != 0 {
                        return Err(RootConflict);
                    }
                    continue;
                }
                post(
                    solver,
                    constraints::equals(slots, shift.number_of_nurses_required),
                )?;
            }
        }

        // Consecutive-workday cap: in every window of 4 days (ascending
        // day order) at most 3 are worked.
        for nurse in &self.problem.nurses {
            for window in days.windows(4) {
                let worked: Vec<DomainId> = window
                    .iter()
                    .map(|d| vars.work_day(nurse.nurse_identifier, d.day_of_month))
                    .collect();
                post(solver, constraints::less_than_or_equals(worked, 3))?;
            }
        }

        self.encode_objective(solver, vars, &days)
    }

    /// Per-nurse workload counts, their squares, and the total to minimise.
    fn encode_objective(
        &self,
        solver: &mut Solver,
        vars: &DecisionVars,
        days: &[&Day],
    ) -> Result<DomainId, RootConflict> {
        let total_slots = self.problem.total_shift_slots() as i32;

        let mut squares = Vec::with_capacity(self.problem.nurses.len());
        for nurse in &self.problem.nurses {
            let slots = vars.nurse_slots(nurse.nurse_identifier, days);

            let count = solver.new_bounded_integer(0, total_slots);
            let mut terms: Vec<_> = slots.iter().map(|v| v.scaled(1)).collect();
            terms.push(count.scaled(-1));
            post(solver, constraints::equals(terms, 0))?;

            let squared = solver.new_bounded_integer(0, total_slots * total_slots);
            post(solver, constraints::times(count, count, squared))?;
            squares.push(squared);
        }

        let objective = solver.new_bounded_integer(
            0,
            total_slots * total_slots * self.problem.nurses.len() as i32,
        );
        let mut terms: Vec<_> = squares.iter().map(|v| v.scaled(1)).collect();
        terms.push(objective.scaled(-1));
        post(solver, constraints::equals(terms, 0))?;

        Ok(objective)
    }

    /// Reads solved assignment values back into a roster: days ascending,
    /// shifts in input order, nurse lists in nurse input order.
    fn decode_solution(&self, solution: &Solution, vars: &DecisionVars) -> Roster {
        let mut roster = Roster::new(self.problem.year, self.problem.month);

        for day in self.problem.days_in_order() {
            let mut day_roster = DayRoster::new(day.day_of_month);
            for shift in &day.shifts {
                let mut assignment = ShiftAssignment::new(shift.shift_identifier);
                for nurse in &self.problem.nurses {
                    let key = SlotKey::new(
                        nurse.nurse_identifier,
                        day.day_of_month,
                        shift.shift_identifier,
                    );
                    if solution.get_integer_value(vars.assignment(key)) == 1 {
                        assignment.nurses.push(nurse.nurse_identifier);
                    }
                }
                day_roster.shifts.push(assignment);
            }
            roster.days.push(day_roster);
        }

        roster
    }
}

fn post(solver: &mut Solver, constraint: impl Constraint) -> Result<(), RootConflict> {
    constraint.post(solver, None).map_err(|_| RootConflict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_data;
    use crate::models::{Day, Nurse, RosterProblem};

    fn solve(problem: &RosterProblem) -> RosterSolution {
        RosterCpBuilder::new(problem).solve(&SolverConfig::default())
    }

    /// Checks every hard constraint against a solved roster.
    fn assert_roster_invariants(problem: &RosterProblem, roster: &Roster) {
        let days = problem.days_in_order();

        for day in &days {
            let day_roster = roster.day(day.day_of_month).unwrap();
            assert_eq!(day_roster.shifts.len(), day.shifts.len());
            for shift in &day.shifts {
                let nurses = roster
                    .nurses_on(day.day_of_month, shift.shift_identifier)
                    .unwrap();
                assert_eq!(
                    nurses.len(),
                    shift.number_of_nurses_required as usize,
                    "coverage mismatch on day {} shift {}",
                    day.day_of_month,
                    shift.shift_identifier
                );
            }
        }

        for nurse in &problem.nurses {
            let worked = roster.worked_days(nurse.nurse_identifier);

            for day in &days {
                let shifts_today = day
                    .shifts
                    .iter()
                    .filter(|s| {
                        roster
                            .nurses_on(day.day_of_month, s.shift_identifier)
                            .is_some_and(|ns| ns.contains(&nurse.nurse_identifier))
                    })
                    .count();
                assert!(
                    shifts_today <= 1,
                    "nurse {} works {} shifts on day {}",
                    nurse.nurse_identifier,
                    shifts_today,
                    day.day_of_month
                );
                if nurse.is_off(day.day_of_month) {
                    assert_eq!(
                        shifts_today, 0,
                        "nurse {} works on requested day off {}",
                        nurse.nurse_identifier, day.day_of_month
                    );
                }
            }

            for window in days.windows(4) {
                let worked_in_window = window
                    .iter()
                    .filter(|d| worked.contains(&d.day_of_month))
                    .count();
                assert!(
                    worked_in_window <= 3,
                    "nurse {} works 4 consecutive days starting day {}",
                    nurse.nurse_identifier,
                    window[0].day_of_month
                );
            }
        }
    }

    #[test]
    fn test_five_nurse_week_is_optimal() {
        let problem = demo_data::five_nurse_week();
        let outcome = solve(&problem);

        assert_eq!(outcome.status, SolverStatus::Optimal);
        let roster = outcome.roster.unwrap();
        assert_roster_invariants(&problem, &roster);

        assert_eq!(roster.total_assignments(), 27);
        assert_eq!(outcome.objective_value, Some(147)); // 2 x 36 + 3 x 25

        // 27 assignments over 5 nurses: everyone lands on 5 or 6 shifts.
        let counts = roster.shift_counts_by_nurse();
        for nurse in &problem.nurses {
            let count = counts[&nurse.nurse_identifier];
            assert!(
                (5..=6).contains(&count),
                "nurse {} works {} shifts",
                nurse.nurse_identifier,
                count
            );
        }
    }

    #[test]
    fn test_equal_split_when_total_divides_evenly() {
        // 4 single-shift days over 2 nurses: the squared-workload objective
        // forces a 2/2 split (8) over any 3/1 split (10).
        let mut problem = RosterProblem::new(2024, 6)
            .with_nurse(Nurse::new(0))
            .with_nurse(Nurse::new(1));
        for day in 1..=4 {
            problem = problem.with_day(Day::new(day).with_shift(1, 1));
        }

        let outcome = solve(&problem);
        assert_eq!(outcome.status, SolverStatus::Optimal);
        assert_eq!(outcome.objective_value, Some(8));

        let counts = outcome.roster.unwrap().shift_counts_by_nurse();
        assert_eq!(counts[&0], 2);
        assert_eq!(counts[&1], 2);
    }

    #[test]
    fn test_zero_coverage_forces_empty_shift() {
        let problem = RosterProblem::new(2024, 6)
            .with_day(Day::new(1).with_shift(1, 1).with_shift(2, 0))
            .with_nurse(Nurse::new(0));

        let outcome = solve(&problem);
        assert_eq!(outcome.status, SolverStatus::Optimal);

        let roster = outcome.roster.unwrap();
        assert_eq!(roster.nurses_on(1, 1), Some(&[0][..]));
        assert_eq!(roster.nurses_on(1, 2), Some(&[][..]));
    }

    #[test]
    fn test_demand_beyond_headcount_is_infeasible() {
        let problem = RosterProblem::new(2024, 6)
            .with_day(Day::new(1).with_shift(1, 2))
            .with_nurse(Nurse::new(0));

        let outcome = solve(&problem);
        assert_eq!(outcome.status, SolverStatus::Infeasible);
        assert!(outcome.roster.is_none());
        assert!(outcome.objective_value.is_none());
    }

    #[test]
    fn test_absence_can_make_coverage_infeasible() {
        let problem = RosterProblem::new(2024, 6)
            .with_day(Day::new(1).with_shift(1, 1))
            .with_nurse(Nurse::new(0).with_days_off([1]));

        let outcome = solve(&problem);
        assert_eq!(outcome.status, SolverStatus::Infeasible);
    }

    #[test]
    fn test_no_nurses_with_demand_is_infeasible() {
        let problem = RosterProblem::new(2024, 6).with_day(Day::new(1).with_shift(1, 1));

        let outcome = solve(&problem);
        assert_eq!(outcome.status, SolverStatus::Infeasible);
    }

    #[test]
    fn test_four_consecutive_workdays_are_rejected() {
        // One nurse, demand on 4 consecutive days: every cover needs a
        // 4-day run, so the cap makes the problem infeasible.
        let mut problem = RosterProblem::new(2024, 6).with_nurse(Nurse::new(0));
        for day in 1..=4 {
            problem = problem.with_day(Day::new(day).with_shift(1, 1));
        }

        let outcome = solve(&problem);
        assert_eq!(outcome.status, SolverStatus::Infeasible);
    }

    #[test]
    fn test_three_consecutive_workdays_are_allowed() {
        let problem = RosterProblem::new(2024, 6)
            .with_nurse(Nurse::new(0))
            .with_day(Day::new(1).with_shift(1, 1))
            .with_day(Day::new(2).with_shift(1, 1))
            .with_day(Day::new(3).with_shift(1, 1))
            .with_day(Day::new(4).with_shift(1, 0));

        let outcome = solve(&problem);
        assert_eq!(outcome.status, SolverStatus::Optimal);
        assert_eq!(outcome.roster.unwrap().worked_days(0), vec![1, 2, 3]);
    }

    #[test]
    fn test_absence_outside_horizon_is_noop() {
        let problem = RosterProblem::new(2024, 6)
            .with_day(Day::new(1).with_shift(1, 1))
            .with_nurse(Nurse::new(0).with_days_off([99]));

        let outcome = solve(&problem);
        assert_eq!(outcome.status, SolverStatus::Optimal);
    }

    #[test]
    fn test_unsorted_days_come_out_in_numeric_order() {
        let problem = RosterProblem::new(2024, 6)
            .with_day(Day::new(3).with_shift(1, 1))
            .with_day(Day::new(1).with_shift(1, 1))
            .with_day(Day::new(2).with_shift(1, 0))
            .with_nurse(Nurse::new(0))
            .with_nurse(Nurse::new(1));

        let outcome = solve(&problem);
        let roster = outcome.roster.unwrap();
        let ordered: Vec<i32> = roster.days.iter().map(|d| d.day_of_month).collect();
        assert_eq!(ordered, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_horizon_solves_trivially() {
        let problem = RosterProblem::new(2024, 6).with_nurse(Nurse::new(0));

        let outcome = solve(&problem);
        assert_eq!(outcome.status, SolverStatus::Optimal);
        assert_eq!(outcome.objective_value, Some(0));
        assert!(outcome.roster.unwrap().days.is_empty());
    }

    #[test]
    fn test_overcommitted_week_reports_infeasible() {
        // Six days demanding all five nurses at once while every nurse has
        // two absence days: day 1 alone (headcounts 2+2+1) needs five
        // nurses but only four are available.
        let headcounts = [
            [2, 2, 1],
            [1, 2, 2],
            [2, 1, 2],
            [2, 2, 1],
            [1, 2, 2],
            [2, 1, 2],
            [1, 1, 1],
        ];
        let absences = [[2, 4], [1, 5], [3, 6], [4, 7], [2, 6]];

        let mut problem = RosterProblem::new(2024, 6);
        for (i, day_headcounts) in headcounts.iter().enumerate() {
            let mut day = Day::new(i as i32 + 1);
            for (j, &required) in day_headcounts.iter().enumerate() {
                day = day.with_shift(j as i32 + 1, required);
            }
            problem = problem.with_day(day);
        }
        for (i, days_off) in absences.iter().enumerate() {
            problem = problem.with_nurse(Nurse::new(i as i32).with_days_off(days_off.iter().copied()));
        }

        let outcome = solve(&problem);
        assert_eq!(outcome.status, SolverStatus::Infeasible);
    }
}
