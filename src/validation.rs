//! Input validation for rostering problems.
//!
//! Checks structural integrity of the problem data before any model
//! construction. Detects:
//! - Duplicate day identifiers
//! - Duplicate shift identifiers within a day
//! - Duplicate nurse identifiers
//! - Negative headcounts
//!
//! A problem that passes validation may still be infeasible (coverage can
//! exceed what the nurses can deliver); infeasibility is a solver verdict,
//! not a data error. Zero headcounts are legal and simply force a shift to
//! stay empty. Absence requests naming days outside the horizon are ignored.

use crate::models::RosterProblem;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two days share the same `day_of_month`.
    DuplicateDay,
    /// Two shifts of the same day share an identifier.
    DuplicateShift,
    /// Two nurses share an identifier.
    DuplicateNurse,
    /// A shift requires a negative number of nurses.
    NegativeHeadcount,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a rostering problem.
///
/// Checks:
/// 1. No duplicate `day_of_month` values
/// 2. No duplicate shift identifiers within a single day
/// 3. No duplicate nurse identifiers
/// 4. No negative headcounts
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &RosterProblem) -> ValidationResult {
    let mut errors = Vec::new();

    let mut day_ids = HashSet::new();
    for day in &problem.days {
        if !day_ids.insert(day.day_of_month) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDay,
                format!("Duplicate day_of_month: {}", day.day_of_month),
            ));
        }

        let mut shift_ids = HashSet::new();
        for shift in &day.shifts {
            if !shift_ids.insert(shift.shift_identifier) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateShift,
                    format!(
                        "Duplicate shift_identifier {} on day {}",
                        shift.shift_identifier, day.day_of_month
                    ),
                ));
            }

            if shift.number_of_nurses_required < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeHeadcount,
                    format!(
                        "Shift {} on day {} requires {} nurses",
                        shift.shift_identifier, day.day_of_month, shift.number_of_nurses_required
                    ),
                ));
            }
        }
    }

    let mut nurse_ids = HashSet::new();
    for nurse in &problem.nurses {
        if !nurse_ids.insert(nurse.nurse_identifier) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateNurse,
                format!("Duplicate nurse_identifier: {}", nurse.nurse_identifier),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
