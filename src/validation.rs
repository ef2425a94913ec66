//! Input validation for simulation runs.
//!
//! Checks the process list before any builder sees it. Detects:
//! - Empty input
//! - Empty or duplicate names
//! - Names colliding with the idle label
//! - Negative arrival times
//! - Non-positive burst times
//! - Workloads whose schedule would run past `i64::MAX`
//!
//! All problems are reported together rather than stopping at the first.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// The process list is empty.
    EmptyInput,
    /// A process has an empty name.
    EmptyName,
    /// Two processes share the same name.
    DuplicateName,
    /// A process name equals the idle label.
    ReservedName,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// The schedule would end beyond the representable time range.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. The list is not empty
/// 2. Every name is non-empty and unique
/// 3. No name equals `idle_label`
/// 4. Arrival times are >= 0
/// 5. Burst times are > 0
/// 6. The latest of `start_time` and every arrival, plus the total burst
///    time, fits in an `i64`. No clock value of any discipline exceeds it.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(
    processes: &[ProcessSpec],
    idle_label: &str,
    start_time: i64,
) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Process list is empty",
        ));
    }

    let mut names = HashSet::new();
    for (i, p) in processes.iter().enumerate() {
        if p.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Process #{} has an empty name", i + 1),
            ));
        } else if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", p.name),
            ));
        }

        if p.name == idle_label {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedName,
                format!("Process name '{}' is reserved for idle intervals", p.name),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.name, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.name, p.burst_time
                ),
            ));
        }
    }

    let latest_start = processes
        .iter()
        .map(|p| p.arrival_time)
        .fold(start_time, i64::max);
    let horizon = processes
        .iter()
        .filter(|p| p.burst_time > 0)
        .try_fold(latest_start, |t, p| t.checked_add(p.burst_time));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!("Total burst time starting at t={latest_start} overflows the time range"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
