//! Input validation for batch print scheduling.
//!
//! Checks the semantic validity of jobs and printer constraints before
//! scheduling. Detects:
//! - Non-finite numbers (NaN or infinite volume, print time, max volume)
//! - Non-positive job volumes
//! - Negative print times
//! - Non-positive capacity limits
//!
//! Duplicate job IDs are *not* an error: the scheduler tolerates them
//! and orders exact duplicates stably.

use crate::models::{PrintJob, PrinterConstraints};

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
    /// A numeric field is NaN or infinite.
    NonFiniteNumber,
    /// A job's volume is zero or negative.
    NonPositiveVolume,
    /// A job's print time is negative.
    NegativePrintTime,
    /// `max_volume` is zero or negative, or `max_items` is zero.
    NonPositiveCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates jobs and constraints for a scheduling call.
///
/// Checks:
/// 1. Every job volume is finite and positive
/// 2. Every print time is finite and non-negative
/// 3. `max_volume` is finite and positive
/// 4. `max_items` is at least 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(jobs: &[PrintJob], constraints: &PrinterConstraints) -> ValidationResult {
    let mut errors = Vec::new();

    for job in jobs {
        if !job.volume.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteNumber,
                format!("Job '{}' has non-finite volume", job.id),
            ));
        } else if job.volume <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveVolume,
                format!("Job '{}' has non-positive volume {}", job.id, job.volume),
            ));
        }

        if !job.print_time.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteNumber,
                format!("Job '{}' has non-finite print time", job.id),
            ));
        } else if job.print_time < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePrintTime,
                format!(
                    "Job '{}' has negative print time {}",
                    job.id, job.print_time
                ),
            ));
        }
    }

    if !constraints.max_volume.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonFiniteNumber,
            "max_volume is non-finite",
        ));
    } else if constraints.max_volume <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveCapacity,
            format!("max_volume must be positive, got {}", constraints.max_volume),
        ));
    }

    if constraints.max_items == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveCapacity,
            "max_items must be at least 1",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_jobs() -> Vec<PrintJob> {
        vec![
            PrintJob::new("M1", 100.0).with_priority(1).with_print_time(120.0),
            PrintJob::new("M2", 150.0).with_priority(1).with_print_time(90.0),
        ]
    }

    fn constraints() -> PrinterConstraints {
        PrinterConstraints::new(300.0, 2)
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_jobs(), &constraints()).is_ok());
    }

    #[test]
    fn test_empty_jobs_valid() {
        assert!(validate_input(&[], &constraints()).is_ok());
    }

    #[test]
    fn test_nan_volume() {
        let jobs = vec![PrintJob::new("M1", f64::NAN)];
        let errors = validate_input(&jobs, &constraints()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonFiniteNumber));
    }

    #[test]
    fn test_infinite_print_time() {
        let jobs = vec![PrintJob::new("M1", 10.0).with_print_time(f64::INFINITY)];
        let errors = validate_input(&jobs, &constraints()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonFiniteNumber));
    }

    #[test]
    fn test_zero_volume() {
        let jobs = vec![PrintJob::new("M1", 0.0)];
        let errors = validate_input(&jobs, &constraints()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveVolume));
    }

    #[test]
    fn test_negative_print_time() {
        let jobs = vec![PrintJob::new("M1", 10.0).with_print_time(-5.0)];
        let errors = validate_input(&jobs, &constraints()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativePrintTime));
    }

    #[test]
    fn test_zero_print_time_allowed() {
        let jobs = vec![PrintJob::new("M1", 10.0).with_print_time(0.0)];
        assert!(validate_input(&jobs, &constraints()).is_ok());
    }

    #[test]
    fn test_non_positive_max_volume() {
        let errors =
            validate_input(&sample_jobs(), &PrinterConstraints::new(0.0, 2)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveCapacity));
    }

    #[test]
    fn test_zero_max_items() {
        let errors =
            validate_input(&sample_jobs(), &PrinterConstraints::new(300.0, 0)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveCapacity
                && e.message.contains("max_items")));
    }

    #[test]
    fn test_duplicate_ids_tolerated() {
        let jobs = vec![
            PrintJob::new("M1", 10.0).with_print_time(5.0),
            PrintJob::new("M1", 20.0).with_print_time(6.0),
        ];
        assert!(validate_input(&jobs, &constraints()).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        // Bad volume + bad print time + bad capacity
        let jobs = vec![PrintJob::new("M1", -1.0).with_print_time(-1.0)];
        let errors = validate_input(&jobs, &PrinterConstraints::new(-10.0, 2)).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
