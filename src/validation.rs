//! Input validation for scheduling instances.
//!
//! Checks structural integrity of an instance before the search begins.
//! Detects:
//! - Zero machines
//! - Zero-length task durations
//!
//! An empty task list is deliberately *not* an error: it is a legitimate
//! instance whose optimal makespan is zero, and the search resolves it at
//! the root goal test.

use crate::models::Instance;

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
    /// The instance has no machines to assign tasks to.
    NoMachines,
    /// A task duration is zero.
    ZeroDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a scheduling instance.
///
/// Checks:
/// 1. At least one machine
/// 2. Every task duration is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    if instance.machine_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoMachines,
            "Instance has no machines",
        ));
    }

    for (i, &duration) in instance.durations.iter().enumerate() {
        if duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Task {} has zero duration", i + 1),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
