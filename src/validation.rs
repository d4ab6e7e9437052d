//! Input validation for roster data.
//!
//! Checks structural integrity of the roster and shift list. Detects:
//! - Duplicate staff or shift IDs
//! - Conflict entries naming unknown staff
//! - Members declaring a conflict with themselves
//! - Availability for shifts not in the shift list
//!
//! Validation is advisory. The assigner never runs it and never fails on
//! the issues it reports.

use crate::models::{ShiftId, StaffMember};
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
    /// Two entities share the same ID.
    DuplicateId,
    /// A conflict list names a staff ID not on the roster.
    UnknownConflictReference,
    /// A member lists itself as a conflict.
    SelfConflict,
    /// A member is available for a shift not in the shift list.
    UnknownShift,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster against a shift list.
///
/// Checks:
/// 1. No duplicate shift IDs
/// 2. No duplicate staff IDs
/// 3. No member conflicts with itself
/// 4. All conflict references point to roster members
/// 5. All availability entries point to listed shifts
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(staff: &[StaffMember], shifts: &[ShiftId]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut shift_ids = HashSet::new();
    for shift in shifts {
        if !shift_ids.insert(shift) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate shift ID: {shift}"),
            ));
        }
    }

    let mut staff_ids = HashSet::new();
    for member in staff {
        if !staff_ids.insert(&member.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate staff ID: {}", member.id),
            ));
        }
    }

    for member in staff {
        for other in &member.conflicts {
            if other == &member.id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfConflict,
                    format!("Staff '{}' lists itself as a conflict", member.id),
                ));
            } else if !staff_ids.contains(other) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownConflictReference,
                    format!(
                        "Staff '{}' lists unknown conflict '{}'",
                        member.id, other
                    ),
                ));
            }
        }

        for shift in &member.availability {
            if !shift_ids.contains(shift) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownShift,
                    format!(
                        "Staff '{}' is available for unknown shift '{}'",
                        member.id, shift
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
