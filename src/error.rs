//! Error types for configuration loading and roster management.
//!
//! The assignment engine itself never fails; these errors come from the
//! surfaces around it.

use thiserror::Error;

use crate::models::{ShiftId, StaffId};

/// Errors raised by configuration parsing and [`RosterStore`](crate::store::RosterStore) operations.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("invalid roster configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid assignment policy: {0}")]
    InvalidPolicy(String),

    #[error("shift '{0}' appears more than once in the shift list")]
    DuplicateShift(ShiftId),

    #[error("staff member '{0}' already exists")]
    DuplicateStaff(StaffId),

    #[error("staff member '{0}' not found")]
    UnknownStaff(StaffId),
}

/// Result alias for fallible roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = RosterError::DuplicateShift(ShiftId::from("Monday A"));
        assert_eq!(e.to_string(), "shift 'Monday A' appears more than once in the shift list");

        let e = RosterError::UnknownStaff(StaffId::from("Z. Nobody"));
        assert_eq!(e.to_string(), "staff member 'Z. Nobody' not found");
    }

    #[test]
    fn test_from_json_error() {
        let err: RosterError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, RosterError::Parse(_)));
        assert!(err.to_string().starts_with("invalid roster configuration"));
    }
}
