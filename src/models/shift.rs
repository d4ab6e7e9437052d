//! Shift identifiers.
//!
//! A shift is a named recurring slot in the scheduling period. The default
//! period is one week with two slots per day ("A" and "B").

use serde::{Deserialize, Serialize};
use std::fmt;

/// Days in the default weekly period, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Per-day slot suffixes in the default weekly period.
pub const DAY_SLOTS: [&str; 2] = ["A", "B"];

/// Identifier of a shift (e.g. `"Monday A"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftId(String);

impl ShiftId {
    /// Creates a shift identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The default weekly sequence: `Monday A, Monday B, ..., Sunday B`.
    pub fn weekly() -> Vec<ShiftId> {
        WEEKDAYS
            .iter()
            .flat_map(|day| DAY_SLOTS.iter().map(move |slot| Self(format!("{day} {slot}"))))
            .collect()
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShiftId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ShiftId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_sequence() {
        let week = ShiftId::weekly();
        assert_eq!(week.len(), 14);
        assert_eq!(week[0].as_str(), "Monday A");
        assert_eq!(week[1].as_str(), "Monday B");
        assert_eq!(week[2].as_str(), "Tuesday A");
        assert_eq!(week[13].as_str(), "Sunday B");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ShiftId::from("Friday A")).unwrap();
        assert_eq!(json, "\"Friday A\"");
    }
}
