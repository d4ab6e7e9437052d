//! Staff member model.
//!
//! A staff member is the unit placed into shifts. Identity is carried by an
//! immutable [`StaffId`]; the display name can change without breaking
//! conflict lists or history lookups that reference the id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::ShiftId;

/// Stable identity key for a staff member.
///
/// Conflict lists and finalized schedules reference staff by this key,
/// never by live record, so referenced members may be edited or removed
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(String);

impl StaffId {
    /// Creates an identity key.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StaffId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StaffId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A person who can be rostered onto shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StaffRecord")]
pub struct StaffMember {
    /// Identity key.
    pub id: StaffId,
    /// Display name. Defaults to the id.
    pub name: String,
    /// Seniority tier (lower value = higher precedence).
    pub rank: u32,
    /// Whether this member counts toward shift coverage.
    pub is_marker: bool,
    /// Shifts this member may work.
    pub availability: BTreeSet<ShiftId>,
    /// Members this one must not share a shift with.
    pub conflicts: BTreeSet<StaffId>,
}

/// Serialized form of [`StaffMember`]; `name` may be omitted.
#[derive(Deserialize)]
struct StaffRecord {
    id: StaffId,
    #[serde(default)]
    name: Option<String>,
    rank: u32,
    #[serde(default)]
    is_marker: bool,
    #[serde(default)]
    availability: BTreeSet<ShiftId>,
    #[serde(default)]
    conflicts: BTreeSet<StaffId>,
}

impl From<StaffRecord> for StaffMember {
    fn from(record: StaffRecord) -> Self {
        let name = record
            .name
            .unwrap_or_else(|| record.id.as_str().to_string());
        Self {
            id: record.id,
            name,
            rank: record.rank,
            is_marker: record.is_marker,
            availability: record.availability,
            conflicts: record.conflicts,
        }
    }
}

impl StaffMember {
    /// Creates a member whose identity key is its display name.
    pub fn new(name: impl Into<String>, rank: u32) -> Self {
        let name = name.into();
        Self {
            id: StaffId::new(name.clone()),
            name,
            rank,
            is_marker: false,
            availability: BTreeSet::new(),
            conflicts: BTreeSet::new(),
        }
    }

    /// Creates a member with an explicit identity key distinct from its name.
    pub fn with_id(id: impl Into<StaffId>, name: impl Into<String>, rank: u32) -> Self {
        Self {
            id: id.into(),
            ..Self::new(name, rank)
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Flags the member as a marker.
    pub fn marker(mut self) -> Self {
        self.is_marker = true;
        self
    }

    /// Sets the marker flag.
    pub fn with_marker(mut self, is_marker: bool) -> Self {
        self.is_marker = is_marker;
        self
    }

    /// Adds one available shift.
    pub fn available_for(mut self, shift: impl Into<ShiftId>) -> Self {
        self.availability.insert(shift.into());
        self
    }

    /// Replaces the availability set.
    pub fn with_availability<I, S>(mut self, shifts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ShiftId>,
    {
        self.availability = shifts.into_iter().map(Into::into).collect();
        self
    }

    /// Declares a conflict with another member.
    pub fn with_conflict(mut self, other: impl Into<StaffId>) -> Self {
        self.conflicts.insert(other.into());
        self
    }

    /// Whether the member may work the given shift.
    #[inline]
    pub fn is_available(&self, shift: &ShiftId) -> bool {
        self.availability.contains(shift)
    }

    /// Whether this member declared a conflict with `other`.
    ///
    /// One-sided. Use [`StaffMember::conflicts_with`] for the pairwise check.
    #[inline]
    pub fn declares_conflict(&self, other: &StaffId) -> bool {
        self.conflicts.contains(other)
    }

    /// Whether either member lists the other as a conflict.
    pub fn conflicts_with(&self, other: &StaffMember) -> bool {
        self.declares_conflict(&other.id) || other.declares_conflict(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_builder() {
        let m = StaffMember::new("A. Thompson", 3)
            .marker()
            .available_for("Monday A")
            .available_for("Friday B")
            .with_conflict("D. Gee");

        assert_eq!(m.id.as_str(), "A. Thompson");
        assert_eq!(m.name, "A. Thompson");
        assert_eq!(m.rank, 3);
        assert!(m.is_marker);
        assert!(m.is_available(&ShiftId::from("Monday A")));
        assert!(!m.is_available(&ShiftId::from("Monday B")));
        assert!(m.declares_conflict(&StaffId::from("D. Gee")));
    }

    #[test]
    fn test_identity_independent_of_name() {
        let m = StaffMember::with_id("emp-7", "G. Scott", 3).with_name("G. Scott-Hill");
        assert_eq!(m.id.as_str(), "emp-7");
        assert_eq!(m.name, "G. Scott-Hill");
    }

    #[test]
    fn test_conflict_is_bidirectional() {
        let a = StaffMember::new("N. Potts", 3).with_conflict("A. Reed");
        let b = StaffMember::new("A. Reed", 2);
        let c = StaffMember::new("K. Young", 3);

        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
        assert!(!b.declares_conflict(&a.id));
        assert!(!a.conflicts_with(&c));
    }

    #[test]
    fn test_with_availability_replaces() {
        let m = StaffMember::new("E. Lopez", 1)
            .available_for("Sunday B")
            .with_availability(["Monday A", "Monday B"]);
        assert_eq!(m.availability.len(), 2);
        assert!(!m.is_available(&ShiftId::from("Sunday B")));
    }

    #[test]
    fn test_deserialize_defaults() {
        let m: StaffMember =
            serde_json::from_str(r#"{"id":"L. King","name":"L. King","rank":3}"#).unwrap();
        assert!(!m.is_marker);
        assert!(m.availability.is_empty());
        assert!(m.conflicts.is_empty());
    }

    #[test]
    fn test_deserialize_name_defaults_to_id() {
        let m: StaffMember = serde_json::from_str(r#"{"id":"x","rank":1}"#).unwrap();
        assert_eq!(m.name, "x");
        assert_eq!(m.id.as_str(), "x");

        let named: StaffMember =
            serde_json::from_str(r#"{"id":"x","name":"Xavier","rank":1}"#).unwrap();
        assert_eq!(named.name, "Xavier");
    }
}
