//! Schedule (solution) model.
//!
//! A schedule maps each shift, in period order, to the staff placed on it.
//! Staff order within a shift is assignment order, not alphabetical.
//! Finalized schedules accumulate in a [`ScheduleHistory`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::{ShiftId, StaffId};

/// Staff placed on one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRoster {
    /// The shift.
    pub shift: ShiftId,
    /// Assigned staff in assignment order.
    pub staff: Vec<StaffId>,
}

impl ShiftRoster {
    /// Creates an empty roster for a shift.
    pub fn new(shift: impl Into<ShiftId>) -> Self {
        Self {
            shift: shift.into(),
            staff: Vec::new(),
        }
    }

    /// Appends a staff member.
    pub fn with_staff(mut self, id: impl Into<StaffId>) -> Self {
        self.staff.push(id.into());
        self
    }

    /// Whether nobody is assigned.
    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }
}

/// A complete shift assignment for one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Per-shift rosters in period order.
    pub shifts: Vec<ShiftRoster>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shift roster (builder form).
    pub fn with_shift(mut self, roster: ShiftRoster) -> Self {
        self.shifts.push(roster);
        self
    }

    /// Adds a shift roster.
    pub fn add_shift(&mut self, roster: ShiftRoster) {
        self.shifts.push(roster);
    }

    /// Staff assigned to a shift, or `None` if the shift is not in this schedule.
    pub fn staff_for(&self, shift: &ShiftId) -> Option<&[StaffId]> {
        self.shifts
            .iter()
            .find(|r| &r.shift == shift)
            .map(|r| r.staff.as_slice())
    }

    /// Shift identifiers in period order.
    pub fn shift_ids(&self) -> impl Iterator<Item = &ShiftId> {
        self.shifts.iter().map(|r| &r.shift)
    }

    /// Every staff id that appears on at least one shift.
    pub fn scheduled_staff(&self) -> BTreeSet<&StaffId> {
        self.shifts.iter().flat_map(|r| r.staff.iter()).collect()
    }

    /// Whether a staff member appears anywhere in this schedule.
    pub fn contains_staff(&self, id: &StaffId) -> bool {
        self.shifts.iter().any(|r| r.staff.contains(id))
    }

    /// Shifts a given staff member works, in period order.
    pub fn shifts_for(&self, id: &StaffId) -> Vec<&ShiftId> {
        self.shifts
            .iter()
            .filter(|r| r.staff.contains(id))
            .map(|r| &r.shift)
            .collect()
    }

    /// Number of shifts.
    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }

    /// Total staff placements across all shifts.
    pub fn assignment_count(&self) -> usize {
        self.shifts.iter().map(|r| r.staff.len()).sum()
    }
}

/// Previously finalized schedules, oldest first.
///
/// Only the latest entry is consulted when prioritizing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleHistory {
    schedules: Vec<Schedule>,
}

impl ScheduleHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finalized schedule.
    pub fn finalize(&mut self, schedule: Schedule) {
        self.schedules.push(schedule);
    }

    /// The most recently finalized schedule.
    pub fn latest(&self) -> Option<&Schedule> {
        self.schedules.last()
    }

    /// Number of finalized schedules.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Whether nothing has been finalized yet.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Finalized schedules, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Schedule> {
        self.schedules.iter()
    }
}

impl From<Vec<Schedule>> for ScheduleHistory {
    fn from(schedules: Vec<Schedule>) -> Self {
        Self { schedules }
    }
}

/// Two conflicting members placed on the same shift.
///
/// `first` precedes `second` in the shift's assignment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictWarning {
    /// Shift where both were assigned.
    pub shift: ShiftId,
    /// Earlier-assigned member.
    pub first: StaffId,
    /// Later-assigned member.
    pub second: StaffId,
}

impl ConflictWarning {
    /// Creates a conflict warning.
    pub fn new(shift: ShiftId, first: StaffId, second: StaffId) -> Self {
        Self {
            shift,
            first,
            second,
        }
    }

    /// Whether this warning concerns the given unordered pair.
    pub fn involves(&self, a: &StaffId, b: &StaffId) -> bool {
        (&self.first == a && &self.second == b) || (&self.first == b && &self.second == a)
    }
}

impl fmt::Display for ConflictWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cannot work with {} on {}",
            self.first, self.second, self.shift
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        Schedule::new()
            .with_shift(
                ShiftRoster::new("Monday A")
                    .with_staff("D. Garcia")
                    .with_staff("O. Allen")
                    .with_staff("K. Young"),
            )
            .with_shift(ShiftRoster::new("Monday B").with_staff("D. Garcia"))
            .with_shift(ShiftRoster::new("Tuesday A"))
    }

    #[test]
    fn test_staff_for() {
        let s = sample_schedule();
        let monday = s.staff_for(&ShiftId::from("Monday A")).unwrap();
        assert_eq!(monday.len(), 3);
        assert_eq!(monday[0].as_str(), "D. Garcia");
        assert!(s.staff_for(&ShiftId::from("Tuesday A")).unwrap().is_empty());
        assert!(s.staff_for(&ShiftId::from("Sunday B")).is_none());
    }

    #[test]
    fn test_scheduled_staff_dedups() {
        let s = sample_schedule();
        let staff = s.scheduled_staff();
        assert_eq!(staff.len(), 3);
        assert!(s.contains_staff(&StaffId::from("O. Allen")));
        assert!(!s.contains_staff(&StaffId::from("L. King")));
    }

    #[test]
    fn test_shifts_for_member() {
        let s = sample_schedule();
        let shifts = s.shifts_for(&StaffId::from("D. Garcia"));
        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].as_str(), "Monday A");
        assert_eq!(shifts[1].as_str(), "Monday B");
    }

    #[test]
    fn test_counts() {
        let s = sample_schedule();
        assert_eq!(s.shift_count(), 3);
        assert_eq!(s.assignment_count(), 4);
        assert_eq!(
            s.shift_ids().map(|id| id.as_str()).collect::<Vec<_>>(),
            vec!["Monday A", "Monday B", "Tuesday A"]
        );
    }

    #[test]
    fn test_history_latest() {
        let mut h = ScheduleHistory::new();
        assert!(h.latest().is_none());
        assert!(h.is_empty());

        h.finalize(sample_schedule());
        h.finalize(Schedule::new().with_shift(ShiftRoster::new("Monday A")));
        assert_eq!(h.len(), 2);
        assert_eq!(h.latest().unwrap().assignment_count(), 0);
    }

    #[test]
    fn test_conflict_warning_display() {
        let w = ConflictWarning::new(
            ShiftId::from("Friday A"),
            StaffId::from("A. Thompson"),
            StaffId::from("D. Gee"),
        );
        assert_eq!(w.to_string(), "A. Thompson cannot work with D. Gee on Friday A");
        assert!(w.involves(&StaffId::from("D. Gee"), &StaffId::from("A. Thompson")));
        assert!(!w.involves(&StaffId::from("D. Gee"), &StaffId::from("K. Young")));
    }

    #[test]
    fn test_history_serializes_as_list() {
        let h = ScheduleHistory::from(vec![sample_schedule()]);
        let json = serde_json::to_value(&h).unwrap();
        assert!(json.is_array());
        let back: ScheduleHistory = serde_json::from_value(json).unwrap();
        assert_eq!(back, h);
    }
}
