//! Prioritization context for rule evaluation.

use std::collections::HashSet;

use crate::models::{ScheduleHistory, StaffId, StaffMember};

/// Run-level state passed to priority rules.
///
/// Holds the set of roster members left off the most recently finalized
/// schedule. Built once per run and shared by every shift.
#[derive(Debug, Clone, Default)]
pub struct PriorityContext {
    /// Members absent from the latest finalized schedule.
    pub unscheduled_last_time: HashSet<StaffId>,
}

impl PriorityContext {
    /// Creates a context with no fairness preference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the context from the current roster and schedule history.
    ///
    /// With no history the unscheduled set is empty. Otherwise only the
    /// latest finalized schedule is read; older entries are ignored.
    pub fn from_history(staff: &[StaffMember], history: &ScheduleHistory) -> Self {
        let Some(last) = history.latest() else {
            return Self::new();
        };

        let scheduled = last.scheduled_staff();
        let unscheduled_last_time = staff
            .iter()
            .filter(|m| !scheduled.contains(&m.id))
            .map(|m| m.id.clone())
            .collect();

        Self {
            unscheduled_last_time,
        }
    }

    /// Marks a member as unscheduled last time.
    pub fn with_unscheduled(mut self, id: impl Into<StaffId>) -> Self {
        self.unscheduled_last_time.insert(id.into());
        self
    }

    /// Whether a member was left off the latest finalized schedule.
    #[inline]
    pub fn was_unscheduled(&self, id: &StaffId) -> bool {
        self.unscheduled_last_time.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Schedule, ShiftRoster};

    fn roster() -> Vec<StaffMember> {
        vec![
            StaffMember::new("D. Garcia", 1),
            StaffMember::new("O. Allen", 2),
            StaffMember::new("K. Young", 3),
        ]
    }

    #[test]
    fn test_empty_history_has_no_preference() {
        let ctx = PriorityContext::from_history(&roster(), &ScheduleHistory::new());
        assert!(ctx.unscheduled_last_time.is_empty());
    }

    #[test]
    fn test_only_latest_schedule_counts() {
        let older = Schedule::new().with_shift(ShiftRoster::new("Monday A").with_staff("K. Young"));
        let latest =
            Schedule::new().with_shift(ShiftRoster::new("Monday A").with_staff("D. Garcia"));
        let history = ScheduleHistory::from(vec![older, latest]);

        let ctx = PriorityContext::from_history(&roster(), &history);
        assert!(!ctx.was_unscheduled(&StaffId::from("D. Garcia")));
        assert!(ctx.was_unscheduled(&StaffId::from("O. Allen")));
        assert!(ctx.was_unscheduled(&StaffId::from("K. Young")));
    }

    #[test]
    fn test_ids_not_on_roster_are_ignored() {
        let latest = Schedule::new().with_shift(ShiftRoster::new("Monday A").with_staff("Z. Gone"));
        let ctx = PriorityContext::from_history(&roster(), &ScheduleHistory::from(vec![latest]));
        assert_eq!(ctx.unscheduled_last_time.len(), 3);
        assert!(!ctx.was_unscheduled(&StaffId::from("Z. Gone")));
    }
}
