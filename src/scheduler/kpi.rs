//! Roster quality metrics (KPIs).
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Coverage rate | Shifts with a marker / all shifts |
//! | Filled shifts | Shifts with at least one member |
//! | Conflict count | Conflicting pairs placed together |
//! | Unscheduled | Roster members with no shift this run |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::AssignmentOutcome;
use crate::models::{StaffId, StaffMember};

/// Roster performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterKpi {
    /// Number of shifts in the schedule.
    pub shift_count: usize,
    /// Shifts with at least one assigned member.
    pub filled_shifts: usize,
    /// Shifts with at least one marker.
    pub covered_shifts: usize,
    /// Fraction of shifts with a marker (0.0..1.0).
    pub coverage_rate: f64,
    /// Conflicting pairs placed together.
    pub conflict_count: usize,
    /// Total staff placements.
    pub total_assignments: usize,
    /// Shifts per roster member.
    pub assignments_by_member: BTreeMap<StaffId, usize>,
    /// Roster members given no shift, in roster order.
    ///
    /// If this schedule is finalized, these members are prioritized next period.
    pub unscheduled: Vec<StaffId>,
}

impl RosterKpi {
    /// Computes KPIs from an outcome and the roster it was built from.
    pub fn calculate(outcome: &AssignmentOutcome, staff: &[StaffMember]) -> Self {
        let schedule = &outcome.schedule;
        let shift_count = schedule.shift_count();
        let filled_shifts = schedule.shifts.iter().filter(|r| !r.is_empty()).count();
        let covered_shifts = shift_count.saturating_sub(outcome.coverage_gaps.len());

        let coverage_rate = if shift_count == 0 {
            1.0
        } else {
            covered_shifts as f64 / shift_count as f64
        };

        let assignments_by_member: BTreeMap<StaffId, usize> = staff
            .iter()
            .map(|m| (m.id.clone(), outcome.shifts_for(&m.id).len()))
            .collect();

        let unscheduled = staff
            .iter()
            .filter(|m| outcome.shifts_for(&m.id).is_empty())
            .map(|m| m.id.clone())
            .collect();

        Self {
            shift_count,
            filled_shifts,
            covered_shifts,
            coverage_rate,
            conflict_count: outcome.conflicts.len(),
            total_assignments: schedule.assignment_count(),
            assignments_by_member,
            unscheduled,
        }
    }

    /// Whether the roster meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_coverage: f64, max_conflicts: usize) -> bool {
        self.coverage_rate >= min_coverage && self.conflict_count <= max_conflicts
    }
}
