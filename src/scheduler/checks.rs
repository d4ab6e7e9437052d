//! Post-fill checks: pairwise conflicts and marker coverage.
//!
//! Both checks report; neither alters an assignment.

use std::collections::HashMap;

use crate::models::{ConflictWarning, Schedule, ShiftId, StaffId, StaffMember};

/// Conflicting pairs among the members placed on one shift.
///
/// Every unordered pair is checked once; a pair is flagged if either side
/// lists the other. Quadratic in shift size, which the fill policy keeps
/// small.
pub fn shift_conflicts(shift: &ShiftId, assigned: &[&StaffMember]) -> Vec<ConflictWarning> {
    let mut warnings = Vec::new();
    for (i, first) in assigned.iter().enumerate() {
        for second in &assigned[i + 1..] {
            if first.conflicts_with(second) {
                warnings.push(ConflictWarning::new(
                    shift.clone(),
                    first.id.clone(),
                    second.id.clone(),
                ));
            }
        }
    }
    warnings
}

/// Conflicts across an entire schedule, in shift order.
///
/// Ids in the schedule that are not on the roster are ignored.
pub fn find_conflicts(schedule: &Schedule, staff: &[StaffMember]) -> Vec<ConflictWarning> {
    let by_id = index_by_id(staff);
    schedule
        .shifts
        .iter()
        .flat_map(|roster| {
            let assigned: Vec<&StaffMember> = roster
                .staff
                .iter()
                .filter_map(|id| by_id.get(id).copied())
                .collect();
            shift_conflicts(&roster.shift, &assigned)
        })
        .collect()
}

/// Shifts with no marker among their assigned members, in shift order.
///
/// Empty shifts are gaps. Ids not on the roster count as non-markers.
pub fn find_coverage_gaps(schedule: &Schedule, staff: &[StaffMember]) -> Vec<ShiftId> {
    let by_id = index_by_id(staff);
    schedule
        .shifts
        .iter()
        .filter(|roster| {
            !roster
                .staff
                .iter()
                .any(|id| by_id.get(id).is_some_and(|m| m.is_marker))
        })
        .map(|roster| roster.shift.clone())
        .collect()
}

fn index_by_id(staff: &[StaffMember]) -> HashMap<&StaffId, &StaffMember> {
    let mut by_id = HashMap::with_capacity(staff.len());
    for member in staff {
        // first record wins for duplicated ids, matching roster order
        by_id.entry(&member.id).or_insert(member);
    }
    by_id
}
