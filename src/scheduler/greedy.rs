//! Greedy rank-diverse shift assigner.
//!
//! # Algorithm
//!
//! 1. Derive the set of roster members left off the latest finalized schedule.
//! 2. For each shift, in order:
//!    - keep members available for the shift
//!    - stable-sort them with the rule engine
//!    - single pass: admit a member whose rank is new to the shift, or any
//!      marker when stacking is enabled; stop once the rank cap is reached
//!    - report conflicting pairs among those admitted
//! 3. Report shifts with no marker.
//!
//! Skipped candidates are never revisited. There is no backtracking and no
//! randomness, so identical inputs give identical outcomes.
//!
//! # Complexity
//! O(s * n log n) where s=shifts, n=roster size.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::checks::shift_conflicts;
use crate::config::{AssignmentPolicy, RosterConfig};
use crate::dispatching::{PriorityContext, RuleEngine};
use crate::models::{
    ConflictWarning, Schedule, ScheduleHistory, ShiftId, ShiftRoster, StaffId, StaffMember,
};

/// Input container for one assignment run.
#[derive(Debug, Clone, Default)]
pub struct AssignmentRequest {
    /// Shifts in period order.
    pub shifts: Vec<ShiftId>,
    /// Roster snapshot; order breaks priority ties.
    pub staff: Vec<StaffMember>,
    /// Finalized schedules, oldest first.
    pub history: ScheduleHistory,
}

impl AssignmentRequest {
    /// Creates a request with no history.
    pub fn new(shifts: Vec<ShiftId>, staff: Vec<StaffMember>) -> Self {
        Self {
            shifts,
            staff,
            history: ScheduleHistory::new(),
        }
    }

    /// Sets the schedule history.
    pub fn with_history(mut self, history: ScheduleHistory) -> Self {
        self.history = history;
        self
    }
}

/// Result of an assignment run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentOutcome {
    /// Staff per shift, in shift order.
    pub schedule: Schedule,
    /// Conflicting pairs placed together, in shift order.
    pub conflicts: Vec<ConflictWarning>,
    /// Shifts with no marker, in shift order.
    pub coverage_gaps: Vec<ShiftId>,
    /// Shifts given to each roster member in this run, in shift order.
    ///
    /// Every roster member has an entry, empty when unassigned.
    pub member_shifts: BTreeMap<StaffId, Vec<ShiftId>>,
}

impl AssignmentOutcome {
    /// Shifts given to a member in this run.
    pub fn shifts_for(&self, id: &StaffId) -> &[ShiftId] {
        self.member_shifts
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether any conflicting pair was placed together.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Whether every shift has at least one marker.
    pub fn is_fully_covered(&self) -> bool {
        self.coverage_gaps.is_empty()
    }
}

/// Greedy rank-diverse shift assigner.
///
/// # Example
///
/// ```
/// use u_roster::models::{ScheduleHistory, ShiftId, StaffMember};
/// use u_roster::scheduler::ShiftAssigner;
///
/// let shifts = vec![ShiftId::from("Monday A")];
/// let staff = vec![
///     StaffMember::new("D. Garcia", 1).marker().available_for("Monday A"),
///     StaffMember::new("O. Allen", 2).available_for("Monday A"),
/// ];
///
/// let outcome = ShiftAssigner::new().assign(&shifts, &staff, &ScheduleHistory::new());
/// assert_eq!(outcome.schedule.assignment_count(), 2);
/// assert!(outcome.is_fully_covered());
/// ```
#[derive(Debug, Clone)]
pub struct ShiftAssigner {
    policy: AssignmentPolicy,
    rule_engine: RuleEngine,
}

impl ShiftAssigner {
    /// Creates an assigner with the default policy and rule chain.
    pub fn new() -> Self {
        Self {
            policy: AssignmentPolicy::default(),
            rule_engine: RuleEngine::roster_default(),
        }
    }

    /// Sets the fill policy.
    pub fn with_policy(mut self, policy: AssignmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the candidate ordering rules.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// The fill policy in effect.
    pub fn policy(&self) -> &AssignmentPolicy {
        &self.policy
    }

    /// Assigns staff to shifts.
    ///
    /// Never fails: an empty roster or a shift nobody can work yields empty
    /// shift lists, reported as coverage gaps. Inputs are not modified.
    /// A shift id repeated in `shifts` is filled once, at its first position.
    pub fn assign(
        &self,
        shifts: &[ShiftId],
        staff: &[StaffMember],
        history: &ScheduleHistory,
    ) -> AssignmentOutcome {
        debug!(
            shifts = shifts.len(),
            staff = staff.len(),
            history = history.len(),
            "assigning shifts"
        );

        let context = PriorityContext::from_history(staff, history);
        if !context.unscheduled_last_time.is_empty() {
            debug!(
                count = context.unscheduled_last_time.len(),
                "prioritizing members unscheduled last period"
            );
        }

        let mut schedule = Schedule::new();
        let mut conflicts = Vec::new();
        let mut member_shifts: BTreeMap<StaffId, Vec<ShiftId>> =
            staff.iter().map(|m| (m.id.clone(), Vec::new())).collect();
        let mut covered: Vec<bool> = Vec::with_capacity(shifts.len());
        let mut seen: HashSet<&ShiftId> = HashSet::new();

        for shift in shifts {
            if !seen.insert(shift) {
                warn!(%shift, "duplicate shift id skipped");
                continue;
            }

            let assigned = self.fill_shift(shift, staff, &context);

            let mut roster = ShiftRoster::new(shift.clone());
            for member in &assigned {
                roster.staff.push(member.id.clone());
                if let Some(given) = member_shifts.get_mut(&member.id) {
                    given.push(shift.clone());
                }
            }

            let found = shift_conflicts(shift, &assigned);
            for warning in &found {
                debug!(%warning, "conflicting pair assigned");
            }
            conflicts.extend(found);
            covered.push(assigned.iter().any(|m| m.is_marker));
            schedule.add_shift(roster);
        }

        let coverage_gaps: Vec<ShiftId> = schedule
            .shift_ids()
            .zip(&covered)
            .filter(|(_, has_marker)| !**has_marker)
            .map(|(shift, _)| shift.clone())
            .collect();

        debug!(
            assignments = schedule.assignment_count(),
            conflicts = conflicts.len(),
            coverage_gaps = coverage_gaps.len(),
            "assignment complete"
        );

        AssignmentOutcome {
            schedule,
            conflicts,
            coverage_gaps,
            member_shifts,
        }
    }

    /// Assigns from a request.
    pub fn assign_request(&self, request: &AssignmentRequest) -> AssignmentOutcome {
        self.assign(&request.shifts, &request.staff, &request.history)
    }

    /// Fills one shift; returns admitted members in admission order.
    fn fill_shift<'a>(
        &self,
        shift: &ShiftId,
        staff: &'a [StaffMember],
        context: &PriorityContext,
    ) -> Vec<&'a StaffMember> {
        let mut candidates: Vec<&StaffMember> =
            staff.iter().filter(|m| m.is_available(shift)).collect();
        self.rule_engine.sort_candidates(&mut candidates, context);

        let mut ranks: BTreeSet<u32> = BTreeSet::new();
        let mut admitted: HashSet<&StaffId> = HashSet::new();
        let mut assigned = Vec::new();

        for member in candidates {
            if admitted.contains(&member.id) {
                trace!(%shift, member = %member.id, "skipped, id already on shift");
                continue;
            }

            let new_rank = !ranks.contains(&member.rank);
            let stacked_marker = self.policy.marker_stacking && member.is_marker;

            if new_rank || stacked_marker {
                trace!(%shift, member = %member.id, rank = member.rank, new_rank, "admitted");
                ranks.insert(member.rank);
                admitted.insert(&member.id);
                assigned.push(member);
            } else {
                trace!(%shift, member = %member.id, rank = member.rank, "skipped, rank already represented");
            }

            if ranks.len() >= self.policy.rank_diversity_cap {
                break;
            }
        }

        debug!(
            %shift,
            assigned = assigned.len(),
            ranks = ranks.len(),
            "shift filled"
        );
        assigned
    }
}

impl Default for ShiftAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&RosterConfig> for ShiftAssigner {
    fn from(config: &RosterConfig) -> Self {
        Self::new().with_policy(config.policy.clone())
    }
}

/// Assigns staff to shifts with the default policy.
///
/// Shorthand for `ShiftAssigner::new().assign(shifts, staff, history)`.
pub fn assign(
    shifts: &[ShiftId],
    staff: &[StaffMember],
    history: &ScheduleHistory,
) -> AssignmentOutcome {
    ShiftAssigner::new().assign(shifts, staff, history)
}
