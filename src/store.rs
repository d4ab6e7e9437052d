//! Session-scoped roster state.
//!
//! [`RosterStore`] owns the roster, per-member availability, the finalized
//! schedule history and the run configuration. Callers pass it by reference
//! and decide when to load, save or finalize. A run reads immutable
//! snapshots and returns a new outcome; nothing in the store changes until
//! the caller finalizes.
//!
//! ```
//! use u_roster::models::StaffMember;
//! use u_roster::store::RosterStore;
//!
//! let mut store = RosterStore::default();
//! store.add_member(StaffMember::new("D. Garcia", 1).marker()).unwrap();
//! store.set_availability(&"D. Garcia".into(), ["Monday A", "Friday B"]).unwrap();
//!
//! let outcome = store.run();
//! assert_eq!(outcome.schedule.assignment_count(), 2);
//!
//! store.finalize(outcome.schedule);
//! assert_eq!(store.history().len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

use crate::config::RosterConfig;
use crate::error::{RosterError, RosterResult};
use crate::models::{Schedule, ScheduleHistory, ShiftId, StaffId, StaffMember};
use crate::scheduler::{AssignmentOutcome, ShiftAssigner};
use crate::validation::{validate_roster, ValidationResult};

/// Partial edit of a staff member. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New rank.
    pub rank: Option<u32>,
    /// New marker flag.
    pub is_marker: Option<bool>,
    /// Replacement conflict list.
    pub conflicts: Option<BTreeSet<StaffId>>,
}

impl MemberUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the rank.
    pub fn rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Sets the marker flag.
    pub fn marker(mut self, is_marker: bool) -> Self {
        self.is_marker = Some(is_marker);
        self
    }

    /// Replaces the conflict list.
    pub fn conflicts<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StaffId>,
    {
        self.conflicts = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the conflict list from comma-separated ids.
    ///
    /// Entries are trimmed; blanks are dropped.
    pub fn conflict_list(self, list: &str) -> Self {
        self.conflicts(parse_id_list(list))
    }

    fn apply(self, member: &mut StaffMember) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(rank) = self.rank {
            member.rank = rank;
        }
        if let Some(is_marker) = self.is_marker {
            member.is_marker = is_marker;
        }
        if let Some(conflicts) = self.conflicts {
            member.conflicts = conflicts;
        }
    }
}

/// Splits a comma-separated id list, trimming entries and dropping blanks.
pub fn parse_id_list(list: &str) -> Vec<StaffId> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(StaffId::from)
        .collect()
}

/// Roster, availability and history for one scheduling session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterStore {
    config: RosterConfig,
    staff: Vec<StaffMember>,
    history: ScheduleHistory,
}

impl RosterStore {
    /// Creates an empty store with the given configuration.
    pub fn new(config: RosterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Restores a store from its JSON snapshot.
    pub fn from_json_str(json: &str) -> RosterResult<Self> {
        let store: Self = serde_json::from_str(json)?;
        store.config.validate()?;

        let mut seen = HashSet::new();
        for member in &store.staff {
            if !seen.insert(&member.id) {
                return Err(RosterError::DuplicateStaff(member.id.clone()));
            }
        }
        Ok(store)
    }

    /// Serializes the store as a JSON snapshot.
    pub fn to_json_string(&self) -> RosterResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Run configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Roster in insertion order.
    pub fn members(&self) -> &[StaffMember] {
        &self.staff
    }

    /// Looks up a member by id.
    pub fn member(&self, id: &StaffId) -> Option<&StaffMember> {
        self.staff.iter().find(|m| &m.id == id)
    }

    /// Adds a member at the end of the roster.
    pub fn add_member(&mut self, member: StaffMember) -> RosterResult<()> {
        if self.member(&member.id).is_some() {
            return Err(RosterError::DuplicateStaff(member.id));
        }
        debug!(member = %member.id, rank = member.rank, "member added");
        self.staff.push(member);
        Ok(())
    }

    /// Edits a member's rank, marker flag, name or conflicts.
    pub fn update_member(&mut self, id: &StaffId, update: MemberUpdate) -> RosterResult<()> {
        let member = self.member_mut(id)?;
        update.apply(member);
        debug!(member = %id, "member updated");
        Ok(())
    }

    /// Removes a member and its availability.
    ///
    /// Conflict entries in other members that name it are kept; they no
    /// longer match anyone.
    pub fn remove_member(&mut self, id: &StaffId) -> RosterResult<StaffMember> {
        let pos = self
            .staff
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| RosterError::UnknownStaff(id.clone()))?;
        let removed = self.staff.remove(pos);

        let referenced_by = self
            .staff
            .iter()
            .filter(|m| m.declares_conflict(id))
            .count();
        if referenced_by > 0 {
            warn!(member = %id, referenced_by, "removed member still named in conflict lists");
        }
        debug!(member = %id, "member removed");
        Ok(removed)
    }

    /// Replaces a member's availability.
    ///
    /// Shifts outside the configured list are stored but never scheduled.
    pub fn set_availability<I, S>(&mut self, id: &StaffId, shifts: I) -> RosterResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<ShiftId>,
    {
        let availability: BTreeSet<ShiftId> = shifts.into_iter().map(Into::into).collect();
        for shift in &availability {
            if !self.config.shifts.contains(shift) {
                warn!(member = %id, %shift, "availability names a shift outside the configured list");
            }
        }
        let member = self.member_mut(id)?;
        member.availability = availability;
        debug!(member = %id, shifts = member.availability.len(), "availability set");
        Ok(())
    }

    /// Finalized schedules, oldest first.
    pub fn history(&self) -> &ScheduleHistory {
        &self.history
    }

    /// Appends a schedule to history.
    pub fn finalize(&mut self, schedule: Schedule) {
        self.history.finalize(schedule);
        debug!(finalized = self.history.len(), "schedule finalized");
    }

    /// Runs the assigner over the current roster snapshot.
    pub fn run(&self) -> AssignmentOutcome {
        ShiftAssigner::from(&self.config).assign(&self.config.shifts, &self.staff, &self.history)
    }

    /// Checks the roster against the configured shifts.
    pub fn validate(&self) -> ValidationResult {
        validate_roster(&self.staff, &self.config.shifts)
    }

    fn member_mut(&mut self, id: &StaffId) -> RosterResult<&mut StaffMember> {
        self.staff
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| RosterError::UnknownStaff(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssignmentPolicy;

    fn sample_store() -> RosterStore {
        let mut store = RosterStore::new(RosterConfig::new(["Monday A", "Monday B"]));
        store
            .add_member(StaffMember::new("D. Garcia", 1).marker())
            .unwrap();
        store.add_member(StaffMember::new("E. Lopez", 1)).unwrap();
        store.add_member(StaffMember::new("O. Allen", 2)).unwrap();
        for id in ["D. Garcia", "E. Lopez", "O. Allen"] {
            store
                .set_availability(&id.into(), ["Monday A", "Monday B"])
                .unwrap();
        }
        store
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut store = sample_store();
        let err = store.add_member(StaffMember::new("E. Lopez", 3)).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateStaff(ref id) if id.as_str() == "E. Lopez"));
        assert_eq!(store.members().len(), 3);
    }

    #[test]
    fn test_update_member() {
        let mut store = sample_store();
        let id = StaffId::from("E. Lopez");
        store
            .update_member(
                &id,
                MemberUpdate::new()
                    .rank(3)
                    .marker(true)
                    .conflict_list(" O. Allen , ,D. Garcia"),
            )
            .unwrap();

        let m = store.member(&id).unwrap();
        assert_eq!(m.rank, 3);
        assert!(m.is_marker);
        assert_eq!(m.conflicts.len(), 2);
        assert!(m.declares_conflict(&StaffId::from("O. Allen")));
        assert_eq!(m.name, "E. Lopez");
    }

    #[test]
    fn test_rename_keeps_identity() {
        let mut store = sample_store();
        let id = StaffId::from("O. Allen");
        store
            .update_member(&id, MemberUpdate::new().name("O. Allen-Reyes"))
            .unwrap();
        assert_eq!(store.member(&id).unwrap().name, "O. Allen-Reyes");
    }

    #[test]
    fn test_update_unknown() {
        let mut store = sample_store();
        let err = store
            .update_member(&StaffId::from("Z. Nobody"), MemberUpdate::new().rank(1))
            .unwrap_err();
        assert!(matches!(err, RosterError::UnknownStaff(_)));
        assert!(store
            .set_availability(&StaffId::from("Z. Nobody"), ["Monday A"])
            .is_err());
    }

    #[test]
    fn test_remove_member() {
        let mut store = sample_store();
        store
            .update_member(
                &StaffId::from("D. Garcia"),
                MemberUpdate::new().conflicts(["O. Allen"]),
            )
            .unwrap();

        let removed = store.remove_member(&StaffId::from("O. Allen")).unwrap();
        assert_eq!(removed.rank, 2);
        assert!(store.member(&StaffId::from("O. Allen")).is_none());
        assert!(store.remove_member(&StaffId::from("O. Allen")).is_err());

        // dangling conflict reference does not disturb a run
        let outcome = store.run();
        assert!(!outcome.has_conflicts());
    }

    #[test]
    fn test_run_and_finalize_rotates_fairness() {
        let mut store = sample_store();

        let first = store.run();
        assert_eq!(
            first.schedule.staff_for(&ShiftId::from("Monday A")).unwrap(),
            &[StaffId::from("D. Garcia"), StaffId::from("O. Allen")]
        );
        assert!(store.history().is_empty());

        store.finalize(first.schedule);
        let second = store.run();
        // E. Lopez was left out, so now leads rank 1
        assert_eq!(
            second.schedule.staff_for(&ShiftId::from("Monday A")).unwrap(),
            &[StaffId::from("E. Lopez"), StaffId::from("D. Garcia"), StaffId::from("O. Allen")]
        );
    }

    #[test]
    fn test_run_uses_configured_policy() {
        let config = RosterConfig::new(["Monday A"])
            .with_policy(AssignmentPolicy::default().with_rank_diversity_cap(1));
        let mut store = RosterStore::new(config);
        store
            .add_member(StaffMember::new("a", 1).available_for("Monday A"))
            .unwrap();
        store
            .add_member(StaffMember::new("b", 2).available_for("Monday A"))
            .unwrap();
        assert_eq!(store.run().schedule.assignment_count(), 1);
    }

    #[test]
    fn test_validate() {
        let mut store = sample_store();
        assert!(store.validate().is_ok());
        store
            .set_availability(&StaffId::from("E. Lopez"), ["Holiday"])
            .unwrap();
        assert!(store.validate().is_err());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = sample_store();
        let outcome = store.run();
        store.finalize(outcome.schedule);

        let json = store.to_json_string().unwrap();
        let restored = RosterStore::from_json_str(&json).unwrap();
        assert_eq!(restored, store);
    }

    #[test]
    fn test_snapshot_duplicate_staff_rejected() {
        let json = r#"{
            "config": { "shifts": ["Monday A"] },
            "staff": [
                { "id": "a", "name": "a", "rank": 1, "is_marker": true, "availability": ["Monday A"] },
                { "id": "a", "name": "a", "rank": 2, "availability": ["Monday A"] }
            ]
        }"#;
        let err = RosterStore::from_json_str(json).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateStaff(ref id) if id.as_str() == "a"));
    }

    #[test]
    fn test_parse_id_list() {
        let ids = parse_id_list("A. Reed, ,O. Allen,");
        assert_eq!(ids, vec![StaffId::from("A. Reed"), StaffId::from("O. Allen")]);
        assert!(parse_id_list("").is_empty());
    }
}
