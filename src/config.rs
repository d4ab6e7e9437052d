//! Run configuration: shift sequence and assignment policy.
//!
//! The rank-diversity cap and the marker stacking exception are policy
//! values, not constants of the fill loop. Configuration can be built in
//! code or parsed from JSON; missing fields take the weekly defaults.
//!
//! ```
//! use u_roster::config::RosterConfig;
//!
//! let config = RosterConfig::from_json_str(r#"{ "policy": { "rank_diversity_cap": 2 } }"#).unwrap();
//! assert_eq!(config.shifts.len(), 14);
//! assert_eq!(config.policy.rank_diversity_cap, 2);
//! assert!(config.policy.marker_stacking);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{RosterError, RosterResult};
use crate::models::ShiftId;

/// Distinct ranks after which a shift stops filling.
pub const DEFAULT_RANK_DIVERSITY_CAP: usize = 3;

/// Rules governing the per-shift greedy fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentPolicy {
    /// Stop filling a shift once this many distinct ranks are represented.
    pub rank_diversity_cap: usize,
    /// Admit markers even when their rank is already represented.
    pub marker_stacking: bool,
}

impl Default for AssignmentPolicy {
    fn default() -> Self {
        Self {
            rank_diversity_cap: DEFAULT_RANK_DIVERSITY_CAP,
            marker_stacking: true,
        }
    }
}

impl AssignmentPolicy {
    /// Sets the rank-diversity cap.
    pub fn with_rank_diversity_cap(mut self, cap: usize) -> Self {
        self.rank_diversity_cap = cap;
        self
    }

    /// Enables or disables marker stacking.
    pub fn with_marker_stacking(mut self, enabled: bool) -> Self {
        self.marker_stacking = enabled;
        self
    }

    /// Checks that the policy can fill a shift.
    pub fn validate(&self) -> RosterResult<()> {
        if self.rank_diversity_cap == 0 {
            return Err(RosterError::InvalidPolicy(
                "rank_diversity_cap must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Shift sequence plus policy for a scheduling period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Shifts in period order.
    pub shifts: Vec<ShiftId>,
    /// Fill policy.
    pub policy: AssignmentPolicy,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            shifts: ShiftId::weekly(),
            policy: AssignmentPolicy::default(),
        }
    }
}

impl RosterConfig {
    /// Creates a config for the given shift sequence with the default policy.
    pub fn new<I, S>(shifts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ShiftId>,
    {
        Self {
            shifts: shifts.into_iter().map(Into::into).collect(),
            policy: AssignmentPolicy::default(),
        }
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: AssignmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> RosterResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty JSON.
    pub fn to_json_string(&self) -> RosterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the policy and rejects duplicate shift identifiers.
    pub fn validate(&self) -> RosterResult<()> {
        self.policy.validate()?;

        let mut seen = HashSet::new();
        for shift in &self.shifts {
            if !seen.insert(shift) {
                return Err(RosterError::DuplicateShift(shift.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RosterConfig::default();
        assert_eq!(config.shifts, ShiftId::weekly());
        assert_eq!(config.policy.rank_diversity_cap, 3);
        assert!(config.policy.marker_stacking);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_custom_shifts() {
        let config = RosterConfig::from_json_str(
            r#"{ "shifts": ["Night 1", "Night 2"], "policy": { "marker_stacking": false } }"#,
        )
        .unwrap();
        assert_eq!(config.shifts.len(), 2);
        assert_eq!(config.shifts[1].as_str(), "Night 2");
        assert_eq!(config.policy.rank_diversity_cap, 3);
        assert!(!config.policy.marker_stacking);
    }

    #[test]
    fn test_parse_empty_object_is_weekly() {
        let config = RosterConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_reject_zero_cap() {
        let err = RosterConfig::from_json_str(r#"{ "policy": { "rank_diversity_cap": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidPolicy(_)));
    }

    #[test]
    fn test_reject_duplicate_shift() {
        let err = RosterConfig::from_json_str(r#"{ "shifts": ["Monday A", "Monday A"] }"#)
            .unwrap_err();
        assert!(matches!(err, RosterError::DuplicateShift(ref s) if s.as_str() == "Monday A"));
    }

    #[test]
    fn test_reject_malformed_json() {
        let err = RosterConfig::from_json_str(r#"{ "shifts": 5 }"#).unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = RosterConfig::new(["Day", "Night"])
            .with_policy(AssignmentPolicy::default().with_rank_diversity_cap(2));
        let json = config.to_json_string().unwrap();
        assert_eq!(RosterConfig::from_json_str(&json).unwrap(), config);
    }
}
