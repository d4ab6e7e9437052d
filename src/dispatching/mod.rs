//! Priority rules and rule engine for candidate ordering.
//!
//! Before a shift is filled, its available candidates are ordered by a
//! sequence of rules. The default chain is:
//!
//! 1. members left off the latest finalized schedule first
//! 2. lower rank first
//! 3. markers first
//!
//! Remaining ties keep roster order (the sort is stable).
//!
//! # Usage
//!
//! ```
//! use u_roster::dispatching::{PriorityContext, RuleEngine};
//! use u_roster::dispatching::rules;
//! use u_roster::models::StaffMember;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::RankAscending)
//!     .with_rule(rules::MarkerFirst);
//!
//! let staff = vec![
//!     StaffMember::new("K. Young", 3),
//!     StaffMember::new("D. Garcia", 1),
//! ];
//! let order = engine.sort_indices(&staff, &PriorityContext::new());
//! assert_eq!(order, vec![1, 0]);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::PriorityContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::StaffMember;
use std::fmt::Debug;

/// Score returned by a priority rule.
///
/// Lower scores = higher priority (considered first).
pub type RuleScore = i64;

/// A rule that scores a candidate for placement.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait PriorityRule: Send + Sync + Debug {
    /// Rule name (e.g., "RANK").
    fn name(&self) -> &'static str;

    /// Scores a candidate given the run context.
    fn evaluate(&self, member: &StaffMember, context: &PriorityContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
