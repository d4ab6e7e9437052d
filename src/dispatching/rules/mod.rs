//! Built-in priority rules.
//!
//! All rules return lower scores for candidates that should be
//! considered earlier.

use super::{PriorityContext, PriorityRule, RuleScore};
use crate::models::StaffMember;

/// Members left off the latest finalized schedule first.
///
/// Boolean membership only: being unscheduled two periods ago earns
/// nothing.
#[derive(Debug, Clone, Copy)]
pub struct UnscheduledFirst;

impl PriorityRule for UnscheduledFirst {
    fn name(&self) -> &'static str {
        "UNSCHEDULED"
    }

    fn evaluate(&self, member: &StaffMember, context: &PriorityContext) -> RuleScore {
        if context.was_unscheduled(&member.id) {
            0
        } else {
            1
        }
    }

    fn description(&self) -> &'static str {
        "Unscheduled Last Period First"
    }
}

/// Lower rank value first.
#[derive(Debug, Clone, Copy)]
pub struct RankAscending;

impl PriorityRule for RankAscending {
    fn name(&self) -> &'static str {
        "RANK"
    }

    fn evaluate(&self, member: &StaffMember, _context: &PriorityContext) -> RuleScore {
        RuleScore::from(member.rank)
    }

    fn description(&self) -> &'static str {
        "Rank Ascending"
    }
}

/// Markers before non-markers.
#[derive(Debug, Clone, Copy)]
pub struct MarkerFirst;

impl PriorityRule for MarkerFirst {
    fn name(&self) -> &'static str {
        "MARKER"
    }

    fn evaluate(&self, member: &StaffMember, _context: &PriorityContext) -> RuleScore {
        if member.is_marker {
            0
        } else {
            1
        }
    }

    fn description(&self) -> &'static str {
        "Marker First"
    }
}
