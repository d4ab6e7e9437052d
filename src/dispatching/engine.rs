//! Rule engine for multi-criteria candidate ordering.
//!
//! Rules are applied in sequence; a later rule is consulted only when all
//! earlier rules tie.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, PriorityContext, PriorityRule, RuleScore};
use crate::models::StaffMember;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the original roster order (stable sort).
    #[default]
    RosterOrder,
    /// Deterministic by staff ID (lexicographic).
    ById,
}

/// A composable rule engine for candidate prioritization.
///
/// # Example
/// ```
/// use u_roster::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::UnscheduledFirst)
///     .with_rule(rules::RankAscending)
///     .with_rule(rules::MarkerFirst);
/// assert_eq!(engine.rule_names(), vec!["UNSCHEDULED", "RANK", "MARKER"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn PriorityRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::RosterOrder,
        }
    }

    /// The roster chain: unscheduled-last-time, then rank, then marker.
    pub fn roster_default() -> Self {
        Self::new()
            .with_rule(rules::UnscheduledFirst)
            .with_rule(rules::RankAscending)
            .with_rule(rules::MarkerFirst)
    }

    /// Appends a rule; earlier rules take precedence.
    pub fn with_rule<R: PriorityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in precedence order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts staff by priority (highest priority first).
    ///
    /// Returns indices into the original slice.
    pub fn sort_indices(&self, staff: &[StaffMember], context: &PriorityContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..staff.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&staff[a], &staff[b], context));
        indices
    }

    /// Sorts borrowed candidates in place (highest priority first).
    ///
    /// Stable: candidates tied on every rule keep their relative order.
    pub fn sort_candidates(&self, candidates: &mut [&StaffMember], context: &PriorityContext) {
        candidates.sort_by(|a, b| self.compare(a, b, context));
    }

    /// Evaluates a single member and returns scores from each rule.
    pub fn evaluate(&self, member: &StaffMember, context: &PriorityContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(member, context))
            .collect()
    }

    fn compare(&self, a: &StaffMember, b: &StaffMember, context: &PriorityContext) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        match self.tie_breaker {
            TieBreaker::RosterOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::roster_default()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
