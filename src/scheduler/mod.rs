//! Greedy shift assignment, post-fill checks, and KPI evaluation.
//!
//! # Algorithm
//!
//! `ShiftAssigner` fills each shift in a single greedy pass over
//! priority-ordered candidates, capping the number of distinct ranks and
//! letting markers stack. It is not optimal; it is fast and deterministic.
//!
//! # Checks
//!
//! Conflicting pairs and shifts lacking a marker are reported alongside the
//! schedule. Nothing is auto-corrected.
//!
//! # KPI
//!
//! `RosterKpi` summarizes coverage, conflicts, and per-member load.

mod checks;
mod greedy;
mod kpi;

pub use checks::{find_conflicts, find_coverage_gaps, shift_conflicts};
pub use greedy::{assign, AssignmentOutcome, AssignmentRequest, ShiftAssigner};
pub use kpi::RosterKpi;
