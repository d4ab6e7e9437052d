//! Weekly shift roster assignment.
//!
//! Assigns staff to recurring shifts from per-member availability, rank,
//! marker flag and pairwise conflicts. Each shift is filled greedily from a
//! priority-ordered candidate list, capped at a fixed number of distinct
//! ranks, with markers allowed to stack. Members left off the most recently
//! finalized schedule are considered first.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `StaffMember`, `StaffId`, `ShiftId`,
//!   `Schedule`, `ScheduleHistory`, `ConflictWarning`
//! - **`dispatching`**: Priority rules and the rule engine ordering candidates
//! - **`scheduler`**: `ShiftAssigner`, conflict and coverage checks, `RosterKpi`
//! - **`config`**: Shift sequence and fill policy, JSON loading
//! - **`validation`**: Advisory roster integrity checks
//! - **`store`**: Session-scoped roster, availability and history
//!
//! # Example
//!
//! ```
//! use u_roster::models::{ScheduleHistory, ShiftId, StaffMember};
//! use u_roster::scheduler::assign;
//!
//! let staff = vec![
//!     StaffMember::new("D. Garcia", 1).marker().available_for("Monday A"),
//!     StaffMember::new("E. Lopez", 1).available_for("Monday A"),
//!     StaffMember::new("O. Allen", 2).available_for("Monday A"),
//!     StaffMember::new("K. Young", 3).available_for("Monday B"),
//! ];
//! let outcome = assign(&ShiftId::weekly(), &staff, &ScheduleHistory::new());
//!
//! let monday_a = outcome.schedule.staff_for(&ShiftId::from("Monday A")).unwrap();
//! assert_eq!(monday_a.len(), 2); // E. Lopez shares rank 1 and is not a marker
//! assert_eq!(outcome.coverage_gaps.len(), 13);
//! ```
//!
//! The engine never fails and performs no user messaging; conflicts and
//! coverage gaps come back as data. Diagnostics are emitted through
//! `tracing` for callers that install a subscriber.

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;

pub use error::{RosterError, RosterResult};
