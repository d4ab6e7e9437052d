//! Roster domain models.
//!
//! Provides the data types for describing a staffing problem (who can work
//! which shift, who must not work together) and its solution.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `StaffMember` | Person with rank, marker flag, availability, conflicts |
//! | `ShiftId` | Named recurring slot ("Monday A") |
//! | `Schedule` | Shift → ordered staff list for one period |
//! | `ScheduleHistory` | Finalized schedules, oldest first |

mod schedule;
mod shift;
mod staff;

pub use schedule::{ConflictWarning, Schedule, ScheduleHistory, ShiftRoster};
pub use shift::{ShiftId, DAY_SLOTS, WEEKDAYS};
pub use staff::{StaffId, StaffMember};
