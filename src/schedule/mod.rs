pub mod types;
pub mod slot_utils;
pub mod aggregate;

pub use types::{PersonSchedule, Shift, ShiftKind, SignupCell, Slot};
pub use slot_utils::{hour_24_to_12, parse_shifts, shifts_to_text};
pub use aggregate::{aggregate_signups, ScheduleBook};
