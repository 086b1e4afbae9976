//! Volunteer sign-up grid scanner.
//!
//! Reads a sign-up spreadsheet exported as CSV (days across, time slots down,
//! free-text names in the cells), turns every filled cell into a signup,
//! gathers each volunteer's shifts and merges them into a mail-merge contact
//! list without disturbing the list's other columns.
//!
//! ```no_run
//! use shift_signups::layout::GridLayout;
//! use shift_signups::parser::load_grid_schedule;
//!
//! let people = load_grid_schedule("signups.csv", &GridLayout::default())?;
//! println!("{} volunteers", people.len());
//! # Ok::<(), shift_signups::error::ShiftsError>(())
//! ```

pub mod display;
pub mod error;
pub mod extract;
pub mod layout;
pub mod mailmerge;
pub mod parser;
pub mod schedule;

pub use error::{ShiftsError, ShiftsResult};
pub use layout::GridLayout;
pub use schedule::{PersonSchedule, Shift, ShiftKind, SignupCell};
