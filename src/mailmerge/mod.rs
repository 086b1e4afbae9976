pub mod contact;
pub mod merge;
pub mod export;

use std::path::Path;

pub use contact::{load_contacts, read_contacts, ContactList, ContactRecord, STANDARD_HEADERS};
pub use export::{save_contacts, write_contacts};
pub use merge::{merge_schedules, MergeSummary};

use crate::error::ShiftsResult;
use crate::layout::GridLayout;
use crate::parser::load_grid_book;

/// Scans the grid, merges it into the existing mail-merge file and writes the result
pub fn update_contacts(
    grid_path: &Path,
    existing_path: &Path,
    output_path: &Path,
    layout: &GridLayout,
) -> ShiftsResult<MergeSummary> {
    let book = load_grid_book(grid_path, layout)?;
    let unnamed_signups = book.skipped();
    let schedules = book.into_schedules();
    let mut contacts = load_contacts(existing_path)?;
    let summary = MergeSummary {
        unnamed_signups,
        ..merge_schedules(&mut contacts, &schedules)
    };
    save_contacts(output_path, &contacts)?;
    Ok(summary)
}
