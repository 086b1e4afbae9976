use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::ShiftsResult;
use crate::extract::extract_cell;
use crate::layout::GridLayout;
use crate::schedule::{PersonSchedule, ScheduleBook, SignupCell};

/// Reads a sign-up grid from any CSV source. The grid has no header row;
/// rows may be ragged.
pub fn read_grid<R: Read>(reader: R) -> ShiftsResult<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.records() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Loads a sign-up grid from a CSV file
pub fn load_grid<P: AsRef<Path>>(csv_path: P) -> ShiftsResult<Vec<StringRecord>> {
    let file = std::fs::File::open(csv_path)?;
    read_grid(file)
}

/// Walks the grid and emits a signup for every filled cell inside a shift band
pub fn scan_grid(rows: &[StringRecord], layout: &GridLayout) -> ShiftsResult<Vec<SignupCell>> {
    let mut signups = Vec::new();

    for (row_number, row) in rows.iter().enumerate().skip(layout.header_rows()) {
        for column in layout.valid_columns() {
            // Short rows simply have nothing in the trailing columns
            let content = row.get(column).unwrap_or("");
            if content.chars().count() < layout.min_cell_chars {
                continue;
            }

            let Some(date) = layout.column_to_date(column) else {
                continue;
            };
            // Header, debrief and other non-shift rows produce nothing
            let Some(slot) = layout.row_to_slot(row_number)? else {
                continue;
            };

            let contents = extract_cell(content);
            let signup = SignupCell {
                content: content.to_string(),
                row: row_number,
                column,
                date,
                time: slot.time,
                shift_kind: slot.kind,
                name: contents.name,
                phone: contents.phone,
            };
            debug!(
                row = signup.row,
                column = signup.column,
                kind = %signup.shift_kind,
                name = ?signup.name,
                "signup found"
            );
            signups.push(signup);
        }
    }

    info!(signups = signups.len(), rows = rows.len(), "grid scanned");
    Ok(signups)
}

/// Scans a grid file and returns its signups
pub fn scan_csv<P: AsRef<Path>>(csv_path: P, layout: &GridLayout) -> ShiftsResult<Vec<SignupCell>> {
    let rows = load_grid(csv_path)?;
    scan_grid(&rows, layout)
}

/// Scans a grid file into a schedule book, which also counts signups it could not file
pub fn load_grid_book<P: AsRef<Path>>(csv_path: P, layout: &GridLayout) -> ShiftsResult<ScheduleBook> {
    let signups = scan_csv(csv_path, layout)?;
    let book = ScheduleBook::from_signups(&signups);
    if book.skipped() > 0 {
        info!(skipped = book.skipped(), "signups without a name left out of schedules");
    }
    Ok(book)
}

/// Scans a grid file and aggregates it into per-volunteer schedules, ordered by name
pub fn load_grid_schedule<P: AsRef<Path>>(
    csv_path: P,
    layout: &GridLayout,
) -> ShiftsResult<Vec<PersonSchedule>> {
    let mut people = load_grid_book(csv_path, layout)?.into_schedules();
    people.sort();
    Ok(people)
}
