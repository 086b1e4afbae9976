use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::{ShiftsError, ShiftsResult};
use crate::schedule::{shifts_to_text, PersonSchedule};

/// Column headers for an exported volunteer schedule
pub const SCHEDULE_HEADERS: [&str; 6] = [
    "Full name",
    "First name",
    "Last name",
    "Phone",
    "Walkthrough shifts",
    "Phonebank shifts",
];

/// Formats a volunteer with their phone, if one was found
pub fn format_volunteer(person: &PersonSchedule) -> String {
    match &person.phone {
        Some(phone) => format!("{} ({})", person.name, phone),
        None => person.name.clone(),
    }
}

pub fn schedule_row(person: &PersonSchedule) -> Vec<String> {
    vec![
        person.name.clone(),
        person.first_name(),
        person.last_name(),
        person.phone.clone().unwrap_or_default(),
        shifts_to_text(&person.walkthrough_shifts),
        shifts_to_text(&person.phonebank_shifts),
    ]
}

/// Writes schedules as CSV, one row per volunteer
pub fn write_schedules<W: Write>(writer: W, people: &[PersonSchedule]) -> ShiftsResult<()> {
    if people.is_empty() {
        return Err(ShiftsError::EmptyOutput);
    }
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(SCHEDULE_HEADERS)?;
    for person in people {
        wtr.write_record(schedule_row(person))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_schedules_to_file(filename: &Path, people: &[PersonSchedule]) -> ShiftsResult<()> {
    if people.is_empty() {
        return Err(ShiftsError::EmptyOutput);
    }
    let file = File::create(filename)?;
    write_schedules(file, people)
}

/// Prints every volunteer and their shifts in a readable format.
/// `unnamed` is the number of signups left out for lacking a name.
pub fn print_schedules(people: &[PersonSchedule], unnamed: usize) {
    let shift_total: usize = people.iter().map(|p| p.shift_count()).sum();
    println!("=== Volunteer Schedule ===");
    println!("Volunteers: {}  Shifts: {}", people.len(), shift_total);
    if unnamed > 0 {
        println!("⚠️  Signups without a name (not scheduled): {}", unnamed);
    }

    for person in people {
        println!("\n{}", format_volunteer(person));
        if !person.walkthrough_shifts.is_empty() {
            println!("  Walkthrough:");
            for line in shifts_to_text(&person.walkthrough_shifts).lines() {
                println!("    {}", line);
            }
        }
        if !person.phonebank_shifts.is_empty() {
            println!("  Phonebank:");
            for line in shifts_to_text(&person.phonebank_shifts).lines() {
                println!("    {}", line);
            }
        }
    }
}
