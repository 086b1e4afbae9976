use crate::error::ShiftsResult;
use super::types::Shift;

/// Converts a 24-hour clock hour to its 12-hour display value (0 and 12 both show as 12)
pub fn hour_24_to_12(hour_24: u32) -> u32 {
    (hour_24 % 12 + 11) % 12 + 1
}

/// Formats an hour-long slot label such as "1:00 - 2:00"
pub fn hour_slot_label(hour_24: u32) -> String {
    format!("{}:00 - {}:00", hour_24_to_12(hour_24), hour_24_to_12(hour_24 % 12 + 1))
}

/// Renders a shift list as sorted "<date> from <time>" lines joined by newlines
pub fn shifts_to_text(shifts: &[Shift]) -> String {
    let mut lines: Vec<String> = shifts.iter().map(|s| s.to_string()).collect();
    lines.sort();
    lines.join("\n")
}

/// Parses a newline-separated shift cell back into (date, time) pairs
///
/// Blank lines and trailing carriage returns (spreadsheet exports) are ignored.
pub fn parse_shifts(text: &str) -> ShiftsResult<Vec<Shift>> {
    text.split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.parse())
        .collect()
}
