use std::collections::BTreeMap;

use tracing::warn;

use super::types::{PersonSchedule, SignupCell};

/// Accumulates signups into one schedule per volunteer name
#[derive(Debug, Default, Clone)]
pub struct ScheduleBook {
    people: BTreeMap<String, PersonSchedule>,
    skipped: usize,
}

impl ScheduleBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one signup. The first signup seen for a name fixes that person's phone.
    /// Returns false when the cell has no name to file it under.
    pub fn record(&mut self, cell: &SignupCell) -> bool {
        let Some(name) = cell.name.as_deref() else {
            warn!(
                row = cell.row,
                column = cell.column,
                content = %cell.content,
                "signup has no recognisable name, skipping"
            );
            self.skipped += 1;
            return false;
        };

        let person = self
            .people
            .entry(name.to_string())
            .or_insert_with(|| PersonSchedule::new(name, cell.phone.clone()));
        person.shifts_mut(cell.shift_kind).push(cell.shift());
        true
    }

    /// Builds a book from a whole scan
    pub fn from_signups(signups: &[SignupCell]) -> Self {
        let mut book = Self::new();
        for cell in signups {
            book.record(cell);
        }
        book
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Number of signups dropped for lacking a name
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Consumes the book, yielding schedules sorted by name
    pub fn into_schedules(self) -> Vec<PersonSchedule> {
        // BTreeMap iteration is already name order
        self.people.into_values().collect()
    }
}

/// Groups signups by volunteer, returning schedules ordered by name
pub fn aggregate_signups(signups: &[SignupCell]) -> Vec<PersonSchedule> {
    ScheduleBook::from_signups(signups).into_schedules()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::slot_utils::shifts_to_text;
    use crate::schedule::types::{Shift, ShiftKind};
    use pretty_assertions::assert_eq;

    fn signup(name: Option<&str>, phone: Option<&str>, date: &str, time: &str, kind: ShiftKind) -> SignupCell {
        SignupCell {
            content: format!("{} {}", name.unwrap_or("555"), phone.unwrap_or("")),
            row: 7,
            column: 1,
            date: date.to_string(),
            time: time.to_string(),
            shift_kind: kind,
            name: name.map(str::to_string),
            phone: phone.map(str::to_string),
        }
    }

    fn sample_signups() -> Vec<SignupCell> {
        vec![
            signup(Some("Zoe Park"), None, "11/09", "5:00 - 6:00", ShiftKind::Phonebank),
            signup(Some("Adam West"), Some("5551112222"), "11/08", "11:00 - 12:00", ShiftKind::Walkthrough),
            signup(Some("Adam West"), Some("5559999999"), "11/08", "6:00 - 7:00", ShiftKind::Phonebank),
            signup(Some("Adam West"), None, "11/08", "10:00 - 11:00", ShiftKind::Walkthrough),
        ]
    }

    #[test]
    fn test_aggregate_groups_by_name_in_order() {
        let people = aggregate_signups(&sample_signups());
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Adam West");
        assert_eq!(people[1].name, "Zoe Park");

        let adam = &people[0];
        // Phone comes from the first signup seen
        assert_eq!(adam.phone.as_deref(), Some("5551112222"));
        assert_eq!(
            adam.walkthrough_shifts,
            vec![
                Shift::new("11/08", "11:00 - 12:00"),
                Shift::new("11/08", "10:00 - 11:00"),
            ]
        );
        assert_eq!(adam.phonebank_shifts, vec![Shift::new("11/08", "6:00 - 7:00")]);
        assert_eq!(
            shifts_to_text(&adam.walkthrough_shifts),
            "11/08 from 10:00 - 11:00\n11/08 from 11:00 - 12:00"
        );
    }

    #[test]
    fn test_aggregate_is_repeatable() {
        let signups = sample_signups();
        let first = aggregate_signups(&signups);
        let second = aggregate_signups(&signups);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unnamed_signups_are_skipped() {
        let mut book = ScheduleBook::new();
        assert!(!book.record(&signup(None, Some("5551234567"), "11/08", "10:00 - 11:00", ShiftKind::Walkthrough)));
        assert!(book.record(&signup(Some("Jane Doe"), None, "11/08", "10:00 - 11:00", ShiftKind::Walkthrough)));
        assert_eq!(book.skipped(), 1);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_from_signups_counts_skipped() {
        let mut signups = sample_signups();
        signups.push(signup(None, Some("5551234567"), "11/08", "10:00 - 11:00", ShiftKind::Walkthrough));
        signups.push(signup(None, None, "11/09", "5:00 - 6:00", ShiftKind::Phonebank));

        let book = ScheduleBook::from_signups(&signups);
        assert_eq!(book.skipped(), 2);
        assert_eq!(book.len(), 2);
        assert_eq!(book.into_schedules(), aggregate_signups(&sample_signups()));
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_signups(&[]).is_empty());
        assert!(ScheduleBook::new().is_empty());
    }
}
