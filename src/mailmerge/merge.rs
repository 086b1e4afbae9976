use tracing::info;

use super::contact::{ContactList, ContactRecord};
use crate::schedule::PersonSchedule;

/// How a merge changed the contact list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Existing contacts whose shifts were replaced
    pub updated: usize,
    /// Volunteers appended as new contacts
    pub added: usize,
    /// Existing contacts absent from the new scan
    pub untouched: usize,
    /// Grid signups left out because no name could be read from the cell
    pub unnamed_signups: usize,
}

/// Folds a fresh schedule into an existing contact list.
///
/// Matching is by exact full-name equality. A matched contact gets both shift
/// lists replaced and keeps everything else (phone, extra columns). Unmatched
/// volunteers are appended with empty extra columns.
pub fn merge_schedules(contacts: &mut ContactList, schedules: &[PersonSchedule]) -> MergeSummary {
    let existing = contacts.len();
    let mut summary = MergeSummary::default();

    for person in schedules {
        match contacts.get_mut(&person.name) {
            Some(record) => {
                record.walkthrough_shifts = person.walkthrough_shifts.clone();
                record.phonebank_shifts = person.phonebank_shifts.clone();
                summary.updated += 1;
            }
            None => {
                contacts.insert(ContactRecord::from_schedule(person));
                summary.added += 1;
            }
        }
    }

    summary.untouched = existing.saturating_sub(summary.updated);
    info!(
        updated = summary.updated,
        added = summary.added,
        untouched = summary.untouched,
        "merged schedule into contacts"
    );
    summary
}
