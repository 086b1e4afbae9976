use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::warn;

use crate::error::ShiftsResult;
use crate::schedule::{parse_shifts, shifts_to_text, PersonSchedule, Shift};

/// The six columns every mail-merge file starts with
pub const STANDARD_HEADERS: [&str; 6] = [
    "Full name",
    "First name",
    "Last name",
    "cell",
    "Walkthrough shifts",
    "Phonebank shifts",
];

/// One row of the mail-merge contact list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub walkthrough_shifts: Vec<Shift>,
    pub phonebank_shifts: Vec<Shift>,
    /// Columns after the standard six, as (header, value) in file order
    pub extra: Vec<(String, String)>,
}

impl ContactRecord {
    /// Builds a fresh contact for someone seen only in the grid
    pub fn from_schedule(person: &PersonSchedule) -> Self {
        Self {
            full_name: person.name.clone(),
            first_name: person.first_name(),
            last_name: person.last_name(),
            phone: person.phone.clone().unwrap_or_default(),
            walkthrough_shifts: person.walkthrough_shifts.clone(),
            phonebank_shifts: person.phonebank_shifts.clone(),
            extra: Vec::new(),
        }
    }

    pub fn extra_value(&self, header: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }

    /// Renders the contact as a CSV row: standard columns then one value per extra header
    pub fn to_row(&self, extra_headers: &[String]) -> Vec<String> {
        let mut row = vec![
            self.full_name.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.phone.clone(),
            shifts_to_text(&self.walkthrough_shifts),
            shifts_to_text(&self.phonebank_shifts),
        ];
        for (i, header) in extra_headers.iter().enumerate() {
            let value = match self.extra.get(i) {
                Some((h, v)) if h == header => v.as_str(),
                _ => self.extra_value(header).unwrap_or(""),
            };
            row.push(value.to_string());
        }
        row
    }
}

/// Contacts keyed by full name, kept in file order
#[derive(Debug, Clone, Default)]
pub struct ContactList {
    extra_headers: Vec<String>,
    records: Vec<ContactRecord>,
    index: HashMap<String, usize>,
}

impl ContactList {
    pub fn new(extra_headers: Vec<String>) -> Self {
        Self {
            extra_headers,
            ..Self::default()
        }
    }

    pub fn extra_headers(&self) -> &[String] {
        &self.extra_headers
    }

    /// Standard headers followed by the extra headers
    pub fn headers(&self) -> Vec<String> {
        STANDARD_HEADERS
            .iter()
            .map(|h| h.to_string())
            .chain(self.extra_headers.iter().cloned())
            .collect()
    }

    /// Inserts a contact; a contact with the same full name is replaced in place
    pub fn insert(&mut self, record: ContactRecord) {
        match self.index.get(&record.full_name) {
            Some(&position) => {
                warn!(name = %record.full_name, "duplicate contact name, keeping the later row");
                self.records[position] = record;
            }
            None => {
                self.index.insert(record.full_name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, full_name: &str) -> Option<&ContactRecord> {
        self.index.get(full_name).map(|&i| &self.records[i])
    }

    pub fn get_mut(&mut self, full_name: &str) -> Option<&mut ContactRecord> {
        self.index.get(full_name).map(|&i| &mut self.records[i])
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.index.contains_key(full_name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }
}

/// Reads a previously exported mail-merge CSV
pub fn read_contacts<R: Read>(reader: R) -> ShiftsResult<ContactList> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let extra_headers: Vec<String> = headers.iter().skip(STANDARD_HEADERS.len()).map(str::to_string).collect();
    let mut contacts = ContactList::new(extra_headers.clone());

    for result in reader.records() {
        let record = result?;
        let field = |i: usize| record.get(i).unwrap_or("").to_string();

        let extra = extra_headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.clone(), field(STANDARD_HEADERS.len() + i)))
            .collect();

        contacts.insert(ContactRecord {
            full_name: field(0),
            first_name: field(1),
            last_name: field(2),
            phone: field(3),
            walkthrough_shifts: parse_shifts(&field(4))?,
            phonebank_shifts: parse_shifts(&field(5))?,
            extra,
        });
    }

    Ok(contacts)
}

/// Loads a mail-merge CSV from disk
pub fn load_contacts<P: AsRef<Path>>(csv_path: P) -> ShiftsResult<ContactList> {
    let file = std::fs::File::open(csv_path)?;
    read_contacts(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShiftsError;
    use pretty_assertions::assert_eq;

    const EXISTING: &str = "\
Full name,First name,Last name,cell,Walkthrough shifts,Phonebank shifts,Precinct,Email
Jane Doe,Jane,Doe,5551234567,\"11/08 from 10:00 - 11:00\n11/09 from 1:00 - 2:00\",,12,jane@example.org
Bob Ray,Bob,Ray,,,11/10 from 6:00 - 7:00
";

    #[test]
    fn test_read_contacts_parses_rows() {
        let contacts = read_contacts(EXISTING.as_bytes()).unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts.extra_headers(), &["Precinct".to_string(), "Email".to_string()]);

        let jane = contacts.get("Jane Doe").unwrap();
        assert_eq!(jane.phone, "5551234567");
        assert_eq!(
            jane.walkthrough_shifts,
            vec![
                Shift::new("11/08", "10:00 - 11:00"),
                Shift::new("11/09", "1:00 - 2:00"),
            ]
        );
        assert!(jane.phonebank_shifts.is_empty());
        assert_eq!(jane.extra_value("Precinct"), Some("12"));
        assert_eq!(jane.extra_value("Email"), Some("jane@example.org"));
    }

    #[test]
    fn test_short_rows_pad_extra_columns() {
        let contacts = read_contacts(EXISTING.as_bytes()).unwrap();
        let bob = contacts.get("Bob Ray").unwrap();
        assert_eq!(bob.phonebank_shifts, vec![Shift::new("11/10", "6:00 - 7:00")]);
        assert_eq!(
            bob.to_row(contacts.extra_headers()),
            vec!["Bob Ray", "Bob", "Ray", "", "", "11/10 from 6:00 - 7:00", "", ""]
        );
    }

    #[test]
    fn test_headers_include_extra_columns() {
        let contacts = read_contacts(EXISTING.as_bytes()).unwrap();
        assert_eq!(
            contacts.headers(),
            vec![
                "Full name",
                "First name",
                "Last name",
                "cell",
                "Walkthrough shifts",
                "Phonebank shifts",
                "Precinct",
                "Email"
            ]
        );
    }

    #[test]
    fn test_duplicate_names_keep_first_position() {
        let csv = "\
Full name,First name,Last name,cell,Walkthrough shifts,Phonebank shifts
Ann Lee,Ann,Lee,111,,
Bo Li,Bo,Li,222,,
Ann Lee,Ann,Lee,333,,
";
        let contacts = read_contacts(csv.as_bytes()).unwrap();
        assert_eq!(contacts.len(), 2);
        let names: Vec<&str> = contacts.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(names, vec!["Ann Lee", "Bo Li"]);
        assert_eq!(contacts.get("Ann Lee").unwrap().phone, "333");
    }

    #[test]
    fn test_malformed_shift_cell_is_error() {
        let csv = "\
Full name,First name,Last name,cell,Walkthrough shifts,Phonebank shifts
Ann Lee,Ann,Lee,111,saturday morning,
";
        assert!(matches!(
            read_contacts(csv.as_bytes()),
            Err(ShiftsError::MalformedShift(_))
        ));
    }

    #[test]
    fn test_from_schedule() {
        let mut person = PersonSchedule::new("Mary Ann Smith", Some("5550001111".to_string()));
        person.phonebank_shifts.push(Shift::new("11/08", "5:00 - 6:00"));
        let record = ContactRecord::from_schedule(&person);
        assert_eq!(record.first_name, "Mary");
        assert_eq!(record.last_name, "Ann Smith");
        assert_eq!(record.phone, "5550001111");
        assert!(record.extra.is_empty());
        assert_eq!(
            record.to_row(&["Precinct".to_string()]),
            vec!["Mary Ann Smith", "Mary", "Ann Smith", "5550001111", "", "11/08 from 5:00 - 6:00", ""]
        );
    }
}
