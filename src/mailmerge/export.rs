use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use super::contact::ContactList;
use crate::error::{ShiftsError, ShiftsResult};

/// Writes the contact list as a mail-merge CSV. An empty list is an error.
pub fn write_contacts<W: Write>(writer: W, contacts: &ContactList) -> ShiftsResult<()> {
    if contacts.is_empty() {
        return Err(ShiftsError::EmptyOutput);
    }

    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(contacts.headers())?;
    for contact in contacts.iter() {
        wtr.write_record(contact.to_row(contacts.extra_headers()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Saves the contact list to `csv_path`, replacing any existing file
pub fn save_contacts(csv_path: &Path, contacts: &ContactList) -> ShiftsResult<()> {
    if contacts.is_empty() {
        return Err(ShiftsError::EmptyOutput);
    }
    let file = File::create(csv_path)?;
    write_contacts(file, contacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailmerge::contact::read_contacts;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_contacts_sorts_shift_lines() {
        let csv = "\
Full name,First name,Last name,cell,Walkthrough shifts,Phonebank shifts,Precinct
Jane Doe,Jane,Doe,5551234567,\"11/09 from 1:00 - 2:00\n11/08 from 10:00 - 11:00\",,12
";
        let contacts = read_contacts(csv.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_contacts(&mut out, &contacts).unwrap();

        let expected = "\
Full name,First name,Last name,cell,Walkthrough shifts,Phonebank shifts,Precinct
Jane Doe,Jane,Doe,5551234567,\"11/08 from 10:00 - 11:00\n11/09 from 1:00 - 2:00\",,12
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_empty_list_is_error() {
        let contacts = ContactList::new(vec!["Precinct".to_string()]);
        let mut out = Vec::new();
        assert!(matches!(
            write_contacts(&mut out, &contacts),
            Err(ShiftsError::EmptyOutput)
        ));
        assert!(out.is_empty());
    }
}
