//! Heuristic name and phone extraction from free-text grid cells.
//!
//! Volunteers type whatever they like into a cell, typically
//! `"Jane Doe 555-123-4567"` or `"Jane Doe\n(555)123-4567"`. Known limits:
//! names containing digits or an opening parenthesis are cut short at that
//! character, and only phone numbers with exactly ten digits are recognised
//! (no spaces between groups, no country code).

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading run with no digit, '(' or newline, ending on a character that is
/// not a comma, question mark, hyphen or whitespace
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^0-9(\n]+[^0-9,?(\s\-]").expect("name pattern is valid")
});

/// Ten digits, each optionally wrapped in parentheses and followed by '-' or '.'
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\(?[0-9]\)?[-.]?){10}").expect("phone pattern is valid")
});

/// What a cell told us about who signed up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellContents {
    pub name: Option<String>,
    pub phone: Option<String>,
}

pub fn extract_name(text: &str) -> Option<String> {
    NAME_PATTERN.find(text).map(|m| m.as_str().to_string())
}

/// Finds the first ten-digit phone number and returns its digits only
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_PATTERN
        .find(text)
        .map(|m| m.as_str().chars().filter(|c| c.is_ascii_digit()).collect())
}

pub fn extract_cell(text: &str) -> CellContents {
    CellContents {
        name: extract_name(text),
        phone: extract_phone(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_phone_together() {
        let contents = extract_cell("John Smith 555-123-4567 available");
        assert_eq!(contents.name.as_deref(), Some("John Smith"));
        assert_eq!(contents.phone.as_deref(), Some("5551234567"));
    }

    #[test]
    fn test_name_trims_trailing_punctuation() {
        assert_eq!(extract_name("Jane Doe, 555.123.4567").as_deref(), Some("Jane Doe"));
        assert_eq!(extract_name("Jane Doe - 5551234567").as_deref(), Some("Jane Doe"));
        assert_eq!(extract_name("Sam Kohn? maybe 2pm").as_deref(), Some("Sam Kohn? maybe"));
        assert_eq!(extract_name("Maria Lopez\n5551234567").as_deref(), Some("Maria Lopez"));
        assert_eq!(extract_name("Lee Chan (cell 555)").as_deref(), Some("Lee Chan"));
    }

    #[test]
    fn test_name_drops_trailing_tab_and_carriage_return() {
        assert_eq!(extract_name("Jane Doe\t555-123-4567").as_deref(), Some("Jane Doe"));
        assert_eq!(extract_name("Jane Doe\r\n555-123-4567").as_deref(), Some("Jane Doe"));
        assert_eq!(extract_name("Jane Doe \t\r\n").as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_name_absent_when_text_starts_with_digit() {
        assert_eq!(extract_name("555-123-4567 John"), None);
        assert_eq!(extract_name("(555) John"), None);
    }

    #[test]
    fn test_phone_formats() {
        assert_eq!(extract_phone("(555)123-4567").as_deref(), Some("5551234567"));
        assert_eq!(extract_phone("call 555.123.4567").as_deref(), Some("5551234567"));
        assert_eq!(extract_phone("5551234567").as_deref(), Some("5551234567"));
    }

    #[test]
    fn test_phone_absent() {
        assert_eq!(extract_phone("Just a name here"), None);
        // Nine digits
        assert_eq!(extract_phone("Ann Lee 555-123-456"), None);
        // Spaces between groups break the run
        assert_eq!(extract_phone("Ann Lee (555) 123 4567"), None);
    }

    #[test]
    fn test_cell_without_digits() {
        let contents = extract_cell("Pat Morgan, can bring snacks");
        assert_eq!(contents.name.as_deref(), Some("Pat Morgan, can bring snacks"));
        assert_eq!(contents.phone, None);
    }
}
