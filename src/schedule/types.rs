use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ShiftsError;

/// The two kinds of volunteer shift on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShiftKind {
    /// Slots before the debrief band
    Walkthrough,
    /// Slots after the debrief band
    Phonebank,
}

impl ShiftKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftKind::Walkthrough => "walkthrough",
            ShiftKind::Phonebank => "phonebank",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftKind {
    type Err = ShiftsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "walkthrough" => Ok(ShiftKind::Walkthrough),
            "phonebank" => Ok(ShiftKind::Phonebank),
            _ => Err(ShiftsError::UnknownShiftKind(s.to_string())),
        }
    }
}

/// A resolved row band: which kind of shift it holds and its time label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub kind: ShiftKind,
    pub time: String,
}

/// One (date, time) pair, rendered as "<date> from <time>"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Shift {
    pub date: String,
    pub time: String,
}

impl Shift {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.date, self.time)
    }
}

impl FromStr for Shift {
    type Err = ShiftsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_once(" from ")
            .map(|(date, time)| Shift::new(date, time))
            .ok_or_else(|| ShiftsError::MalformedShift(s.to_string()))
    }
}

/// A grid cell that landed inside a shift band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupCell {
    pub content: String,
    pub row: usize,
    pub column: usize,
    pub date: String,
    pub time: String,
    pub shift_kind: ShiftKind,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl SignupCell {
    pub fn shift(&self) -> Shift {
        Shift::new(self.date.clone(), self.time.clone())
    }
}

/// One volunteer's shifts, ordered by name first
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PersonSchedule {
    pub name: String,
    pub phone: Option<String>,
    pub walkthrough_shifts: Vec<Shift>,
    pub phonebank_shifts: Vec<Shift>,
}

impl PersonSchedule {
    pub fn new(name: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            name: name.into(),
            phone,
            walkthrough_shifts: Vec::new(),
            phonebank_shifts: Vec::new(),
        }
    }

    pub fn shifts_mut(&mut self, kind: ShiftKind) -> &mut Vec<Shift> {
        match kind {
            ShiftKind::Walkthrough => &mut self.walkthrough_shifts,
            ShiftKind::Phonebank => &mut self.phonebank_shifts,
        }
    }

    pub fn first_name(&self) -> String {
        first_name(&self.name)
    }

    pub fn last_name(&self) -> String {
        last_name(&self.name)
    }

    pub fn shift_count(&self) -> usize {
        self.walkthrough_shifts.len() + self.phonebank_shifts.len()
    }
}

/// First whitespace-delimited token of a full name
pub fn first_name(full_name: &str) -> String {
    full_name.split_whitespace().next().unwrap_or("").to_string()
}

/// Everything after the first token, joined by single spaces
pub fn last_name(full_name: &str) -> String {
    full_name.split_whitespace().skip(1).collect::<Vec<_>>().join(" ")
}
