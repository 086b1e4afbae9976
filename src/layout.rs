//! Grid layout of the sign-up spreadsheet.
//!
//! The sheet is a fixed visual grid: each day owns a group of columns, and the
//! rows are cut into bands (a header, one band per walkthrough hour, a debrief
//! band, then the phonebank hours). [`GridLayout`] names every constant of that
//! grid so a different sheet only needs a different layout value.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ShiftsError, ShiftsResult};
use crate::schedule::slot_utils::hour_slot_label;
use crate::schedule::{ShiftKind, Slot};

/// A slot that does not span exactly one hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedSlot {
    pub hour: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Month printed in every date label
    pub month: u32,
    /// Day of month for the first column group
    pub first_day: u32,
    /// Total columns in the sheet
    pub column_count: usize,
    /// Columns per day group
    pub column_stride: usize,
    /// Offsets within a group that hold signups
    pub data_offsets: Vec<usize>,
    /// Row counts per band; the first band is the header
    pub band_lengths: Vec<usize>,
    /// Hour (24h) of the first band after the header
    pub first_hour: u32,
    /// Hour whose band is the debrief; earlier bands are walkthroughs, later are phonebanks
    pub debrief_hour: u32,
    pub extended_slot: Option<ExtendedSlot>,
    /// Cells shorter than this (in chars) are treated as empty
    pub min_cell_chars: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            month: 11,
            first_day: 8,
            column_count: 59,
            column_stride: 5,
            data_offsets: vec![1, 2],
            band_lengths: vec![6, 6, 7, 6, 7, 7, 6, 4, 5, 6, 4],
            first_hour: 10,
            debrief_hour: 16,
            extended_slot: Some(ExtendedSlot {
                hour: 15,
                label: "3:00 - 4:30".to_string(),
            }),
            min_cell_chars: 6,
        }
    }
}

impl GridLayout {
    /// Loads a layout from a JSON file; missing fields take the default layout's values
    pub fn from_path<P: AsRef<Path>>(path: P) -> ShiftsResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> ShiftsResult<Self> {
        let layout: GridLayout = serde_json::from_str(text)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> ShiftsResult<()> {
        if self.band_lengths.len() < 2 {
            return Err(ShiftsError::InvalidLayout(
                "need a header band and at least one slot band".to_string(),
            ));
        }
        if self.column_stride == 0 {
            return Err(ShiftsError::InvalidLayout("column stride must be positive".to_string()));
        }
        if let Some(offset) = self.data_offsets.iter().find(|&&o| o >= self.column_stride) {
            return Err(ShiftsError::InvalidLayout(format!(
                "data offset {} does not fit in a stride of {}",
                offset, self.column_stride
            )));
        }
        if !(1..=12).contains(&self.month) {
            return Err(ShiftsError::InvalidLayout(format!("month {} out of range", self.month)));
        }
        if let Some(last) = self.valid_columns().last() {
            let last_day = u32::try_from(last / self.column_stride)
                .ok()
                .and_then(|groups| self.first_day.checked_add(groups))
                .filter(|&day| day <= 31);
            match last_day {
                Some(_) if self.first_day > 0 => {}
                _ => {
                    return Err(ShiftsError::InvalidLayout(format!(
                        "columns starting on day {} run past the end of a month",
                        self.first_day
                    )))
                }
            }
        }
        // The last band's slot ends an hour after it starts, still within one day
        let slot_bands = u32::try_from(self.band_lengths.len() - 1).unwrap_or(u32::MAX);
        let last_hour = match self.first_hour.checked_add(slot_bands) {
            Some(end) if end <= 24 => end - 1,
            _ => {
                return Err(ShiftsError::InvalidLayout(format!(
                    "{} slot bands starting at hour {} run past midnight",
                    slot_bands, self.first_hour
                )))
            }
        };
        if self.debrief_hour < self.first_hour || self.debrief_hour > last_hour {
            return Err(ShiftsError::InvalidLayout(format!(
                "debrief hour {} is outside the banded hours {}..={}",
                self.debrief_hour, self.first_hour, last_hour
            )));
        }
        Ok(())
    }

    /// Exclusive upper row index of each band
    pub fn band_boundaries(&self) -> Vec<usize> {
        self.band_lengths
            .iter()
            .scan(0, |total, len| {
                *total += len;
                Some(*total)
            })
            .collect()
    }

    /// Rows before the first slot band
    pub fn header_rows(&self) -> usize {
        self.band_lengths.first().copied().unwrap_or(0)
    }

    pub fn is_data_column(&self, column: usize) -> bool {
        self.column_stride > 0 && self.data_offsets.contains(&(column % self.column_stride))
    }

    /// All signup columns of the sheet, left to right
    pub fn valid_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.column_count).filter(|&c| self.is_data_column(c))
    }

    fn day_for_column(&self, column: usize) -> u32 {
        let groups = u32::try_from(column / self.column_stride).unwrap_or(u32::MAX);
        self.first_day.saturating_add(groups)
    }

    /// Maps a signup column to its "MM/DD" date label
    pub fn column_to_date(&self, column: usize) -> Option<String> {
        if !self.is_data_column(column) {
            return None;
        }
        Some(format!("{}/{:02}", self.month, self.day_for_column(column)))
    }

    /// Resolves a row to its shift kind and time label.
    ///
    /// Header rows and the debrief band give `Ok(None)`. A row past the last band
    /// means the grid does not match this layout and is an error.
    pub fn row_to_slot(&self, row: usize) -> ShiftsResult<Option<Slot>> {
        if row < self.header_rows() {
            return Ok(None);
        }
        let band = self
            .band_boundaries()
            .iter()
            .position(|&boundary| row < boundary)
            .ok_or(ShiftsError::NoBandForRow { row })?;

        // band is at least 1 here: rows in the header band returned above
        let hour = self
            .first_hour
            .saturating_add(u32::try_from(band - 1).unwrap_or(u32::MAX));
        let time = match &self.extended_slot {
            Some(extended) if extended.hour == hour => extended.label.clone(),
            _ => hour_slot_label(hour),
        };

        let kind = match hour.cmp(&self.debrief_hour) {
            std::cmp::Ordering::Less => ShiftKind::Walkthrough,
            std::cmp::Ordering::Equal => return Ok(None),
            std::cmp::Ordering::Greater => ShiftKind::Phonebank,
        };
        Ok(Some(Slot { kind, time }))
    }
}
