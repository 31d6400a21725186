//! Due-date parsing shared by the validator and the status resolver.
//!
//! Only the strict `YYYY-MM-DD` shape is accepted: four-digit year, two-digit
//! month and day, `-` separators, nothing before or after. Time-of-day,
//! timezone offsets and signed years are all rejected.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// `chrono` format string for due dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Byte length of a well-formed due date.
const DUE_DATE_LEN: usize = 10;

/// Parse a due date in strict `YYYY-MM-DD` form.
///
/// `chrono` alone is lenient about field widths (`2025-1-4` parses), so the
/// shape is checked byte by byte before delegating the calendar check.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDateFormat {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    if bytes.len() != DUE_DATE_LEN {
        return Err(invalid());
    }
    let well_shaped = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DUE_DATE_FORMAT).map_err(|_| invalid())
}

/// A validated calendar due date, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DueDate(NaiveDate);

impl DueDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl std::str::FromStr for DueDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_due_date(s).map(Self)
    }
}

impl TryFrom<String> for DueDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DUE_DATE_FORMAT))
    }
}
