//! Asset status derived from the due date.
//!
//! Status is never stored. It is recomputed on every read against the
//! caller-supplied UTC calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::parse_due_date;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    /// Due today or later.
    Active,
    /// Due date strictly before today.
    Defaulted,
}

impl AssetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Defaulted => "defaulted",
        }
    }
}

/// Resolve the status of an asset due on `due` as of `today`.
pub fn resolve(due: NaiveDate, today: NaiveDate) -> AssetStatus {
    if due < today {
        AssetStatus::Defaulted
    } else {
        AssetStatus::Active
    }
}

/// Parse `due` with the shared due-date rules, then resolve it.
pub fn resolve_str(due: &str, today: NaiveDate) -> Result<AssetStatus, ValidationError> {
    parse_due_date(due).map(|date| resolve(date, today))
}
