//! Presentation shape of a stored asset with its resolved status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::asset::AssetRecord;
use crate::date::DueDate;
use crate::status::{resolve, AssetStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetOutput {
    pub id: String,
    pub nominal_value: f64,
    pub due_date: DueDate,
    pub interest_rate: f64,
    pub status: AssetStatus,
}

/// Combine a stored record with its status as of `today`.
pub fn format(record: &AssetRecord, today: NaiveDate) -> AssetOutput {
    AssetOutput {
        id: record.id.clone(),
        nominal_value: record.nominal_value,
        due_date: record.due_date,
        interest_rate: record.interest_rate,
        status: resolve(record.due_date.date(), today),
    }
}

pub fn format_all(records: &[AssetRecord], today: NaiveDate) -> Vec<AssetOutput> {
    records.iter().map(|r| format(r, today)).collect()
}
