//! Asset records: the raw submission shape and the validated stored shape.

use serde::{Deserialize, Serialize};

use crate::date::DueDate;

/// One asset as submitted by a client, before validation.
///
/// `due_date` is kept as the raw string so format errors can be reported
/// with the exact offending value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInput {
    pub id: String,
    pub nominal_value: f64,
    pub due_date: String,
    pub interest_rate: f64,
}

/// A validated asset as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: String,
    pub nominal_value: f64,
    pub due_date: DueDate,
    pub interest_rate: f64,
}
