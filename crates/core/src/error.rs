//! Error taxonomy for batch submissions.
//!
//! Every [`ValidationError`] is a rejection of a whole batch; reads never
//! produce one. [`CoreError`] is what the calling layer sees.

use crate::validation::MAX_BATCH_SIZE;

/// Why a submitted batch was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Assets list cannot be empty")]
    EmptyBatch,

    #[error("Assets list too large: {submitted} submitted (max {max})", max = MAX_BATCH_SIZE)]
    BatchTooLarge { submitted: usize },

    #[error("Asset {id} has negative nominal_value")]
    NegativeNominalValue { id: String },

    #[error("Asset {id} has invalid interest_rate (must be 0-1)")]
    InvalidInterestRate { id: String },

    #[error("Duplicate asset id: {id}")]
    DuplicateId { id: String },

    #[error("Invalid date format: {value}. Use YYYY-MM-DD.")]
    InvalidDateFormat { value: String },
}

impl ValidationError {
    /// Stable machine-readable code for the failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyBatch => "EMPTY_BATCH",
            Self::BatchTooLarge { .. } => "BATCH_TOO_LARGE",
            Self::NegativeNominalValue { .. } => "NEGATIVE_NOMINAL_VALUE",
            Self::InvalidInterestRate { .. } => "INVALID_INTEREST_RATE",
            Self::DuplicateId { .. } => "DUPLICATE_ID",
            Self::InvalidDateFormat { .. } => "INVALID_DATE_FORMAT",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal error: {0}")]
    Internal(String),
}
