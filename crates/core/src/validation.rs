//! Batch validation.
//!
//! A batch is checked in full before anything is written. The first
//! violation rejects the whole batch. Duplicate detection only looks inside
//! the batch; an id already held by the store is an update, not a duplicate.

use std::collections::HashSet;

use crate::asset::{AssetInput, AssetRecord};
use crate::date::{parse_due_date, DueDate};
use crate::error::ValidationError;

/// Maximum number of assets accepted in one submission.
pub const MAX_BATCH_SIZE: usize = 10_000;

/// Validate a candidate batch and convert it into storable records.
///
/// Rules, in order:
/// 1. the batch is non-empty,
/// 2. it holds at most [`MAX_BATCH_SIZE`] assets,
/// 3. per asset in input order: non-negative nominal value, interest rate
///    within `[0, 1]`, id unseen earlier in the batch, well-formed due date.
pub fn validate_batch(batch: Vec<AssetInput>) -> Result<Vec<AssetRecord>, ValidationError> {
    if batch.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }
    if batch.len() > MAX_BATCH_SIZE {
        return Err(ValidationError::BatchTooLarge {
            submitted: batch.len(),
        });
    }

    let mut seen_ids = HashSet::with_capacity(batch.len());
    let mut records = Vec::with_capacity(batch.len());

    for input in batch {
        validate_nominal_value(&input)?;
        validate_interest_rate(&input)?;
        if !seen_ids.insert(input.id.clone()) {
            return Err(ValidationError::DuplicateId { id: input.id });
        }
        let due_date = DueDate::new(parse_due_date(&input.due_date)?);

        records.push(AssetRecord {
            id: input.id,
            nominal_value: input.nominal_value,
            due_date,
            interest_rate: input.interest_rate,
        });
    }

    Ok(records)
}

fn validate_nominal_value(input: &AssetInput) -> Result<(), ValidationError> {
    // NaN compares false against everything, so test for it explicitly.
    if input.nominal_value.is_nan() || input.nominal_value < 0.0 {
        return Err(ValidationError::NegativeNominalValue {
            id: input.id.clone(),
        });
    }
    Ok(())
}

fn validate_interest_rate(input: &AssetInput) -> Result<(), ValidationError> {
    if !(0.0..=1.0).contains(&input.interest_rate) {
        return Err(ValidationError::InvalidInterestRate {
            id: input.id.clone(),
        });
    }
    Ok(())
}
