//! Portfolio insights computed over a snapshot of stored assets.

use serde::{Deserialize, Serialize};

use crate::asset::AssetRecord;

/// The metrics the aggregator knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    TotalNominalValue,
    AverageInterestRate,
}

impl InsightKind {
    /// Stable identifier exposed to clients.
    pub fn id(self) -> &'static str {
        match self {
            Self::TotalNominalValue => "insight-1",
            Self::AverageInterestRate => "insight-2",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::TotalNominalValue => "total_nominal_value",
            Self::AverageInterestRate => "average_interest_rate",
        }
    }
}

/// A named aggregate metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub name: String,
    pub value: f64,
}

impl Insight {
    fn new(kind: InsightKind, value: f64) -> Self {
        Self {
            id: kind.id().to_string(),
            name: kind.name().to_string(),
            value,
        }
    }
}

/// Compute all insights for `records`.
///
/// An empty portfolio yields no insights at all rather than zero-valued ones.
pub fn compute(records: &[AssetRecord]) -> Vec<Insight> {
    if records.is_empty() {
        return Vec::new();
    }

    let total_nominal_value: f64 = records.iter().map(|r| r.nominal_value).sum();
    let rate_sum: f64 = records.iter().map(|r| r.interest_rate).sum();
    let average_interest_rate = rate_sum / records.len() as f64;

    vec![
        Insight::new(InsightKind::TotalNominalValue, total_nominal_value),
        Insight::new(InsightKind::AverageInterestRate, average_interest_rate),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn record(id: &str, nominal_value: f64, interest_rate: f64) -> AssetRecord {
        AssetRecord {
            id: id.to_string(),
            nominal_value,
            due_date: "2025-12-04".parse().unwrap(),
            interest_rate,
        }
    }

    #[test]
    fn empty_portfolio_has_no_insights() {
        assert!(compute(&[]).is_empty());
    }

    #[test]
    fn single_asset() {
        let insights = compute(&[record("a", 100.0, 0.03)]);

        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].id, "insight-1");
        assert_eq!(insights[0].name, "total_nominal_value");
        assert_eq!(insights[0].value, 100.0);
        assert_eq!(insights[1].id, "insight-2");
        assert_eq!(insights[1].name, "average_interest_rate");
        assert!((insights[1].value - 0.03).abs() < TOLERANCE);
    }

    #[test]
    fn several_assets_match_reference_values() {
        let records = [
            record("a", 100.0, 0.03),
            record("b", 10.0, 0.1),
            record("c", 30.0, 0.05),
        ];
        let insights = compute(&records);

        assert_eq!(insights[0].value, 140.0);
        let expected_avg = (0.03 + 0.1 + 0.05) / 3.0;
        assert!((insights[1].value - expected_avg).abs() < TOLERANCE);
    }

    #[test]
    fn zero_rates_average_to_zero() {
        let insights = compute(&[record("a", 5.0, 0.0), record("b", 7.5, 0.0)]);
        assert_eq!(insights[0].value, 12.5);
        assert_eq!(insights[1].value, 0.0);
    }
}
