use std::collections::HashMap;

use crate::core::stats::BoxStats;

/// Prices at or above this threshold are treated as outliers and excluded from the distribution.
pub const OUTLIER_THRESHOLD: f64 = 4000.0;

#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct DistributionRow {
    /// Period category, for example a month label.
    pub period: String,

    pub price_per_mwh: f64,
}

impl DistributionRow {
    pub fn new(period: impl Into<String>, price_per_mwh: f64) -> Self {
        Self { period: period.into(), price_per_mwh }
    }

    #[must_use]
    pub fn is_outlier(&self) -> bool {
        // Also rejects NaN.
        !(self.price_per_mwh < OUTLIER_THRESHOLD)
    }
}

/// Prices of a single period, with the outliers already excluded.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct DistributionBucket {
    pub period: String,
    pub prices: Vec<f64>,
}

impl DistributionBucket {
    pub fn stats(&self) -> Option<BoxStats> {
        BoxStats::from_prices(&self.prices)
    }
}

/// Drop the outliers and group the remaining prices by period.
///
/// Buckets follow the order in which the periods first occur in the rows,
/// the periods are not re-sorted chronologically.
#[must_use]
pub fn bucket_by_period(rows: &[DistributionRow]) -> Vec<DistributionBucket> {
    let mut buckets = Vec::<DistributionBucket>::new();
    let mut indices = HashMap::<&str, usize>::new();
    for row in rows.iter().filter(|row| !row.is_outlier()) {
        let index = *indices.entry(row.period.as_str()).or_insert_with(|| {
            buckets.push(DistributionBucket { period: row.period.clone(), prices: Vec::new() });
            buckets.len() - 1
        });
        buckets[index].prices.push(row.price_per_mwh);
    }
    buckets
}
