use average::Variance;
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::quantity::price::MegawattHourPrice;

/// Box-plot statistics: quartiles, whisker bounds, mean and standard deviation.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub min: MegawattHourPrice,
    pub q1: MegawattHourPrice,
    pub median: MegawattHourPrice,
    pub q3: MegawattHourPrice,
    pub max: MegawattHourPrice,
    pub mean: MegawattHourPrice,

    /// Sample standard deviation, `None` for fewer than two prices.
    pub std_dev: Option<MegawattHourPrice>,
}

impl BoxStats {
    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }
        let sorted = prices
            .iter()
            .copied()
            .map(OrderedFloat)
            .sorted_unstable()
            .map(|x| x.0)
            .collect_vec();
        let variance: Variance = prices.iter().copied().collect();
        Some(Self {
            count: prices.len(),
            min: MegawattHourPrice(sorted[0]),
            q1: MegawattHourPrice(quantile(&sorted, 0.25)),
            median: MegawattHourPrice(quantile(&sorted, 0.5)),
            q3: MegawattHourPrice(quantile(&sorted, 0.75)),
            max: MegawattHourPrice(sorted[sorted.len() - 1]),
            mean: MegawattHourPrice(variance.mean()),
            std_dev: (prices.len() >= 2)
                .then(|| MegawattHourPrice(variance.sample_variance().sqrt())),
        })
    }
}

/// Linearly interpolated quantile of the already sorted, non-empty values.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower_index = position.floor() as usize;
    let upper_index = (lower_index + 1).min(sorted.len() - 1);
    let fraction = position - position.floor();
    sorted[lower_index] + (sorted[upper_index] - sorted[lower_index]) * fraction
}
