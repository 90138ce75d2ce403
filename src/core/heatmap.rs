use std::collections::BTreeMap;

use average::{Estimate, Mean};
use itertools::Itertools;

use crate::core::observation::PriceObservation;

/// Hour × day matrix of the mean prices for a single `(year, month)`.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeatmapMatrix {
    /// Row keys, ascending.
    pub hours: Vec<u32>,

    /// Column keys, ascending.
    pub days: Vec<u32>,

    /// `values[row][column]`, `None` where the hour-day combination has no observations.
    pub values: Vec<Vec<Option<f64>>>,
}

impl HeatmapMatrix {
    pub fn build(observations: &[PriceObservation], year: i32, month: u32) -> Self {
        let mut means = BTreeMap::<(u32, u32), Mean>::new();
        for observation in observations
            .iter()
            .filter(|observation| observation.year == year && observation.month == month)
        {
            means
                .entry((observation.hour, observation.day))
                .or_insert_with(Mean::new)
                .add(observation.price_per_mwh);
        }

        let hours = means.keys().map(|(hour, _)| *hour).dedup().collect_vec();
        let days = means.keys().map(|(_, day)| *day).sorted_unstable().dedup().collect_vec();
        let values = hours
            .iter()
            .map(|hour| days.iter().map(|day| means.get(&(*hour, *day)).map(Mean::mean)).collect())
            .collect();
        Self { hours, days, values }
    }

    /// Hour labels for the categorical y-axis.
    #[must_use]
    pub fn hour_labels(&self) -> Vec<String> {
        self.hours.iter().map(ToString::to_string).collect()
    }

    /// Number of populated cells.
    #[must_use]
    pub fn n_cells(&self) -> usize {
        self.values.iter().flatten().filter(|value| value.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }
}
