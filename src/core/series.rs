use std::collections::BTreeMap;

use average::{Estimate, Mean};
use chrono::NaiveDate;
use itertools::Itertools;

use crate::{
    core::{observation::PriceObservation, rolling::RollingMean},
    prelude::*,
};

/// Daily aggregate of the prices.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub average_price: Option<f64>,
    pub rolling_mean_7: Option<f64>,
    pub rolling_mean_30: Option<f64>,
}

/// Daily series with unique dates in ascending order.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, derive_more::Deref, derive_more::IntoIterator)]
#[into_iterator(owned, ref)]
pub struct SeriesTable(Vec<SeriesPoint>);

impl SeriesTable {
    /// Sort the points by date and make sure that every date occurs only once.
    pub fn try_from_points(mut points: Vec<SeriesPoint>) -> Result<Self> {
        points.sort_unstable_by_key(|point| point.date);
        if let Some((point, _)) =
            points.iter().tuple_windows().find(|(lhs, rhs)| lhs.date == rhs.date)
        {
            bail!("duplicate series date: {}", point.date);
        }
        Ok(Self(points))
    }

    /// Group the observations by date and compute the daily averages
    /// along with their 7-day and 30-day trailing means.
    #[instrument(skip_all, fields(n_observations = observations.len()))]
    pub fn from_observations(observations: &[PriceObservation]) -> Self {
        let mut daily = BTreeMap::<NaiveDate, Mean>::new();
        let mut n_skipped = 0_usize;
        for observation in observations {
            match observation.date() {
                Some(date) => {
                    daily.entry(date).or_insert_with(Mean::new).add(observation.price_per_mwh);
                }
                None => n_skipped += 1,
            }
        }
        if n_skipped != 0 {
            warn!(n_skipped, "skipped observations with invalid dates");
        }

        let averages = daily.values().map(|mean| Some(mean.mean())).collect_vec();
        let rolling_means_7 = averages.iter().copied().rolling_mean(7);
        let rolling_means_30 = averages.iter().copied().rolling_mean(30);
        Self(
            daily
                .into_keys()
                .zip(averages)
                .zip(rolling_means_7)
                .zip(rolling_means_30)
                .map(|(((date, average_price), rolling_mean_7), rolling_mean_30)| SeriesPoint {
                    date,
                    average_price,
                    rolling_mean_7,
                    rolling_mean_30,
                })
                .collect(),
        )
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.iter().map(|point| point.date).collect()
    }
}
