mod table;

use std::path::PathBuf;

use bon::Builder;
use itertools::izip;

use self::table::{Column, Table};
use crate::{
    core::{
        distribution::DistributionRow,
        headline::HeadlineRow,
        observation::PriceObservation,
        series::{SeriesPoint, SeriesTable},
    },
    prelude::*,
};

const YEAR: Column = Column::new("year", &["ano"]);
const MONTH: Column = Column::new("month", &["mes"]);
const DAY: Column = Column::new("day", &["dia"]);
const HOUR: Column = Column::new("hour", &["hora"]);
const PRICE: Column = Column::new("price_per_mwh", &["euros_per_mwh"]);
const DATE: Column = Column::new("date", &["data", "__index_level_0__"]);
const AVERAGE_PRICE: Column = Column::new("average_price", &["media_preco", "media"]);
const ROLLING_MEAN_7: Column = Column::new("rolling_mean_7", &["mm7d"]);
const ROLLING_MEAN_30: Column = Column::new("rolling_mean_30", &["mm30d"]);
const PERIOD: Column = Column::new("period", &["data_boxplot"]);

/// Locations of the snapshot files.
#[derive(Builder)]
pub struct SnapshotPaths {
    pub headline: PathBuf,

    /// `None` to derive the series from the observations.
    pub series: Option<PathBuf>,

    pub distribution: PathBuf,
    pub observations: PathBuf,
}

/// Read-only tables the dashboard is built from, loaded once per process.
#[must_use]
pub struct Snapshot {
    pub headline: Vec<HeadlineRow>,
    pub series: SeriesTable,
    pub distribution: Vec<DistributionRow>,
    pub observations: Vec<PriceObservation>,
}

impl Snapshot {
    #[instrument(skip_all)]
    pub fn load(paths: &SnapshotPaths) -> Result<Self> {
        let headline = read_headline(&Table::read("headline", &paths.headline)?)?;
        let distribution = read_distribution(&Table::read("distribution", &paths.distribution)?)?;
        let observations = read_observations(&Table::read("observations", &paths.observations)?)?;
        let series = match &paths.series {
            Some(path) => read_series(&Table::read("series", path)?)?,
            None => {
                info!("deriving the series from the observations…");
                SeriesTable::from_observations(&observations)
            }
        };
        info!(
            n_headline_rows = headline.len(),
            n_series_points = series.len(),
            n_distribution_rows = distribution.len(),
            n_observations = observations.len(),
            "loaded the snapshot",
        );
        Ok(Self { headline, series, distribution, observations })
    }
}

fn read_headline(table: &Table) -> Result<Vec<HeadlineRow>> {
    let rows = izip!(table.integers(YEAR)?, table.floats(AVERAGE_PRICE)?).map(
        |(year, average_price)| {
            Some(HeadlineRow { year: i32::try_from(year?).ok()?, average_price: average_price? })
        },
    );
    Ok(collect_complete("headline", rows))
}

fn read_series(table: &Table) -> Result<SeriesTable> {
    let rows = izip!(
        table.dates(DATE)?,
        table.floats(AVERAGE_PRICE)?,
        table.floats(ROLLING_MEAN_7)?,
        table.floats(ROLLING_MEAN_30)?,
    )
    .map(|(date, average_price, rolling_mean_7, rolling_mean_30)| {
        Some(SeriesPoint { date: date?, average_price, rolling_mean_7, rolling_mean_30 })
    });
    SeriesTable::try_from_points(collect_complete("series", rows))
}

fn read_distribution(table: &Table) -> Result<Vec<DistributionRow>> {
    let rows = izip!(table.strings(PERIOD)?, table.floats(PRICE)?)
        .map(|(period, price)| Some(DistributionRow::new(period?, price?)));
    Ok(collect_complete("distribution", rows))
}

fn read_observations(table: &Table) -> Result<Vec<PriceObservation>> {
    let rows = izip!(
        table.integers(YEAR)?,
        table.integers(MONTH)?,
        table.integers(DAY)?,
        table.integers(HOUR)?,
        table.floats(PRICE)?,
    )
    .map(|(year, month, day, hour, price)| {
        Some(PriceObservation::new(
            i32::try_from(year?).ok()?,
            u32::try_from(month?).ok()?,
            u32::try_from(day?).ok()?,
            u32::try_from(hour?).ok()?,
            price?,
        ))
    });
    Ok(collect_complete("observations", rows))
}

/// Collect the complete rows, skipping those with missing values.
fn collect_complete<T>(table: &str, rows: impl Iterator<Item = Option<T>>) -> Vec<T> {
    let mut n_skipped = 0_usize;
    let rows = rows
        .filter_map(|row| {
            if row.is_none() {
                n_skipped += 1;
            }
            row
        })
        .collect();
    if n_skipped != 0 {
        warn!(table, n_skipped, "skipped incomplete rows");
    }
    rows
}
