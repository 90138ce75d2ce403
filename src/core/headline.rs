use crate::quantity::price::MegawattHourPrice;

/// Year key under which the headline snapshot stores the overall average.
pub const OVERALL_YEAR: i32 = 2024;

/// Years that get a dedicated tile.
pub const TILE_YEARS: [i32; 3] = [2021, 2022, 2023];

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeadlineRow {
    pub year: i32,
    pub average_price: f64,
}

/// Metric tile with a label and a rounded value.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub label: String,

    /// `None` when the snapshot lacks the corresponding row.
    pub value: Option<MegawattHourPrice>,
}

/// Build the per-year tiles followed by the overall one.
pub fn build_tiles(rows: &[HeadlineRow]) -> Vec<Tile> {
    let average_of = |year: i32| {
        rows.iter()
            .find(|row| row.year == year)
            .map(|row| MegawattHourPrice(row.average_price).round_to(1))
    };
    TILE_YEARS
        .into_iter()
        .map(|year| Tile { label: format!("Average price {year} €"), value: average_of(year) })
        .chain([Tile {
            label: "Overall average price €".to_string(),
            value: average_of(OVERALL_YEAR),
        }])
        .collect()
}
