mod distribution;
pub mod figure;
mod heatmap;
mod series;

pub use self::{
    distribution::build_distribution_chart,
    figure::Figure,
    heatmap::build_heatmap_chart,
    series::build_series_chart,
};

/// Title of the price axis shared by the series and distribution charts.
const PRICE_AXIS_TITLE: &str = "Price in EUR €";

/// Width shared by all the charts, in pixels.
const CHART_WIDTH: u32 = 1200;
