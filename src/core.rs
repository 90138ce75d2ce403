pub mod distribution;
pub mod headline;
pub mod heatmap;
pub mod observation;
pub mod rolling;
pub mod selection;
pub mod series;
pub mod stats;
