use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    core::selection::Selection,
    prelude::*,
    snapshot::{Snapshot, SnapshotPaths},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the dashboard into a self-contained HTML file.
    #[clap(name = "render")]
    Render(Box<RenderArgs>),

    /// Serve the dashboard over HTTP, recomputing the heatmap on selection change.
    #[clap(name = "serve")]
    Serve(Box<ServeArgs>),

    /// Print the headline tiles and the distribution statistics.
    #[clap(name = "summary")]
    Summary(Box<SummaryArgs>),
}

#[derive(Parser)]
pub struct SnapshotArgs {
    /// Directory containing the snapshot files.
    #[clap(long, default_value = ".", env = "DATA_DIR")]
    pub data_dir: PathBuf,

    #[clap(long, default_value = "headline.parquet", env = "HEADLINE_FILE")]
    pub headline_file: PathBuf,

    #[clap(long, default_value = "series.parquet", env = "SERIES_FILE")]
    pub series_file: PathBuf,

    #[clap(long, default_value = "distribution.parquet", env = "DISTRIBUTION_FILE")]
    pub distribution_file: PathBuf,

    #[clap(long, default_value = "observations.parquet", env = "OBSERVATIONS_FILE")]
    pub observations_file: PathBuf,

    /// Derive the daily series from the observations instead of reading the series file.
    #[clap(long, env = "DERIVE_SERIES")]
    pub derive_series: bool,
}

impl SnapshotArgs {
    pub fn paths(&self) -> SnapshotPaths {
        SnapshotPaths::builder()
            .headline(self.data_dir.join(&self.headline_file))
            .maybe_series((!self.derive_series).then(|| self.data_dir.join(&self.series_file)))
            .distribution(self.data_dir.join(&self.distribution_file))
            .observations(self.data_dir.join(&self.observations_file))
            .build()
    }

    pub fn load(&self) -> Result<Snapshot> {
        Snapshot::load(&self.paths())
    }
}

#[derive(Copy, Clone, Parser)]
pub struct SelectionArgs {
    /// Heatmap year.
    #[clap(long, default_value = "2023", env = "YEAR")]
    pub year: i32,

    /// Heatmap month, starting from 1.
    #[clap(long, default_value = "1", env = "MONTH")]
    pub month: u32,
}

impl SelectionArgs {
    pub fn selection(self) -> Result<Selection> {
        Selection::try_new(self.year, self.month)
    }
}

#[derive(Parser)]
pub struct RenderArgs {
    #[clap(long, short, default_value = "dashboard.html", env = "OUTPUT")]
    pub output: PathBuf,

    #[clap(flatten)]
    pub selection: SelectionArgs,

    #[clap(flatten)]
    pub snapshot: SnapshotArgs,
}

#[derive(Parser)]
pub struct ServeArgs {
    #[clap(long, default_value = "0.0.0.0:8080", env = "BIND_ADDRESS")]
    pub bind_address: String,

    #[clap(flatten)]
    pub snapshot: SnapshotArgs,
}

#[derive(Parser)]
pub struct SummaryArgs {
    #[clap(flatten)]
    pub selection: SelectionArgs,

    #[clap(flatten)]
    pub snapshot: SnapshotArgs,
}
