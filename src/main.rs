#![doc = include_str!("../README.md")]
#![allow(clippy::doc_markdown)]

mod chart;
mod cli;
mod core;
mod dashboard;
mod prelude;
mod quantity;
mod server;
mod snapshot;
mod tables;

use std::{fs, sync::Arc};

use clap::{Parser, crate_version};
use tokio::net::TcpListener;

use crate::{
    chart::{build_distribution_chart, build_heatmap_chart, build_series_chart},
    cli::{Args, Command, RenderArgs, ServeArgs, SummaryArgs},
    core::{distribution::bucket_by_period, headline::build_tiles, heatmap::HeatmapMatrix},
    dashboard::Dashboard,
    prelude::*,
    server::AppState,
    tables::{build_distribution_table, build_tiles_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Render(args) => render(&args)?,
        Command::Serve(args) => serve(*args).await?,
        Command::Summary(args) => summary(&args)?,
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all, fields(output = %args.output.display()))]
fn render(args: &RenderArgs) -> Result {
    let selection = args.selection.selection()?;
    let snapshot = args.snapshot.load()?;

    let tiles = build_tiles(&snapshot.headline);
    let series = build_series_chart(&snapshot.series);
    let distribution = build_distribution_chart(&snapshot.distribution);
    let heatmap = build_heatmap_chart(&snapshot.observations, selection.year, selection.month);
    let html = Dashboard::builder()
        .tiles(&tiles)
        .series(&series)
        .distribution(&distribution)
        .heatmap(&heatmap)
        .selection(selection)
        .build()
        .render()?;

    fs::write(&args.output, html)
        .with_context(|| format!("failed to write `{}`", args.output.display()))?;
    info!("rendered the dashboard");
    Ok(())
}

async fn serve(args: ServeArgs) -> Result {
    let snapshot = args.snapshot.load()?;
    let listener = TcpListener::bind(&args.bind_address)
        .await
        .with_context(|| format!("failed to bind to `{}`", args.bind_address))?;
    server::serve(listener, Arc::new(AppState::new(snapshot))).await
}

fn summary(args: &SummaryArgs) -> Result {
    let selection = args.selection.selection()?;
    let snapshot = args.snapshot.load()?;

    println!("{}", build_tiles_table(&build_tiles(&snapshot.headline)));
    println!("{}", build_distribution_table(&bucket_by_period(&snapshot.distribution)));

    let heatmap = HeatmapMatrix::build(&snapshot.observations, selection.year, selection.month);
    if heatmap.is_empty() {
        warn!(%selection, "no observations for the selected month");
    }
    info!(
        %selection,
        n_hours = heatmap.hours.len(),
        n_days = heatmap.days.len(),
        n_cells = heatmap.n_cells(),
        n_points = snapshot.series.len(),
        "summarized",
    );
    Ok(())
}
