use std::{sync::Arc, time::Duration};

use axum::{
    Json,
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use moka::sync::Cache;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    chart::{Figure, build_distribution_chart, build_heatmap_chart, build_series_chart},
    core::{
        headline::build_tiles,
        selection::{MONTHS, Selection, YEARS},
    },
    dashboard::Dashboard,
    prelude::*,
    snapshot::Snapshot,
};

/// Every possible selection fits into the cache.
#[allow(clippy::cast_possible_truncation)]
const HEATMAP_CACHE_CAPACITY: u64 = (YEARS.len() * MONTHS.len()) as u64;

pub struct AppState {
    snapshot: Snapshot,

    /// Heatmaps memoized by the selection they were built for.
    heatmaps: Cache<Selection, Arc<Figure>>,
}

impl AppState {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot, heatmaps: Cache::new(HEATMAP_CACHE_CAPACITY) }
    }

    fn heatmap(&self, selection: Selection) -> Arc<Figure> {
        self.heatmaps.get_with(selection, || {
            info!(%selection, "building the heatmap…");
            Arc::new(build_heatmap_chart(
                &self.snapshot.observations,
                selection.year,
                selection.month,
            ))
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_index))
        .route("/charts/series", get(get_series_chart))
        .route("/charts/distribution", get(get_distribution_chart))
        .route("/charts/heatmap", get(get_heatmap_chart))
        .with_state(state)
        .layer((TraceLayer::new_for_http(), TimeoutLayer::new(Duration::from_secs(10))))
}

pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result {
    info!(address = ?listener.local_addr()?, "serving…");
    axum::serve(listener, router(state)).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

/// Per <https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs>.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!("failed to install the Ctrl+C handler: {error:#}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                error!("failed to install the signal handler: {error:#}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutting down…");
}

#[instrument(skip_all)]
async fn get_index(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    let selection = Selection::default();
    let tiles = build_tiles(&state.snapshot.headline);
    let series = build_series_chart(&state.snapshot.series);
    let distribution = build_distribution_chart(&state.snapshot.distribution);
    let heatmap = state.heatmap(selection);
    Dashboard::builder()
        .tiles(&tiles)
        .series(&series)
        .distribution(&distribution)
        .heatmap(heatmap.as_ref())
        .selection(selection)
        .interactive(true)
        .build()
        .render()
        .map(Html)
        .map_err(|error| {
            error!("failed to render the dashboard: {error:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

#[instrument(skip_all)]
async fn get_series_chart(State(state): State<Arc<AppState>>) -> Json<Figure> {
    Json(build_series_chart(&state.snapshot.series))
}

#[instrument(skip_all)]
async fn get_distribution_chart(State(state): State<Arc<AppState>>) -> Json<Figure> {
    Json(build_distribution_chart(&state.snapshot.distribution))
}

#[instrument(skip_all, fields(year = selection.year, month = selection.month))]
async fn get_heatmap_chart(
    State(state): State<Arc<AppState>>,
    Query(selection): Query<Selection>,
) -> Result<Json<Arc<Figure>>, StatusCode> {
    match selection.validated() {
        Ok(selection) => Ok(Json(state.heatmap(selection))),
        Err(error) => {
            warn!("rejected the selection: {error:#}");
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::Request,
    };
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::core::{
        distribution::DistributionRow,
        headline::HeadlineRow,
        observation::PriceObservation,
        series::{SeriesPoint, SeriesTable},
    };

    fn state() -> Arc<AppState> {
        let snapshot = Snapshot {
            headline: vec![HeadlineRow { year: 2023, average_price: 101.26 }],
            series: SeriesTable::try_from_points(vec![SeriesPoint {
                date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                average_price: Some(50.0),
                rolling_mean_7: None,
                rolling_mean_30: None,
            }])
            .unwrap(),
            distribution: vec![
                DistributionRow::new("Jan", 100.0),
                DistributionRow::new("Jan", 4500.0),
            ],
            observations: vec![
                PriceObservation::new(2023, 1, 1, 1, 10.0),
                PriceObservation::new(2023, 1, 1, 0, 20.0),
                PriceObservation::new(2022, 1, 1, 0, 30.0),
            ],
        };
        Arc::new(AppState::new(snapshot))
    }

    async fn get(state: Arc<AppState>, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_heatmap() {
        let (status, body) = get(state(), "/charts/heatmap?year=2023&month=1").await;
        assert_eq!(status, StatusCode::OK);
        let figure: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(figure["data"][0]["type"], "heatmap");
        assert_eq!(figure["data"][0]["y"], json!(["0", "1"]));
        assert_eq!(figure["data"][0]["z"], json!([[20.0], [10.0]]));
    }

    #[tokio::test]
    async fn test_heatmap_rejects_unlisted_year() {
        let (status, _) = get(state(), "/charts/heatmap?year=2020&month=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_heatmap_rejects_malformed_query() {
        let (status, _) = get(state(), "/charts/heatmap?year=last&month=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_distribution() {
        let (status, body) = get(state(), "/charts/distribution").await;
        assert_eq!(status, StatusCode::OK);
        let figure: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(figure["data"][0]["y"], json!([100.0]));
    }

    #[tokio::test]
    async fn test_series() {
        let (status, body) = get(state(), "/charts/series").await;
        assert_eq!(status, StatusCode::OK);
        let figure: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(figure["data"].as_array().unwrap().len(), 3);
        assert_eq!(figure["data"][0]["x"], json!(["2023-01-01"]));
    }

    #[tokio::test]
    async fn test_index() {
        let (status, body) = get(state(), "/").await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("101.3"));
        assert!(html.contains(r#"<select id="year">"#));
    }

    #[test]
    fn test_heatmap_is_memoized() {
        let state = state();
        let selection = Selection::default();
        assert!(Arc::ptr_eq(&state.heatmap(selection), &state.heatmap(selection)));
        let other = Selection::try_new(2022, 1).unwrap();
        assert!(!Arc::ptr_eq(&state.heatmap(selection), &state.heatmap(other)));
    }
}
