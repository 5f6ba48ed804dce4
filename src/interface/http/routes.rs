use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::application::{MetricsCollector, SnapshotService};
use crate::domain::Catalog;

use super::handlers::{metrics_handler, project_handler, snapshot_handler, AppState};

pub fn create_router(
    catalog: Arc<Catalog>,
    snapshots: Arc<SnapshotService>,
    collector: Arc<MetricsCollector>,
) -> Router {
    let state = AppState {
        catalog,
        snapshots,
        collector,
    };

    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/projects/{project}", get(project_handler))
        .route(
            "/projects/{project}/deployments/{deployment}/resources/{resource}/snapshot",
            get(snapshot_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
