use std::sync::Arc;

use axum::{
    debug_handler,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::application::{MetricsCollector, SnapshotError, SnapshotService};
use crate::domain::{Catalog, ProjectDefinition};

use super::exposition;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub snapshots: Arc<SnapshotService>,
    pub collector: Arc<MetricsCollector>,
}

/// Response for GET /projects/{project}
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: ProjectDefinition,
}

/// Handler for GET /projects/{project}
pub async fn project_handler(State(state): State<AppState>, Path(project): Path<String>) -> Response {
    match state.catalog.find_project(&project) {
        Some(definition) => (
            StatusCode::OK,
            Json(ProjectResponse {
                project: definition.clone(),
            }),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "project not found").into_response(),
    }
}

/// Handler for GET /projects/{project}/deployments/{deployment}/resources/{resource}/snapshot
#[debug_handler]
pub async fn snapshot_handler(
    State(state): State<AppState>,
    Path((project, deployment, resource)): Path<(String, String, String)>,
) -> Response {
    match state
        .snapshots
        .resource_snapshot(&project, &deployment, &resource)
        .await
    {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(err) => snapshot_error_response(err),
    }
}

// Lookup misses are routine 404s; only provider failures are faults worth
// logging, and their detail stays out of the response body.
fn snapshot_error_response(err: SnapshotError) -> Response {
    match err {
        SnapshotError::ProjectNotFound
        | SnapshotError::DeploymentNotFound
        | SnapshotError::ResourceNotFound => (StatusCode::NOT_FOUND, err.to_string()).into_response(),
        SnapshotError::Fetch(e) => {
            error!("error getting resource status: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to get resource status").into_response()
        }
    }
}

/// Handler for GET /metrics
#[debug_handler]
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    let report = state.collector.collect().await;
    let body = exposition::render(&report);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, exposition::CONTENT_TYPE)],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::application::test_support::StubProviders;
    use crate::application::ProviderDispatcher;
    use crate::domain::{DatabaseStatus, GatewayStatus};
    use crate::interface::http::create_router;
    use crate::ports::FetchError;

    const CATALOG_JSON: &str = r#"[
        {
            "name": "web",
            "deployments": [
                {
                    "name": "prod",
                    "resources": [
                        { "name": "api", "identifier": "prod-api-gw", "kind": "api-gateway" },
                        { "name": "db", "identifier": "prod-db-01", "kind": "relational-database" }
                    ]
                }
            ]
        }
    ]"#;

    fn app_with(dispatcher: Arc<ProviderDispatcher>) -> axum::Router {
        let catalog = Arc::new(Catalog::from_json(CATALOG_JSON).unwrap());
        let snapshots = Arc::new(SnapshotService::new(Arc::clone(&catalog), Arc::clone(&dispatcher)));
        let collector = Arc::new(MetricsCollector::new(Arc::clone(&catalog), dispatcher));
        create_router(catalog, snapshots, collector)
    }

    fn healthy_app() -> axum::Router {
        let mut providers = StubProviders::new();
        providers.script_gateways(|_| Ok(GatewayStatus::new("https://api.example.com", "HTTP")));
        providers.script_databases(|_| Ok(DatabaseStatus::new("available", "db.t3.micro")));
        app_with(providers.dispatcher())
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_get_project_returns_definition() {
        let (status, body) = get(healthy_app(), "/projects/web").await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["project"]["name"], "web");
        assert_eq!(value["project"]["deployments"][0]["name"], "prod");
    }

    #[tokio::test]
    async fn test_get_unknown_project_is_404() {
        let (status, body) = get(healthy_app(), "/projects/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "project not found");
    }

    #[tokio::test]
    async fn test_get_snapshot_of_known_resource() {
        let (status, body) = get(
            healthy_app(),
            "/projects/web/deployments/prod/resources/db/snapshot",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["definition"]["identifier"], "prod-db-01");
        assert_eq!(value["status"]["status"], "available");
        assert_eq!(value["healthy"], true);
    }

    #[tokio::test]
    async fn test_snapshot_404_names_the_failing_level() {
        let app = healthy_app();
        let (status, body) = get(app.clone(), "/projects/web/deployments/qa/resources/db/snapshot").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "deployment not found");

        let (status, body) = get(app, "/projects/web/deployments/prod/resources/cache/snapshot").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "resource not found");
    }

    #[tokio::test]
    async fn test_snapshot_fetch_failure_is_500_without_detail() {
        let mut providers = StubProviders::new();
        providers.script_databases(|_| Err(FetchError::Upstream(503)));
        let app = app_with(providers.dispatcher());

        let (status, body) = get(app, "/projects/web/deployments/prod/resources/db/snapshot").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "failed to get resource status");
    }

    #[tokio::test]
    async fn test_metrics_renders_text_exposition() {
        let response = healthy_app()
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; version=0.0.4"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("# TYPE resources_total gauge"));
        assert!(body.contains("resources_total{project=\"web\",deployment=\"prod\"} 2"));
        assert!(body.contains("resources_healthy{project=\"web\",deployment=\"prod\"} 2"));
        assert!(body.contains("resources_failed_fetch{project=\"web\",deployment=\"prod\"} 0"));
        assert!(body.contains(
            "resource_status{project=\"web\",deployment=\"prod\",resource=\"db\",kind=\"relational-database\",status=\"available\"} 1"
        ));
    }
}
