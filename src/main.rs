use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stackwatch::adapters::rest::{self, RestAdapter, RestSettings};
use stackwatch::application::{MetricsCollector, ProviderDispatcher, SnapshotService};
use stackwatch::config::Config;
use stackwatch::domain::Catalog;
use stackwatch::interface::http::create_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("stackwatch={},tower_http=info", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting stackwatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", config);

    // Load the catalog; a bad catalog is fatal
    let catalog = match Catalog::load(&config.catalog_path) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            error!("failed to load catalog {}: {}", config.catalog_path.display(), e);
            return Err(e.into());
        }
    };
    info!("✓ Catalog loaded: {} project(s)", catalog.projects().len());

    // Every kind the catalog references needs its provider credentials
    if let Some(var) = rest::missing_provider_vars(&catalog).first() {
        error!("required environment variable {} is not set", var);
        return Err(format!("required environment variable {var} is not set").into());
    }

    // Initialize provider adapters
    let http = reqwest::Client::builder()
        .user_agent(concat!("stackwatch/", env!("CARGO_PKG_VERSION")))
        .timeout(config.provider_timeout)
        .build()?;
    let providers = RestAdapter::new(http, RestSettings::from_env());

    let dispatcher = Arc::new(ProviderDispatcher::new(
        Arc::new(providers.cluster_source()),
        Arc::new(providers.database_source()),
        Arc::new(providers.load_balancer_source()),
        Arc::new(providers.gateway_source()),
        Arc::new(providers.static_site_source()),
    ));

    let snapshots = Arc::new(SnapshotService::new(Arc::clone(&catalog), Arc::clone(&dispatcher)));
    let collector = Arc::new(MetricsCollector::new(Arc::clone(&catalog), dispatcher));

    info!("✓ Status services initialized");

    // Create HTTP server
    let app = create_router(catalog, snapshots, collector);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("✓ stackwatch listening on {}", addr);
    info!("  → Metrics: http://localhost:{}/metrics", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
