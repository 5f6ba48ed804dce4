use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ClusterStatus, DatabaseStatus, GatewayStatus, LoadBalancerStatus, StaticSiteStatus};

/// Why a provider fetch failed
///
/// Definitive nonexistence is not a failure: kinds that model it return an
/// absent status instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("provider request failed: {0}")]
    Transport(String),

    #[error("provider returned HTTP {0}")]
    Upstream(u16),

    #[error("unexpected provider response: {0}")]
    Decode(String),

    #[error("{0}")]
    Provider(String),
}

/// Port for fetching compute cluster status
#[async_trait]
pub trait ClusterSource: Send + Sync {
    async fn fetch_status(&self, identifier: &str) -> Result<ClusterStatus, FetchError>;
}

/// Port for fetching relational database status
#[async_trait]
pub trait DatabaseSource: Send + Sync {
    async fn fetch_status(&self, identifier: &str) -> Result<DatabaseStatus, FetchError>;
}

/// Port for fetching load balancer status
#[async_trait]
pub trait LoadBalancerSource: Send + Sync {
    async fn fetch_status(&self, identifier: &str) -> Result<LoadBalancerStatus, FetchError>;
}

/// Port for fetching API gateway status
#[async_trait]
pub trait GatewaySource: Send + Sync {
    async fn fetch_status(&self, identifier: &str) -> Result<GatewayStatus, FetchError>;
}

/// Port for fetching static site deployment status
#[async_trait]
pub trait StaticSiteSource: Send + Sync {
    async fn fetch_status(&self, identifier: &str) -> Result<StaticSiteStatus, FetchError>;
}
