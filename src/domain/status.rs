use chrono::{DateTime, Utc};
use serde::Serialize;

/// One service scheduled on a compute cluster
#[derive(Debug, Clone, Serialize)]
pub struct ClusterService {
    pub name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub desired_count: u32,
    pub pending_count: u32,
    pub running_count: u32,
}

/// Compute cluster status
///
/// A cluster the provider could describe always exists; nonexistence
/// surfaces as a fetch error instead.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterStatus {
    pub status: String,
    pub tasks_pending: u32,
    pub tasks_running: u32,
    pub services: Vec<ClusterService>,
}

impl ClusterStatus {
    pub fn new(
        status: impl Into<String>,
        tasks_pending: u32,
        tasks_running: u32,
        services: Vec<ClusterService>,
    ) -> Self {
        Self {
            status: status.into(),
            tasks_pending,
            tasks_running,
            services,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "ACTIVE"
    }
}

/// Relational database instance status
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseStatus {
    pub exists: bool,
    pub status: String,
    pub instance_class: String,
}

impl DatabaseStatus {
    pub fn new(status: impl Into<String>, instance_class: impl Into<String>) -> Self {
        Self {
            exists: true,
            status: status.into(),
            instance_class: instance_class.into(),
        }
    }

    pub fn absent() -> Self {
        Self {
            exists: false,
            status: String::new(),
            instance_class: String::new(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.exists && self.status == "available"
    }
}

/// Load balancer status
#[derive(Debug, Clone, Serialize)]
pub struct LoadBalancerStatus {
    pub exists: bool,
    pub state: String,
    pub dns_name: String,
}

impl LoadBalancerStatus {
    pub fn new(state: impl Into<String>, dns_name: impl Into<String>) -> Self {
        Self {
            exists: true,
            state: state.into(),
            dns_name: dns_name.into(),
        }
    }

    pub fn absent() -> Self {
        Self {
            exists: false,
            state: String::new(),
            dns_name: String::new(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.exists && self.state == "active"
    }
}

/// API gateway status
///
/// The provider exposes no lifecycle state for gateways: one that resolves
/// is serving, so existence implies health.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayStatus {
    pub endpoint: String,
    pub protocol: String,
}

impl GatewayStatus {
    pub fn new(endpoint: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            protocol: protocol.into(),
        }
    }
}

/// Static site deployment status (latest deployment of the site)
#[derive(Debug, Clone, Serialize)]
pub struct StaticSiteStatus {
    pub exists: bool,
    pub status: String,
    pub url: String,
}

impl StaticSiteStatus {
    pub fn new(status: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            exists: true,
            status: status.into(),
            url: url.into(),
        }
    }

    pub fn absent() -> Self {
        Self {
            exists: false,
            status: String::new(),
            url: String::new(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.exists && self.status == "success"
    }
}

/// Normalized status of any monitored resource
///
/// Serializes untagged: the JSON body is the per-kind struct directly,
/// which is what the snapshot endpoint promises its consumers.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResourceStatus {
    Cluster(ClusterStatus),
    Database(DatabaseStatus),
    LoadBalancer(LoadBalancerStatus),
    Gateway(GatewayStatus),
    StaticSite(StaticSiteStatus),
}

impl ResourceStatus {
    /// Whether the provider confirmed the resource exists
    pub fn exists(&self) -> bool {
        match self {
            Self::Cluster(_) => true,
            Self::Database(s) => s.exists,
            Self::LoadBalancer(s) => s.exists,
            Self::Gateway(_) => true,
            Self::StaticSite(s) => s.exists,
        }
    }

    /// Whether the resource is in its kind's healthy state.
    /// A nonexistent resource is never healthy.
    pub fn is_healthy(&self) -> bool {
        match self {
            Self::Cluster(s) => s.is_healthy(),
            Self::Database(s) => s.is_healthy(),
            Self::LoadBalancer(s) => s.is_healthy(),
            Self::Gateway(_) => true,
            Self::StaticSite(s) => s.is_healthy(),
        }
    }

    /// Provider-reported status string, used as the metrics label value
    pub fn status_label(&self) -> &str {
        match self {
            Self::Cluster(s) => &s.status,
            Self::Database(s) => &s.status,
            Self::LoadBalancer(s) => &s.state,
            Self::Gateway(_) => "active",
            Self::StaticSite(s) => &s.status,
        }
    }
}
