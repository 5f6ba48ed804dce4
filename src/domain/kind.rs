use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of monitored cloud resource
///
/// Closed set: every kind has exactly one provider route, and the catalog
/// rejects anything else at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Cluster,
    RelationalDatabase,
    LoadBalancer,
    ApiGateway,
    StaticSiteDeployment,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cluster => "cluster",
            Self::RelationalDatabase => "relational-database",
            Self::LoadBalancer => "load-balancer",
            Self::ApiGateway => "api-gateway",
            Self::StaticSiteDeployment => "static-site-deployment",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
