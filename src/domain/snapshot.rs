use serde::Serialize;

use super::{ResourceDefinition, ResourceStatus};

/// Point-in-time view of one resource: its catalog definition, the status
/// the provider just reported, and the flags derived from that status.
/// Built per request and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceSnapshot {
    pub definition: ResourceDefinition,
    pub status: ResourceStatus,
    pub healthy: bool,
    pub exists: bool,
}

impl ResourceSnapshot {
    pub fn new(definition: ResourceDefinition, status: ResourceStatus) -> Self {
        let healthy = status.is_healthy();
        let exists = status.exists();
        Self {
            definition,
            status,
            healthy,
            exists,
        }
    }
}
