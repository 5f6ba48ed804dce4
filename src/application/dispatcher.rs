use std::sync::Arc;

use crate::domain::{ResourceDefinition, ResourceKind, ResourceStatus};
use crate::ports::{
    ClusterSource, DatabaseSource, FetchError, GatewaySource, LoadBalancerSource, StaticSiteSource,
};

/// Routes a resource definition to the provider source for its kind
pub struct ProviderDispatcher {
    clusters: Arc<dyn ClusterSource>,
    databases: Arc<dyn DatabaseSource>,
    load_balancers: Arc<dyn LoadBalancerSource>,
    gateways: Arc<dyn GatewaySource>,
    static_sites: Arc<dyn StaticSiteSource>,
}

impl ProviderDispatcher {
    pub fn new(
        clusters: Arc<dyn ClusterSource>,
        databases: Arc<dyn DatabaseSource>,
        load_balancers: Arc<dyn LoadBalancerSource>,
        gateways: Arc<dyn GatewaySource>,
        static_sites: Arc<dyn StaticSiteSource>,
    ) -> Self {
        Self {
            clusters,
            databases,
            load_balancers,
            gateways,
            static_sites,
        }
    }

    /// Fetch the current status of one resource from its provider.
    ///
    /// The match is exhaustive over `ResourceKind`: a kind without a
    /// provider route cannot compile, so there is no unknown-kind path.
    pub async fn dispatch(&self, resource: &ResourceDefinition) -> Result<ResourceStatus, FetchError> {
        match resource.kind {
            ResourceKind::Cluster => {
                let status = self.clusters.fetch_status(&resource.identifier).await?;
                Ok(ResourceStatus::Cluster(status))
            }
            ResourceKind::RelationalDatabase => {
                let status = self.databases.fetch_status(&resource.identifier).await?;
                Ok(ResourceStatus::Database(status))
            }
            ResourceKind::LoadBalancer => {
                let status = self.load_balancers.fetch_status(&resource.identifier).await?;
                Ok(ResourceStatus::LoadBalancer(status))
            }
            ResourceKind::ApiGateway => {
                let status = self.gateways.fetch_status(&resource.identifier).await?;
                Ok(ResourceStatus::Gateway(status))
            }
            ResourceKind::StaticSiteDeployment => {
                let status = self.static_sites.fetch_status(&resource.identifier).await?;
                Ok(ResourceStatus::StaticSite(status))
            }
        }
    }
}
