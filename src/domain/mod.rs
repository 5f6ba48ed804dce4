pub mod catalog;
pub mod kind;
pub mod snapshot;
pub mod status;

pub use catalog::{Catalog, CatalogError, DeploymentDefinition, ProjectDefinition, ResourceDefinition};
pub use kind::ResourceKind;
pub use snapshot::ResourceSnapshot;
pub use status::{
    ClusterService, ClusterStatus, DatabaseStatus, GatewayStatus, LoadBalancerStatus, ResourceStatus,
    StaticSiteStatus,
};
