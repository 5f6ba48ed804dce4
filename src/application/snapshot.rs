use std::sync::Arc;

use thiserror::Error;

use crate::domain::{Catalog, ResourceSnapshot};
use crate::ports::FetchError;

use super::ProviderDispatcher;

/// Why a snapshot lookup failed
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("project not found")]
    ProjectNotFound,

    #[error("deployment not found")]
    DeploymentNotFound,

    #[error("resource not found")]
    ResourceNotFound,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// On-demand lookup of one resource's live status
pub struct SnapshotService {
    catalog: Arc<Catalog>,
    dispatcher: Arc<ProviderDispatcher>,
}

impl SnapshotService {
    pub fn new(catalog: Arc<Catalog>, dispatcher: Arc<ProviderDispatcher>) -> Self {
        Self { catalog, dispatcher }
    }

    /// Resolve the three catalog names, then fetch exactly one status.
    /// Name resolution happens before any provider call.
    pub async fn resource_snapshot(
        &self,
        project: &str,
        deployment: &str,
        resource: &str,
    ) -> Result<ResourceSnapshot, SnapshotError> {
        let project = self
            .catalog
            .find_project(project)
            .ok_or(SnapshotError::ProjectNotFound)?;
        let deployment = project
            .find_deployment(deployment)
            .ok_or(SnapshotError::DeploymentNotFound)?;
        let resource = deployment
            .find_resource(resource)
            .ok_or(SnapshotError::ResourceNotFound)?;

        let status = self.dispatcher.dispatch(resource).await?;
        Ok(ResourceSnapshot::new(resource.clone(), status))
    }
}
