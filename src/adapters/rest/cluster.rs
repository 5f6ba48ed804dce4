use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{ClusterService, ClusterStatus};
use crate::ports::{ClusterSource, FetchError};

use super::ProviderClient;

/// Wire format of the cluster manager's describe endpoint
#[derive(Debug, Deserialize)]
struct ClusterPayload {
    status: String,
    tasks_pending: u32,
    tasks_running: u32,
    #[serde(default)]
    services: Vec<ServicePayload>,
}

#[derive(Debug, Deserialize)]
struct ServicePayload {
    name: String,
    status: String,
    created_at: DateTime<Utc>,
    desired_count: u32,
    pending_count: u32,
    running_count: u32,
}

/// Compute cluster source backed by the cluster manager's REST API
pub struct RestClusterSource {
    client: ProviderClient,
}

impl RestClusterSource {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterSource for RestClusterSource {
    async fn fetch_status(&self, identifier: &str) -> Result<ClusterStatus, FetchError> {
        // The describe endpoint knowing nothing about the cluster is a
        // configuration fault, not an observable "absent" state.
        let payload: ClusterPayload = self
            .client
            .get_json(&format!("/v1/clusters/{identifier}"))
            .await?
            .ok_or_else(|| FetchError::Provider(format!("no cluster named {identifier}")))?;

        let services = payload
            .services
            .into_iter()
            .map(|service| ClusterService {
                name: service.name,
                status: service.status,
                created_at: service.created_at,
                desired_count: service.desired_count,
                pending_count: service.pending_count,
                running_count: service.running_count,
            })
            .collect();

        Ok(ClusterStatus::new(
            payload.status,
            payload.tasks_pending,
            payload.tasks_running,
            services,
        ))
    }
}
