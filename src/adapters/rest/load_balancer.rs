use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::LoadBalancerStatus;
use crate::ports::{FetchError, LoadBalancerSource};

use super::ProviderClient;

#[derive(Debug, Deserialize)]
struct LoadBalancerPayload {
    state: String,
    dns_name: String,
}

/// Load balancer source backed by the load balancing service's REST API
pub struct RestLoadBalancerSource {
    client: ProviderClient,
}

impl RestLoadBalancerSource {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LoadBalancerSource for RestLoadBalancerSource {
    async fn fetch_status(&self, identifier: &str) -> Result<LoadBalancerStatus, FetchError> {
        match self
            .client
            .get_json::<LoadBalancerPayload>(&format!("/v1/load-balancers/{identifier}"))
            .await?
        {
            Some(payload) => Ok(LoadBalancerStatus::new(payload.state, payload.dns_name)),
            None => Ok(LoadBalancerStatus::absent()),
        }
    }
}
