use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::GatewayStatus;
use crate::ports::{FetchError, GatewaySource};

use super::ProviderClient;

#[derive(Debug, Deserialize)]
struct GatewayPayload {
    endpoint: String,
    protocol: String,
}

/// API gateway source backed by the gateway service's REST API
pub struct RestGatewaySource {
    client: ProviderClient,
}

impl RestGatewaySource {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GatewaySource for RestGatewaySource {
    async fn fetch_status(&self, identifier: &str) -> Result<GatewayStatus, FetchError> {
        // Gateways have no absent state in the model: an unknown name means
        // the catalog and the provider disagree.
        let payload: GatewayPayload = self
            .client
            .get_json(&format!("/v1/gateways/{identifier}"))
            .await?
            .ok_or_else(|| FetchError::Provider(format!("no gateway named {identifier}")))?;

        Ok(GatewayStatus::new(payload.endpoint, payload.protocol))
    }
}
