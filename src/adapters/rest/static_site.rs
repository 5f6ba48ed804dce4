use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::StaticSiteStatus;
use crate::ports::{FetchError, StaticSiteSource};

use super::ProviderClient;

/// Wire format of the site hosting service: health is judged from the
/// latest deployment of the site.
#[derive(Debug, Deserialize)]
struct SitePayload {
    latest_deployment: Option<DeploymentPayload>,
}

#[derive(Debug, Deserialize)]
struct DeploymentPayload {
    status: String,
    url: String,
}

/// Static site source backed by the site hosting service's REST API
pub struct RestStaticSiteSource {
    client: ProviderClient,
}

impl RestStaticSiteSource {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StaticSiteSource for RestStaticSiteSource {
    async fn fetch_status(&self, identifier: &str) -> Result<StaticSiteStatus, FetchError> {
        let payload = match self
            .client
            .get_json::<SitePayload>(&format!("/v1/sites/{identifier}"))
            .await?
        {
            Some(payload) => payload,
            None => return Ok(StaticSiteStatus::absent()),
        };

        // A site that was never deployed has no status to report.
        let deployment = payload
            .latest_deployment
            .ok_or_else(|| FetchError::Provider(format!("site {identifier} has no deployments")))?;

        Ok(StaticSiteStatus::new(deployment.status, deployment.url))
    }
}
