use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::ports::FetchError;

use super::ProviderEndpoint;

/// Thin JSON-over-HTTP client shared by the provider adapters
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    endpoint: ProviderEndpoint,
}

impl ProviderClient {
    pub fn new(http: reqwest::Client, endpoint: ProviderEndpoint) -> Self {
        Self { http, endpoint }
    }

    /// GET a JSON document from the provider.
    ///
    /// `Ok(None)` means the provider answered 404; each adapter decides
    /// whether that is a nonexistent resource or a fetch failure.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, FetchError> {
        let url = format!("{}{}", self.endpoint.base_url.trim_end_matches('/'), path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.endpoint.api_token)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(FetchError::Upstream(status.as_u16()));
        }

        let payload = response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(Some(payload))
    }
}
