use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::DatabaseStatus;
use crate::ports::{DatabaseSource, FetchError};

use super::ProviderClient;

#[derive(Debug, Deserialize)]
struct DatabasePayload {
    status: String,
    instance_class: String,
}

/// Relational database source backed by the database service's REST API
pub struct RestDatabaseSource {
    client: ProviderClient,
}

impl RestDatabaseSource {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DatabaseSource for RestDatabaseSource {
    async fn fetch_status(&self, identifier: &str) -> Result<DatabaseStatus, FetchError> {
        match self
            .client
            .get_json::<DatabasePayload>(&format!("/v1/databases/{identifier}"))
            .await?
        {
            Some(payload) => Ok(DatabaseStatus::new(payload.status, payload.instance_class)),
            // 404 is the provider's way of saying the instance is gone.
            None => Ok(DatabaseStatus::absent()),
        }
    }
}
