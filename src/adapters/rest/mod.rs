mod client;
mod cluster;
mod database;
mod gateway;
mod load_balancer;
mod static_site;

use std::env;
use std::fmt;

pub use client::ProviderClient;
pub use cluster::RestClusterSource;
pub use database::RestDatabaseSource;
pub use gateway::RestGatewaySource;
pub use load_balancer::RestLoadBalancerSource;
pub use static_site::RestStaticSiteSource;

use crate::domain::{Catalog, ResourceKind};

const CLUSTER_VARS: [&str; 2] = ["STACKWATCH_CLUSTER_API_URL", "STACKWATCH_CLUSTER_API_TOKEN"];
const DATABASE_VARS: [&str; 2] = ["STACKWATCH_DATABASE_API_URL", "STACKWATCH_DATABASE_API_TOKEN"];
const LOAD_BALANCER_VARS: [&str; 2] = [
    "STACKWATCH_LOAD_BALANCER_API_URL",
    "STACKWATCH_LOAD_BALANCER_API_TOKEN",
];
const GATEWAY_VARS: [&str; 2] = ["STACKWATCH_GATEWAY_API_URL", "STACKWATCH_GATEWAY_API_TOKEN"];
const STATIC_SITE_VARS: [&str; 2] = [
    "STACKWATCH_STATIC_SITE_API_URL",
    "STACKWATCH_STATIC_SITE_API_TOKEN",
];

/// Environment variables carrying a kind's provider endpoint and credential
pub fn provider_vars(kind: ResourceKind) -> [&'static str; 2] {
    match kind {
        ResourceKind::Cluster => CLUSTER_VARS,
        ResourceKind::RelationalDatabase => DATABASE_VARS,
        ResourceKind::LoadBalancer => LOAD_BALANCER_VARS,
        ResourceKind::ApiGateway => GATEWAY_VARS,
        ResourceKind::StaticSiteDeployment => STATIC_SITE_VARS,
    }
}

/// Variables the catalog's resource kinds require but which are unset.
/// Kinds the catalog never references need no credentials.
pub fn missing_provider_vars(catalog: &Catalog) -> Vec<&'static str> {
    let mut missing = Vec::new();
    for kind in catalog.resource_kinds() {
        for var in provider_vars(kind) {
            if env::var(var).is_err() && !missing.contains(&var) {
                missing.push(var);
            }
        }
    }
    missing
}

/// Where one provider service lives and how to authenticate against it
#[derive(Clone)]
pub struct ProviderEndpoint {
    pub base_url: String,
    pub api_token: String,
}

impl ProviderEndpoint {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
        }
    }

    fn from_env(vars: [&str; 2]) -> Self {
        Self {
            base_url: env::var(vars[0]).unwrap_or_default(),
            api_token: env::var(vars[1]).unwrap_or_default(),
        }
    }
}

// Manual Debug so the token never reaches logs.
impl fmt::Debug for ProviderEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEndpoint")
            .field("base_url", &self.base_url)
            .field("api_token", &"***")
            .finish()
    }
}

/// Endpoint settings for every provider service
#[derive(Debug, Clone)]
pub struct RestSettings {
    pub cluster: ProviderEndpoint,
    pub database: ProviderEndpoint,
    pub load_balancer: ProviderEndpoint,
    pub gateway: ProviderEndpoint,
    pub static_site: ProviderEndpoint,
}

impl RestSettings {
    /// Read every endpoint from the environment. Unset variables become
    /// empty values; `missing_provider_vars` reports the ones a given
    /// catalog actually needs before any request is made.
    pub fn from_env() -> Self {
        Self {
            cluster: ProviderEndpoint::from_env(CLUSTER_VARS),
            database: ProviderEndpoint::from_env(DATABASE_VARS),
            load_balancer: ProviderEndpoint::from_env(LOAD_BALANCER_VARS),
            gateway: ProviderEndpoint::from_env(GATEWAY_VARS),
            static_site: ProviderEndpoint::from_env(STATIC_SITE_VARS),
        }
    }
}

/// Bundle of provider sources sharing one HTTP client
#[derive(Debug, Clone)]
pub struct RestAdapter {
    http: reqwest::Client,
    settings: RestSettings,
}

impl RestAdapter {
    pub fn new(http: reqwest::Client, settings: RestSettings) -> Self {
        Self { http, settings }
    }

    pub fn cluster_source(&self) -> RestClusterSource {
        RestClusterSource::new(ProviderClient::new(self.http.clone(), self.settings.cluster.clone()))
    }

    pub fn database_source(&self) -> RestDatabaseSource {
        RestDatabaseSource::new(ProviderClient::new(self.http.clone(), self.settings.database.clone()))
    }

    pub fn load_balancer_source(&self) -> RestLoadBalancerSource {
        RestLoadBalancerSource::new(ProviderClient::new(
            self.http.clone(),
            self.settings.load_balancer.clone(),
        ))
    }

    pub fn gateway_source(&self) -> RestGatewaySource {
        RestGatewaySource::new(ProviderClient::new(self.http.clone(), self.settings.gateway.clone()))
    }

    pub fn static_site_source(&self) -> RestStaticSiteSource {
        RestStaticSiteSource::new(ProviderClient::new(
            self.http.clone(),
            self.settings.static_site.clone(),
        ))
    }
}
