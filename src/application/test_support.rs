//! Scripted provider sources for exercising the dispatcher, collector,
//! and snapshot service without any network.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ClusterStatus, DatabaseStatus, GatewayStatus, LoadBalancerStatus, StaticSiteStatus};
use crate::ports::{
    ClusterSource, DatabaseSource, FetchError, GatewaySource, LoadBalancerSource, StaticSiteSource,
};

use super::ProviderDispatcher;

type FetchFn<T> = Box<dyn Fn(&str) -> Result<T, FetchError> + Send + Sync>;

pub struct StubClusterSource(FetchFn<ClusterStatus>);

#[async_trait]
impl ClusterSource for StubClusterSource {
    async fn fetch_status(&self, identifier: &str) -> Result<ClusterStatus, FetchError> {
        (self.0)(identifier)
    }
}

pub struct StubDatabaseSource(FetchFn<DatabaseStatus>);

#[async_trait]
impl DatabaseSource for StubDatabaseSource {
    async fn fetch_status(&self, identifier: &str) -> Result<DatabaseStatus, FetchError> {
        (self.0)(identifier)
    }
}

pub struct StubLoadBalancerSource(FetchFn<LoadBalancerStatus>);

#[async_trait]
impl LoadBalancerSource for StubLoadBalancerSource {
    async fn fetch_status(&self, identifier: &str) -> Result<LoadBalancerStatus, FetchError> {
        (self.0)(identifier)
    }
}

pub struct StubGatewaySource(FetchFn<GatewayStatus>);

#[async_trait]
impl GatewaySource for StubGatewaySource {
    async fn fetch_status(&self, identifier: &str) -> Result<GatewayStatus, FetchError> {
        (self.0)(identifier)
    }
}

pub struct StubStaticSiteSource(FetchFn<StaticSiteStatus>);

#[async_trait]
impl StaticSiteSource for StubStaticSiteSource {
    async fn fetch_status(&self, identifier: &str) -> Result<StaticSiteStatus, FetchError> {
        (self.0)(identifier)
    }
}

/// Builder of a `ProviderDispatcher` over scripted sources. Any source a
/// test does not script errors loudly when reached.
pub struct StubProviders {
    pub clusters: Arc<dyn ClusterSource>,
    pub databases: Arc<dyn DatabaseSource>,
    pub load_balancers: Arc<dyn LoadBalancerSource>,
    pub gateways: Arc<dyn GatewaySource>,
    pub static_sites: Arc<dyn StaticSiteSource>,
}

impl StubProviders {
    pub fn new() -> Self {
        Self {
            clusters: Arc::new(StubClusterSource(Box::new(|id| {
                Err(FetchError::Provider(format!("unscripted cluster fetch for {id}")))
            }))),
            databases: Arc::new(StubDatabaseSource(Box::new(|id| {
                Err(FetchError::Provider(format!("unscripted database fetch for {id}")))
            }))),
            load_balancers: Arc::new(StubLoadBalancerSource(Box::new(|id| {
                Err(FetchError::Provider(format!("unscripted load balancer fetch for {id}")))
            }))),
            gateways: Arc::new(StubGatewaySource(Box::new(|id| {
                Err(FetchError::Provider(format!("unscripted gateway fetch for {id}")))
            }))),
            static_sites: Arc::new(StubStaticSiteSource(Box::new(|id| {
                Err(FetchError::Provider(format!("unscripted static site fetch for {id}")))
            }))),
        }
    }

    pub fn script_clusters(
        &mut self,
        f: impl Fn(&str) -> Result<ClusterStatus, FetchError> + Send + Sync + 'static,
    ) {
        self.clusters = Arc::new(StubClusterSource(Box::new(f)));
    }

    pub fn script_databases(
        &mut self,
        f: impl Fn(&str) -> Result<DatabaseStatus, FetchError> + Send + Sync + 'static,
    ) {
        self.databases = Arc::new(StubDatabaseSource(Box::new(f)));
    }

    pub fn script_load_balancers(
        &mut self,
        f: impl Fn(&str) -> Result<LoadBalancerStatus, FetchError> + Send + Sync + 'static,
    ) {
        self.load_balancers = Arc::new(StubLoadBalancerSource(Box::new(f)));
    }

    pub fn script_gateways(
        &mut self,
        f: impl Fn(&str) -> Result<GatewayStatus, FetchError> + Send + Sync + 'static,
    ) {
        self.gateways = Arc::new(StubGatewaySource(Box::new(f)));
    }

    pub fn script_static_sites(
        &mut self,
        f: impl Fn(&str) -> Result<StaticSiteStatus, FetchError> + Send + Sync + 'static,
    ) {
        self.static_sites = Arc::new(StubStaticSiteSource(Box::new(f)));
    }

    pub fn dispatcher(&self) -> Arc<ProviderDispatcher> {
        Arc::new(ProviderDispatcher::new(
            Arc::clone(&self.clusters),
            Arc::clone(&self.databases),
            Arc::clone(&self.load_balancers),
            Arc::clone(&self.gateways),
            Arc::clone(&self.static_sites),
        ))
    }
}
