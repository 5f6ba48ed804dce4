use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::warn;

use crate::domain::{Catalog, ResourceKind};

use super::ProviderDispatcher;

/// One per-resource observation from a scrape.
/// `value` is 1.0 when healthy, 0.0 otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSample {
    pub project: String,
    pub deployment: String,
    pub resource: String,
    pub kind: ResourceKind,
    pub status: String,
    pub value: f64,
}

/// Per-deployment tally for one scrape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentSummary {
    pub project: String,
    pub deployment: String,
    pub total_resources: usize,
    pub healthy_resources: usize,
    pub failed_fetch_resources: usize,
}

/// Everything one scrape produced
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub samples: Vec<StatusSample>,
    pub summaries: Vec<DeploymentSummary>,
}

/// Walks the whole catalog and turns live provider answers into samples
/// and per-deployment summaries
pub struct MetricsCollector {
    catalog: Arc<Catalog>,
    dispatcher: Arc<ProviderDispatcher>,
}

impl MetricsCollector {
    pub fn new(catalog: Arc<Catalog>, dispatcher: Arc<ProviderDispatcher>) -> Self {
        Self { catalog, dispatcher }
    }

    /// Run one scrape.
    ///
    /// Deployments are walked sequentially; within a deployment every
    /// resource is fetched concurrently and the results are reduced here as
    /// the tasks complete. The summary is built only after the join barrier:
    /// every spawned fetch has been drained.
    pub async fn collect(&self) -> ScrapeReport {
        let mut report = ScrapeReport {
            samples: Vec::new(),
            summaries: Vec::new(),
        };

        for project in self.catalog.projects() {
            for deployment in &project.deployments {
                let total = deployment.resources.len();
                let mut healthy = 0;
                let mut failed = 0;

                let mut fetches = JoinSet::new();
                for resource in &deployment.resources {
                    let dispatcher = Arc::clone(&self.dispatcher);
                    let resource = resource.clone();
                    fetches.spawn(async move {
                        let outcome = dispatcher.dispatch(&resource).await;
                        (resource, outcome)
                    });
                }

                while let Some(joined) = fetches.join_next().await {
                    let (resource, outcome) = match joined {
                        Ok(pair) => pair,
                        Err(e) => {
                            // A panicked fetch task counts as a failed fetch.
                            warn!(
                                "status fetch task for {}/{} aborted: {}",
                                project.name, deployment.name, e
                            );
                            failed += 1;
                            continue;
                        }
                    };

                    match outcome {
                        Ok(status) => {
                            // A resource the provider says does not exist
                            // emits no sample and counts in neither the
                            // healthy nor the failed tally.
                            if !status.exists() {
                                continue;
                            }
                            let is_healthy = status.is_healthy();
                            if is_healthy {
                                healthy += 1;
                            }
                            report.samples.push(StatusSample {
                                project: project.name.clone(),
                                deployment: deployment.name.clone(),
                                resource: resource.name,
                                kind: resource.kind,
                                status: status.status_label().to_string(),
                                value: if is_healthy { 1.0 } else { 0.0 },
                            });
                        }
                        Err(e) => {
                            warn!(
                                "failed to fetch status of {}/{}/{}: {}",
                                project.name, deployment.name, resource.name, e
                            );
                            failed += 1;
                        }
                    }
                }

                report.summaries.push(DeploymentSummary {
                    project: project.name.clone(),
                    deployment: deployment.name.clone(),
                    total_resources: total,
                    healthy_resources: healthy,
                    failed_fetch_resources: failed,
                });
            }
        }

        report
    }
}
