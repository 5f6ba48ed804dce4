pub mod collector;
pub mod dispatcher;
pub mod snapshot;

#[cfg(test)]
pub mod test_support;

pub use collector::{DeploymentSummary, MetricsCollector, ScrapeReport, StatusSample};
pub use dispatcher::ProviderDispatcher;
pub use snapshot::{SnapshotError, SnapshotService};
