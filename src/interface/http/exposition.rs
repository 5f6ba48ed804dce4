//! Prometheus text exposition rendering for scrape reports.
//!
//! Every sample is scoped to one scrape, so the report is rendered directly
//! instead of going through a stateful metrics registry.

use crate::application::{DeploymentSummary, ScrapeReport};

/// Content type of the text exposition format
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Render one scrape report in the Prometheus text format
pub fn render(report: &ScrapeReport) -> String {
    let mut out = String::new();

    summary_block(
        &mut out,
        "resources_total",
        "Number of resources in a deployment",
        &report.summaries,
        |s| s.total_resources,
    );
    summary_block(
        &mut out,
        "resources_healthy",
        "Number of healthy resources in a deployment",
        &report.summaries,
        |s| s.healthy_resources,
    );
    summary_block(
        &mut out,
        "resources_failed_fetch",
        "Number of resources whose status could not be fetched",
        &report.summaries,
        |s| s.failed_fetch_resources,
    );

    out.push_str("# HELP resource_status Health of a resource, labeled with its provider-reported status\n");
    out.push_str("# TYPE resource_status gauge\n");
    for sample in &report.samples {
        out.push_str(&format!(
            "resource_status{{project=\"{}\",deployment=\"{}\",resource=\"{}\",kind=\"{}\",status=\"{}\"}} {}\n",
            escape_label(&sample.project),
            escape_label(&sample.deployment),
            escape_label(&sample.resource),
            sample.kind.as_str(),
            escape_label(&sample.status),
            sample.value,
        ));
    }

    out
}

fn summary_block(
    out: &mut String,
    name: &str,
    help: &str,
    summaries: &[DeploymentSummary],
    value: impl Fn(&DeploymentSummary) -> usize,
) {
    out.push_str(&format!("# HELP {name} {help}\n"));
    out.push_str(&format!("# TYPE {name} gauge\n"));
    for summary in summaries {
        out.push_str(&format!(
            "{name}{{project=\"{}\",deployment=\"{}\"}} {}\n",
            escape_label(&summary.project),
            escape_label(&summary.deployment),
            value(summary),
        ));
    }
}

// Label value escaping per the exposition format: backslash, double quote,
// and line feed.
fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
