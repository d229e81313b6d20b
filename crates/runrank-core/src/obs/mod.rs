//! Observability: runtime telemetry (metrics) and sink abstractions.
//!
//! The tracker itself never records anything; the host boundary in `udf`
//! turns lifecycle steps into `MetricsEvent`s.

pub(crate) mod metrics;
pub(crate) mod sink;

#[cfg(test)]
mod tests;

// re-exports
pub use metrics::{EventOps, EventReport};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
