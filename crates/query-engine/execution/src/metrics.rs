//! Metrics setup and update for query execution.

use prometheus::core::{AtomicU64, GenericCounter};
use prometheus::Histogram;

#[derive(Debug, Clone)]
pub struct Metrics {
    pub query_total: GenericCounter<AtomicU64>,
    pub validation_error_total: GenericCounter<AtomicU64>,
    pub execution_error_total: GenericCounter<AtomicU64>,
    pub total_count_total: GenericCounter<AtomicU64>,
    pub query_execution_seconds: Histogram,
}

impl Metrics {
    /// Set up counters and histograms used to produce Prometheus metrics
    pub fn initialize(metrics_registry: &mut prometheus::Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "querygate_query_total",
            "Total successful queries.",
        )?;

        let validation_error_total = add_int_counter_metric(
            metrics_registry,
            "querygate_validation_error_total",
            "Total requests rejected by validation or by a toggle.",
        )?;

        let execution_error_total = add_int_counter_metric(
            metrics_registry,
            "querygate_execution_error_total",
            "Total requests that failed while running against the backend.",
        )?;

        let total_count_total = add_int_counter_metric(
            metrics_registry,
            "querygate_total_count_total",
            "Total successful queries that also counted every matching row.",
        )?;

        let query_execution_seconds = add_histogram_metric(
            metrics_registry,
            "querygate_query_execution_seconds",
            "The time taken to run a query against the backend, including the count.",
        )?;

        Ok(Self {
            query_total,
            validation_error_total,
            execution_error_total,
            total_count_total,
            query_execution_seconds,
        })
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericCounter<AtomicU64>, prometheus::Error> {
    let int_counter =
        prometheus::IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}

/// Create a new histogram metric using the default buckets, and register it with the provided
/// Prometheus Registry
fn add_histogram_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<Histogram, prometheus::Error> {
    let histogram = Histogram::with_opts(prometheus::HistogramOpts::new(
        metric_name,
        metric_description,
    ))?;
    metrics_registry.register(Box::new(histogram.clone()))?;
    Ok(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_metric_once() {
        let mut registry = prometheus::Registry::new();
        let metrics = Metrics::initialize(&mut registry).unwrap();
        metrics.query_total.inc();
        metrics.query_execution_seconds.observe(0.5);

        let names: Vec<String> = registry
            .gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "querygate_execution_error_total",
                "querygate_query_execution_seconds",
                "querygate_query_total",
                "querygate_total_count_total",
                "querygate_validation_error_total",
            ]
        );

        assert!(Metrics::initialize(&mut registry).is_err());
    }
}
