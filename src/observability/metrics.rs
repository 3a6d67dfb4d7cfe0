//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): tracking requests by response status
//! - `relay_request_duration_seconds` (histogram): handler latency
//! - `relay_upstream_lookups_total` (counter): aggregator lookups by outcome
//! - `relay_fallback_records_total` (counter): synthetic records by status
//! - `relay_carrier_detections_total` (counter): detector results by carrier

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            register_metrics();
            tracing::info!(address = %addr, "Metrics endpoint listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Prometheus recorder");
        }
    }
}

/// Register metric descriptions. Called once after the recorder is installed.
pub fn register_metrics() {
    describe_counter!("relay_requests_total", "Tracking requests by response status");
    describe_histogram!(
        "relay_request_duration_seconds",
        "Tracking request handling latency in seconds"
    );
    describe_counter!(
        "relay_upstream_lookups_total",
        "Aggregator lookups by outcome"
    );
    describe_counter!(
        "relay_fallback_records_total",
        "Synthetic tracking records served, by status"
    );
    describe_counter!(
        "relay_carrier_detections_total",
        "Carrier detector results by carrier"
    );
}

pub fn record_request(status: u16, start: Instant) {
    metrics::counter!("relay_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("relay_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_upstream_lookup(outcome: &'static str) {
    metrics::counter!("relay_upstream_lookups_total", "outcome" => outcome).increment(1);
}

pub fn record_fallback(status: &str) {
    metrics::counter!("relay_fallback_records_total", "status" => status.to_string()).increment(1);
}

pub fn record_detection(carrier: &str) {
    metrics::counter!("relay_carrier_detections_total", "carrier" => carrier.to_string())
        .increment(1);
}
