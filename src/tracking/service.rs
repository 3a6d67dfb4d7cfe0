//! Per-request tracking orchestration.
//!
//! # States
//! ```text
//! detect_carrier (only when the caller gave none)
//!     → enrich_from_upstream (only with credentials and a resolved carrier)
//!     → fallback (only when the aggregator had nothing)
//!     → normalize (always)
//! ```

use std::sync::Arc;

use crate::carrier::{detect, CarrierCode};
use crate::observability::metrics;
use crate::tracking::clock::Clock;
use crate::tracking::fallback;
use crate::tracking::normalizer::{normalize, TrackingSource};
use crate::tracking::types::TrackingRecord;
use crate::upstream::UpstreamClient;

/// Builds one tracking record per query.
#[derive(Debug, Clone)]
pub struct TrackingService {
    upstream: UpstreamClient,
    clock: Arc<dyn Clock>,
}

impl TrackingService {
    pub fn new(upstream: UpstreamClient, clock: Arc<dyn Clock>) -> Self {
        Self { upstream, clock }
    }

    /// Resolve the carrier: the caller's code if given, otherwise detection.
    pub fn resolve_carrier(&self, tracking_number: &str, carrier: Option<&str>) -> CarrierCode {
        match carrier.and_then(CarrierCode::from_caller) {
            Some(code) => code,
            None => {
                let code = detect(tracking_number);
                metrics::record_detection(code.as_str());
                tracing::debug!(tracking_number = %tracking_number, carrier = %code, "Detected carrier");
                code
            }
        }
    }

    /// Produce the record for a validated, non-empty tracking number.
    pub async fn track(&self, tracking_number: &str, carrier: Option<&str>) -> TrackingRecord {
        let carrier = self.resolve_carrier(tracking_number, carrier);
        let now = self.clock.now();

        let upstream = if carrier.is_resolved() && self.upstream.is_configured() {
            self.upstream.lookup(tracking_number, &carrier).await
        } else {
            None
        };

        let source = match upstream {
            Some(record) => TrackingSource::Upstream(record),
            None => {
                let synthetic = fallback::generate(tracking_number, carrier.clone(), now);
                metrics::record_fallback(synthetic.status.as_str());
                tracing::debug!(
                    tracking_number = %tracking_number,
                    status = %synthetic.status,
                    "Serving synthetic timeline"
                );
                TrackingSource::Synthetic(synthetic)
            }
        };

        normalize(source, tracking_number, carrier, now)
    }
}
