//! Mapping of upstream and synthetic data onto the canonical record.
//!
//! Every record leaving here satisfies two rules: `events` is empty only when
//! the status is unknown, and the estimate is null only when the status is
//! delivered or unknown. Aggregator records that miss either are completed
//! from the fallback stage timeline. Pass-through codes such as `EXCEPTION`
//! are completed as if the parcel were in transit.

use chrono::{DateTime, Utc};

use crate::carrier::CarrierCode;
use crate::tracking::fallback::{self, LIFECYCLE};
use crate::tracking::types::{TrackingEvent, TrackingRecord, TrackingStatus};
use crate::upstream::{UpstreamEvent, UpstreamRecord};

/// Where a record's data came from.
#[derive(Debug, Clone)]
pub enum TrackingSource {
    /// Shipment returned by the aggregator.
    Upstream(UpstreamRecord),
    /// Placeholder built by the fallback generator.
    Synthetic(TrackingRecord),
    /// Nothing available.
    Absent,
}

/// Map an aggregator status code onto the canonical status.
///
/// Unrecognised codes pass through verbatim.
pub fn map_status(code: &str) -> TrackingStatus {
    match code.trim().to_ascii_uppercase().as_str() {
        "PRE_TRANSIT" | "LABEL_CREATED" | "AC" => TrackingStatus::PreTransit,
        "SHIPPED" | "ACCEPTED" => TrackingStatus::Shipped,
        "IN_TRANSIT" | "IT" => TrackingStatus::InTransit,
        "OUT_FOR_DELIVERY" => TrackingStatus::OutForDelivery,
        "DELIVERED" | "DE" => TrackingStatus::Delivered,
        "UNKNOWN" | "UN" => TrackingStatus::Unknown,
        _ => TrackingStatus::Other(code.to_string()),
    }
}

/// Produce exactly one canonical record for a query.
///
/// `now` anchors any stage events or estimate that have to be filled in.
pub fn normalize(
    source: TrackingSource,
    tracking_number: &str,
    carrier: CarrierCode,
    now: DateTime<Utc>,
) -> TrackingRecord {
    let record = match source {
        TrackingSource::Absent => TrackingRecord::unknown(tracking_number, carrier),
        TrackingSource::Synthetic(record) => TrackingRecord {
            tracking_number: tracking_number.to_string(),
            tracking_url: carrier.tracking_url(tracking_number),
            carrier_code: carrier,
            ..record
        },
        TrackingSource::Upstream(upstream) => from_upstream(upstream, tracking_number, carrier),
    };

    enforce_invariants(record, now)
}

fn from_upstream(
    upstream: UpstreamRecord,
    tracking_number: &str,
    carrier: CarrierCode,
) -> TrackingRecord {
    let status = upstream
        .status_code
        .as_deref()
        .map(map_status)
        .unwrap_or(TrackingStatus::Unknown);

    let status_description = upstream
        .tracking_status
        .clone()
        .or_else(|| upstream.status_description.clone())
        .or_else(|| upstream.status_code.as_ref().map(|_| status.as_str().to_string()))
        .unwrap_or_else(|| "Unknown".to_string());

    let mut events: Vec<TrackingEvent> = upstream.events.into_iter().map(map_event).collect();
    events.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

    let ship_date = upstream
        .ship_date
        .or_else(|| events.last().map(|e| e.occurred_at));

    TrackingRecord {
        tracking_number: tracking_number.to_string(),
        tracking_url: carrier.tracking_url(tracking_number),
        carrier_code: carrier,
        status,
        status_description,
        estimated_delivery_date: upstream.estimated_delivery_date,
        ship_date,
        events,
    }
}

fn map_event(event: UpstreamEvent) -> TrackingEvent {
    TrackingEvent {
        occurred_at: event.occurred_at,
        description: event.description,
        city_locality: event.city_locality,
        state_province: event.state_province,
        postal_code: event.postal_code,
        country_code: event.country_code,
    }
}

/// Lifecycle stage used to fill gaps for `status`; `None` for unknown.
fn gap_stage(status: &TrackingStatus) -> Option<usize> {
    match status {
        TrackingStatus::Unknown => None,
        TrackingStatus::Other(_) => LIFECYCLE.iter().position(|s| *s == TrackingStatus::InTransit),
        known => LIFECYCLE.iter().position(|s| s == known),
    }
}

fn enforce_invariants(mut record: TrackingRecord, now: DateTime<Utc>) -> TrackingRecord {
    // A delivered shipment has no pending estimate.
    if record.status == TrackingStatus::Delivered {
        record.estimated_delivery_date = None;
    }

    let Some(stage) = gap_stage(&record.status) else {
        return record;
    };

    if record.events.is_empty() {
        record.events = fallback::timeline(stage, now);
    }
    if record.estimated_delivery_date.is_none() {
        record.estimated_delivery_date = fallback::lead_time(&LIFECYCLE[stage]).map(|lead| now + lead);
    }
    if record.ship_date.is_none() {
        record.ship_date = record.events.last().map(|e| e.occurred_at);
    }
    record
}
