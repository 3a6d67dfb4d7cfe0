//! Canonical tracking types returned to clients.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::carrier::CarrierCode;

/// Shipment status.
///
/// Status codes the relay does not recognise are carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackingStatus {
    PreTransit,
    Shipped,
    InTransit,
    OutForDelivery,
    Delivered,
    Unknown,
    Other(String),
}

impl TrackingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TrackingStatus::PreTransit => "pre_transit",
            TrackingStatus::Shipped => "shipped",
            TrackingStatus::InTransit => "in_transit",
            TrackingStatus::OutForDelivery => "out_for_delivery",
            TrackingStatus::Delivered => "delivered",
            TrackingStatus::Unknown => "unknown",
            TrackingStatus::Other(code) => code,
        }
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TrackingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single scan or milestone in a shipment's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingEvent {
    pub occurred_at: DateTime<Utc>,
    pub description: String,
    pub city_locality: String,
    pub state_province: String,
    pub postal_code: String,
    pub country_code: String,
}

/// Normalized tracking record, the body of a successful `/tracking` response.
///
/// `events` are ordered newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingRecord {
    pub tracking_number: String,
    pub carrier_code: CarrierCode,
    pub status: TrackingStatus,
    pub status_description: String,
    pub estimated_delivery_date: Option<DateTime<Utc>>,
    /// The aggregator's ship date, else the oldest event. Null only for an
    /// unknown record without events.
    pub ship_date: Option<DateTime<Utc>>,
    pub events: Vec<TrackingEvent>,
    pub tracking_url: Option<String>,
}

impl TrackingRecord {
    /// Record for a shipment nothing is known about.
    pub fn unknown(tracking_number: &str, carrier: CarrierCode) -> Self {
        Self {
            tracking_number: tracking_number.to_string(),
            tracking_url: carrier.tracking_url(tracking_number),
            carrier_code: carrier,
            status: TrackingStatus::Unknown,
            status_description: "Unknown".to_string(),
            estimated_delivery_date: None,
            ship_date: None,
            events: Vec::new(),
        }
    }
}
