//! Aggregator payloads and error definitions.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Response envelope of the shipment search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentList {
    #[serde(default)]
    pub shipments: Vec<UpstreamRecord>,
}

/// A shipment as reported by the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpstreamRecord {
    pub tracking_number: Option<String>,
    pub carrier_code: Option<String>,
    /// Human readable status, highest precedence for display text.
    pub tracking_status: Option<String>,
    pub status_description: Option<String>,
    /// Machine status code, e.g. `IN_TRANSIT`.
    pub status_code: Option<String>,
    pub estimated_delivery_date: Option<DateTime<Utc>>,
    pub ship_date: Option<DateTime<Utc>>,
    pub events: Vec<UpstreamEvent>,
}

/// A scan event as reported by the aggregator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamEvent {
    pub occurred_at: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub city_locality: String,
    #[serde(default)]
    pub state_province: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country_code: String,
}

/// Reasons a lookup produced no data.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request timed out after {0}s")]
    Timeout(u64),

    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("upstream response could not be decoded: {0}")]
    Decode(String),

    #[error("no shipment found")]
    NotFound,

    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),
}

impl UpstreamError {
    /// Short label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            UpstreamError::Timeout(_) => "timeout",
            UpstreamError::Transport(_) => "transport_error",
            UpstreamError::Status(_) => "bad_status",
            UpstreamError::Decode(_) => "decode_error",
            UpstreamError::NotFound => "not_found",
            UpstreamError::Url(_) => "bad_url",
        }
    }
}
