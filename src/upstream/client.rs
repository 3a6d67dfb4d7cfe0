//! Aggregator REST client with timeout and error handling.
//!
//! # Responsibilities
//! - Authenticate with basic auth (API key as username)
//! - Look up a shipment by tracking number, one attempt, bounded by a deadline
//! - Translate every failure into "no data" for the caller

use reqwest::header::ACCEPT;
use std::time::Duration;
use url::Url;

use crate::carrier::CarrierCode;
use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::resilience::timeouts::with_timeout;
use crate::upstream::types::{ShipmentList, UpstreamError, UpstreamRecord};

/// Client for the shipping aggregator API.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: UpstreamConfig,
    timeout_duration: Duration,
}

impl UpstreamClient {
    /// Create a new client. No network activity happens here.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tracking-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            timeout_duration: Duration::from_secs(config.timeout_secs),
            config,
        })
    }

    /// True when an API key is configured and lookups will be attempted.
    pub fn is_configured(&self) -> bool {
        self.config.has_credentials()
    }

    /// Best-effort lookup. Failures are logged and reported as `None`.
    pub async fn lookup(
        &self,
        tracking_number: &str,
        carrier: &CarrierCode,
    ) -> Option<UpstreamRecord> {
        if !self.is_configured() {
            tracing::debug!("No aggregator credentials configured, skipping lookup");
            metrics::record_upstream_lookup("skipped");
            return None;
        }

        match self.fetch(tracking_number, carrier).await {
            Ok(record) => {
                tracing::debug!(
                    tracking_number = %tracking_number,
                    carrier = %carrier,
                    "Aggregator returned shipment"
                );
                metrics::record_upstream_lookup("found");
                Some(record)
            }
            Err(e) => {
                tracing::warn!(
                    tracking_number = %tracking_number,
                    carrier = %carrier,
                    error = %e,
                    "Aggregator lookup failed, using fallback"
                );
                metrics::record_upstream_lookup(e.outcome());
                None
            }
        }
    }

    /// Single authenticated lookup, surfacing the failure reason.
    pub async fn fetch(
        &self,
        tracking_number: &str,
        carrier: &CarrierCode,
    ) -> Result<UpstreamRecord, UpstreamError> {
        let url = self.shipments_url(tracking_number, carrier)?;
        let username = self.config.api_key.clone().unwrap_or_default();

        // The aggregator takes the key as the username with an empty password.
        let request = self
            .http
            .get(url)
            .basic_auth(username, Some(""))
            .header(ACCEPT, "application/json");

        let call = async {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(UpstreamError::Status(status.as_u16()));
            }

            let body = response.bytes().await?;
            let list = serde_json::from_slice::<ShipmentList>(&body)
                .map_err(|e| UpstreamError::Decode(e.to_string()))?;
            Ok::<ShipmentList, UpstreamError>(list)
        };

        let list = with_timeout(self.timeout_duration, call)
            .await
            .map_err(|_| UpstreamError::Timeout(self.config.timeout_secs))??;

        list.shipments
            .into_iter()
            .next()
            .ok_or(UpstreamError::NotFound)
    }

    fn shipments_url(
        &self,
        tracking_number: &str,
        carrier: &CarrierCode,
    ) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&format!(
            "{}/shipments",
            self.config.base_url.trim_end_matches('/')
        ))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("trackingNumber", tracking_number);
            if carrier.is_resolved() {
                query.append_pair("carrierCode", carrier.as_str());
            }
        }

        Ok(url)
    }
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("base_url", &self.config.base_url)
            .field("configured", &self.is_configured())
            .field("timeout_secs", &self.config.timeout_secs)
            .finish()
    }
}
