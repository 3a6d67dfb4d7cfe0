//! Route handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::time::Instant;

use crate::http::error::ApiError;
use crate::http::request::request_id_of;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Query string of `GET /tracking`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackingQuery {
    pub tracking_number: Option<String>,
    pub carrier: Option<String>,
}

impl TrackingQuery {
    /// The trimmed tracking number, or a 400 if it is missing or blank.
    pub fn tracking_number(&self) -> Result<&str, ApiError> {
        self.tracking_number
            .as_deref()
            .map(str::trim)
            .filter(|tn| !tn.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Missing tracking number".to_string()))
    }
}

/// Liveness probe.
pub async fn liveness() -> &'static str {
    "Tracking relay is running"
}

/// `GET /tracking?tracking_number=..&carrier=..`
pub async fn get_tracking(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<TrackingQuery>, QueryRejection>,
) -> Response {
    let start = Instant::now();
    let request_id = request_id_of(&headers);

    let response = match track(&state, query).await {
        Ok(response) => response,
        Err(e) => {
            match &e {
                ApiError::BadRequest(reason) => {
                    tracing::info!(request_id = %request_id, reason = %reason, "Rejected tracking request")
                }
                ApiError::Internal(details) => {
                    tracing::error!(request_id = %request_id, error = %details, "Tracking request failed")
                }
            }
            e.into_response()
        }
    };

    metrics::record_request(response.status().as_u16(), start);
    response
}

async fn track(
    state: &AppState,
    query: Result<Query<TrackingQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let tracking_number = query.tracking_number()?;

    let record = state
        .service
        .track(tracking_number, query.carrier.as_deref())
        .await;

    let body = serde_json::to_vec(&record).map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_number_validation() {
        let missing = TrackingQuery::default();
        assert!(matches!(missing.tracking_number(), Err(ApiError::BadRequest(_))));

        let blank = TrackingQuery {
            tracking_number: Some("  ".into()),
            carrier: None,
        };
        assert!(blank.tracking_number().is_err());

        let padded = TrackingQuery {
            tracking_number: Some(" 1Z999AA10123456784 ".into()),
            carrier: None,
        };
        assert_eq!(padded.tracking_number().unwrap(), "1Z999AA10123456784");
    }
}
