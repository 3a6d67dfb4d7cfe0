//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, timeout, panic capture)
//! - Bind server to listener
//! - Serve until the shutdown signal fires

use axum::{
    http::{HeaderName, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as CorsAny, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{CorsConfig, RelayConfig};
use crate::http::error::ApiError;
use crate::http::handlers;
use crate::http::request::{MakeRequestUuidV4, X_REQUEST_ID};
use crate::tracking::{Clock, SystemClock, TrackingService};
use crate::upstream::{UpstreamClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TrackingService>,
}

/// HTTP server for the tracking relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, UpstreamError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a server whose synthetic timelines use `clock`.
    pub fn with_clock(config: RelayConfig, clock: Arc<dyn Clock>) -> Result<Self, UpstreamError> {
        let upstream = UpstreamClient::new(config.upstream.clone())?;
        tracing::info!(
            upstream = ?upstream,
            "Aggregator client initialized"
        );

        let state = AppState {
            service: Arc::new(TrackingService::new(upstream, clock)),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let request_id_header = HeaderName::from_static(X_REQUEST_ID);

        Router::new()
            .route("/", get(handlers::liveness))
            .route("/tracking", get(handlers::get_tracking))
            .with_state(state)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(cors_layer(&config.cors))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
            .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuidV4))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a value arrives on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream_configured = self.config.upstream.has_credentials(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// CORS policy for the browser frontend. `*` allows any origin.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(CorsAny);

    if config.allowed_origin.trim() == "*" {
        return layer.allow_origin(CorsAny);
    }

    match HeaderValue::from_str(config.allowed_origin.trim()) {
        Ok(origin) => layer.allow_origin(AllowOrigin::exact(origin)),
        Err(e) => {
            tracing::warn!(
                origin = %config.allowed_origin,
                error = %e,
                "Invalid CORS origin, cross-origin requests will be refused"
            );
            layer
        }
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(details = %details, "Handler panicked");
    ApiError::Internal(details).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_liveness() {
        let server = HttpServer::new(RelayConfig::default()).unwrap();
        let response = server
            .router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(X_REQUEST_ID));
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"Tracking relay is running");
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let server = HttpServer::new(RelayConfig::default()).unwrap();
        let response = server
            .router()
            .oneshot(
                Request::get("/")
                    .header(X_REQUEST_ID, "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[X_REQUEST_ID], "req-42");
    }

    #[tokio::test]
    async fn test_cors_exact_origin() {
        let mut config = RelayConfig::default();
        config.cors.allowed_origin = "https://shop.example.com".into();
        let server = HttpServer::new(config).unwrap();

        let response = server
            .router()
            .oneshot(
                Request::get("/tracking?tracking_number=ABC123")
                    .header("origin", "https://shop.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "https://shop.example.com"
        );
    }

    #[test]
    fn test_panic_becomes_internal_error() {
        let response = handle_panic(Box::new("exploded"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
