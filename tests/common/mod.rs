//! Shared utilities for integration testing.

use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use tracking_relay::config::RelayConfig;
use tracking_relay::http::HttpServer;
use tracking_relay::lifecycle::Shutdown;
use tracking_relay::tracking::FixedClock;

/// Instant every test relay treats as "now".
pub fn fixed_now() -> DateTime<Utc> {
    "2026-03-10T15:00:00Z".parse().unwrap()
}

/// A relay running on an ephemeral port, stopped on drop.
pub struct TestRelay {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestRelay {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

impl Drop for TestRelay {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a relay with a pinned clock.
pub async fn start_relay(config: RelayConfig) -> TestRelay {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::with_clock(config, Arc::new(FixedClock(fixed_now()))).unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestRelay { addr, shutdown }
}

/// Config pointing at a mock aggregator with credentials set.
#[allow(dead_code)]
pub fn upstream_config(base_url: &str) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.upstream.base_url = base_url.to_string();
    config.upstream.api_key = Some("test-key".to_string());
    config.upstream.timeout_secs = 1;
    config
}

/// HTTP client that never goes through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// GET a URL and return status plus parsed JSON body.
pub async fn get_json(url: &str) -> (u16, serde_json::Value) {
    let res = client().get(url).send().await.unwrap();
    let status = res.status().as_u16();
    let body = res.json().await.unwrap();
    (status, body)
}
