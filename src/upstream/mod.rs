//! Shipping aggregator integration.
//!
//! # Data Flow
//! ```text
//! tracking number + carrier
//!     → client.rs (credential check, one authenticated GET, timeout)
//!     → types.rs (camelCase aggregator payload)
//!     → Option<UpstreamRecord>
//! ```
//!
//! # Constraints
//! - Best-effort only: every failure is logged and reported as "no data"
//! - No retries; a single bounded attempt per lookup
//! - No network activity at all without a configured API key

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{UpstreamError, UpstreamEvent, UpstreamRecord};
