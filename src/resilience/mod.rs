//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Call to the aggregator:
//!     → timeouts.rs (enforce a deadline)
//!     → On expiry: caller falls back to synthetic data
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every external call has a deadline
//! - No retries: one bounded attempt per inbound request

pub mod timeouts;

pub use timeouts::{with_timeout, Elapsed};
