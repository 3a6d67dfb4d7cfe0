//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap outbound calls with a deadline
//! - Cancel the wrapped future cleanly on expiry
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other errors

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// The deadline passed before the operation completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation timed out after {0:?}")]
pub struct Elapsed(pub Duration);

/// Run `fut` to completion or give up after `duration`.
pub async fn with_timeout<F, T>(duration: Duration, fut: F) -> Result<T, Elapsed>
where
    F: Future<Output = T>,
{
    tokio::time::timeout(duration, fut)
        .await
        .map_err(|_| Elapsed(duration))
}
