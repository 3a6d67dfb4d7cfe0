//! Tracking record construction subsystem.
//!
//! # Data Flow
//! ```text
//! upstream record (if any)          → normalizer.rs ┐
//! fallback.rs (seeded by number)    → normalizer.rs ├→ TrackingRecord → JSON
//! nothing at all                    → normalizer.rs ┘
//! ```
//!
//! # Design Decisions
//! - Records are built fresh per request; nothing is cached or shared
//! - The synthetic timeline depends only on the tracking number and the clock
//! - The clock is injected so identical inputs produce identical output

pub mod clock;
pub mod fallback;
pub mod normalizer;
pub mod service;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use normalizer::{normalize, TrackingSource};
pub use service::TrackingService;
pub use types::{TrackingEvent, TrackingRecord, TrackingStatus};
