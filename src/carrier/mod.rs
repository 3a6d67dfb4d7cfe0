//! Carrier identification subsystem.
//!
//! # Data Flow
//! ```text
//! caller-supplied carrier (optional)
//!     → types.rs (CarrierCode::from_caller, passthrough of unknown codes)
//! raw tracking number (when no carrier was supplied)
//!     → detector.rs (ordered regex table, first match wins)
//!     → CarrierCode
//!     → types.rs (public tracking page URL per carrier)
//! ```
//!
//! # Design Decisions
//! - Detection is a flat, ordered rule table; evaluation order is the tie-break
//! - Detection is total: anything unmatched is `unknown`, never an error
//! - Caller-supplied codes are never rejected

pub mod detector;
pub mod types;

pub use detector::detect;
pub use types::CarrierCode;
