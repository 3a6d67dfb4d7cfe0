//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overrides: PORT, CORS_ORIGIN, API credentials)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → injected into the server and upstream client at construction
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never mutated afterwards
//! - All fields have defaults so the relay runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, ConfigError};
pub use schema::{
    CorsConfig, ListenerConfig, ObservabilityConfig, RelayConfig, TimeoutConfig, UpstreamConfig,
};
