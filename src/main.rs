//! Shipment tracking relay.
//!
//! Accepts a tracking number from a browser client, asks the shipping
//! aggregator for status and answers with a normalized JSON record. When the
//! aggregator has nothing, a deterministic placeholder timeline is served.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                 TRACKING RELAY                   │
//!  GET /tracking     │  ┌────────┐   ┌──────────┐   ┌──────────────┐    │
//!  ──────────────────┼─▶│  http  │──▶│ carrier  │──▶│   upstream   │────┼──▶ Aggregator
//!                    │  │ server │   │ detector │   │    client    │    │     API
//!                    │  └────────┘   └──────────┘   └──────┬───────┘    │
//!                    │                                     │ none       │
//!                    │                                     ▼            │
//!  JSON record       │  ┌────────────┐            ┌──────────────┐      │
//!  ◀─────────────────┼──│ normalizer │◀───────────│   fallback   │      │
//!                    │  └────────────┘            │  generator   │      │
//!                    │                            └──────────────┘      │
//!                    └──────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use tracking_relay::config;
use tracking_relay::lifecycle::startup;
use tracking_relay::observability::logging;

#[derive(Parser)]
#[command(name = "tracking-relay")]
#[command(about = "HTTP relay for shipment tracking lookups", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "TRACKING_RELAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;
    logging::init(&config.observability);

    tracing::info!("tracking-relay v{} starting", env!("CARGO_PKG_VERSION"));

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
