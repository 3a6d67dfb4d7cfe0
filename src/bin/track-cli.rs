//! Command line client for the tracking relay.

use clap::{Parser, Subcommand};
use serde_json::Value;

use tracking_relay::carrier::detect;

#[derive(Parser)]
#[command(name = "track-cli")]
#[command(about = "Command line client for the tracking relay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a shipment through a running relay
    Lookup {
        tracking_number: String,

        /// Carrier code; detected by the relay when omitted
        #[arg(short, long)]
        carrier: Option<String>,

        #[arg(short, long, default_value = "http://localhost:3000")]
        url: String,
    },
    /// Detect the carrier of a tracking number locally
    Detect { tracking_number: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup {
            tracking_number,
            carrier,
            url,
        } => {
            let mut query = vec![("tracking_number", tracking_number)];
            if let Some(carrier) = carrier {
                query.push(("carrier", carrier));
            }

            let res = reqwest::Client::new()
                .get(format!("{}/tracking", url.trim_end_matches('/')))
                .query(&query)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Detect { tracking_number } => {
            let carrier = detect(&tracking_number);
            println!("carrier: {}", carrier);
            match carrier.tracking_url(tracking_number.trim()) {
                Some(url) => println!("tracking_url: {}", url),
                None => println!("tracking_url: none"),
            }
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;

    if !status.is_success() {
        eprintln!("Error: relay returned status {}", status);
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
