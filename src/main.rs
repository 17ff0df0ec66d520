mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use ipgeolocation::Client;
use tracing::{debug, info, Level};

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse().merge_with_config()?;

    // Logs go to stderr, stdout carries the JSON record
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let api_key = args
        .api_key
        .clone()
        .context("No API key given (use --api-key, IPGEOLOCATION_API_KEY or the config file)")?;
    let options = args.to_options()?;

    let http = reqwest::Client::builder()
        .timeout(args.timeout())
        .build()
        .context("Failed to build HTTP client")?;
    let mut client = Client::with_http_client(api_key, http);
    if let Some(base_url) = &args.base_url {
        client = client.with_base_url(base_url)?;
    }
    debug!("Endpoint: {}, timeout: {:?}", client.base_url(), args.timeout());

    let target = if options.ip().is_empty() { "own address" } else { options.ip() };
    info!("Looking up {}", target);

    let data = client
        .get_geolocation_with_options(&options)
        .await
        .with_context(|| format!("Lookup of {} failed", target))?;

    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
