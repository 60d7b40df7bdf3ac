use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use snowtrip::{SnowTripConfig, logging, web};

#[derive(Parser)]
#[command(name = "snowtrip")]
#[command(about = "Plan a ski holiday: flights, resort, trains, hotels and a tip")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./snowtrip.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the config
    #[arg(short, long)]
    port: Option<u16>,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SnowTripConfig::load_from_path(cli.config)?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.server.debug |= cli.debug;
    config.validate()?;

    logging::init(&config.logging, config.server.debug)?;

    if config.flights.api_token.is_none() {
        tracing::warn!("SNOWTRIP_FLIGHTS__API_TOKEN not set; searches will show fallback flights");
    }

    web::run(&config).await
}
