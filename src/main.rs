use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use clockify_month_fill::{
    cli::{Cli, CliError, USAGE},
    helpers::clockify::{clockify_client_init, HttpRestClient},
    ClockifyService, FixedOffsetPolicy,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(CliError::MissingApiKey) => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    };
    debug!(?config, "parsed configuration");

    let http = clockify_client_init(&config.api_key)
        .context("failed to initialize Clockify client")?;
    let client = HttpRestClient::new(http, config.base_url);
    let service = ClockifyService::new(client, FixedOffsetPolicy::default());

    let today = Local::now().date_naive();
    info!("Running {:?} with today = {}", config.mode, today);

    service
        .run(&config.mode, today)
        .await
        .context("Clockify request failed")?;

    Ok(())
}
