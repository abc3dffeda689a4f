use clap::Parser;
use dopc::api::{routes, state::AppState};
use dopc::utils::{logger, validation::Validate};
use dopc::{CliConfig, VenueApiClient};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_server_logger(config.verbose);

    tracing::info!("Starting dopc service");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let addr: SocketAddr = config.bind.parse()?;
    let provider = VenueApiClient::new(
        config.venue_api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let app = routes::router().with_state(AppState::new(Arc::new(provider)));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
