use crate::utils::error::{DopcError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "dopc")]
#[command(about = "Delivery Order Price Calculator service")]
pub struct CliConfig {
    /// Address the HTTP server binds to.
    #[arg(long, default_value = "0.0.0.0:8000")]
    pub bind: String,

    /// Base URL of the venue API serving the static and dynamic feeds.
    #[arg(
        long,
        default_value = "https://consumer-api.development.dev.woltapi.com/home-assignment-api/v1/venues"
    )]
    pub venue_api_url: String,

    /// Timeout for each upstream feed request, in seconds.
    #[arg(long, default_value = "10")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Err(e) = self.bind.parse::<SocketAddr>() {
            return Err(DopcError::InvalidValue {
                field: "bind".to_string(),
                value: self.bind.clone(),
                reason: format!("Invalid socket address: {}", e),
            });
        }
        validate_url("venue_api_url", &self.venue_api_url)?;
        validate_positive_number("request_timeout_secs", self.request_timeout_secs, 1)?;
        Ok(())
    }
}
