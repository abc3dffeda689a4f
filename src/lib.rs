pub mod adapters;
pub mod api;
pub mod config;
pub mod domain;
pub mod utils;

pub use adapters::venue_api::VenueApiClient;
pub use config::CliConfig;
pub use domain::services::pricing::compute_delivery_order_price;
pub use utils::error::{DopcError, Result};
