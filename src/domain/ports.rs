use crate::domain::model::Venue;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of validated venue configuration, keyed by venue slug.
///
/// Implementations own all upstream I/O; the pricing service only ever
/// sees a fully-validated `Venue`.
#[async_trait]
pub trait VenueProvider: Send + Sync {
    async fn venue(&self, slug: &str) -> Result<Venue>;
}
