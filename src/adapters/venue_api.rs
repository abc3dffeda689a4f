use crate::domain::model::{DistanceRange, GeoLocation, Money, Venue};
use crate::domain::ports::VenueProvider;
use crate::utils::error::{DopcError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Venue provider backed by the home-assignment venue API.
///
/// Each lookup fetches the `static` and `dynamic` feeds for the slug and
/// assembles a validated `Venue`. Nothing is cached across requests.
pub struct VenueApiClient {
    client: Client,
    base_url: String,
}

impl VenueApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    async fn fetch<T: DeserializeOwned>(&self, slug: &str, feed: &str) -> Result<T> {
        let url = format!("{}/{}/{}", self.base_url.trim_end_matches('/'), slug, feed);
        tracing::debug!("Fetching venue feed: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Venue feed response status: {}", response.status());

        match response.status() {
            StatusCode::NOT_FOUND => Err(DopcError::VenueNotFound {
                slug: slug.to_string(),
            }),
            status if !status.is_success() => Err(DopcError::UpstreamStatus {
                status: status.as_u16(),
                url,
            }),
            _ => Ok(response.json::<T>().await?),
        }
    }
}

#[async_trait]
impl VenueProvider for VenueApiClient {
    async fn venue(&self, slug: &str) -> Result<Venue> {
        let (static_feed, dynamic_feed) = tokio::try_join!(
            self.fetch::<StaticFeed>(slug, "static"),
            self.fetch::<DynamicFeed>(slug, "dynamic"),
        )?;
        build_venue(slug, static_feed, dynamic_feed)
    }
}

#[derive(Debug, Deserialize)]
struct StaticFeed {
    venue_raw: StaticVenueRaw,
}

#[derive(Debug, Deserialize)]
struct StaticVenueRaw {
    location: RawLocation,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    /// `[longitude, latitude]`, GeoJSON ordering.
    coordinates: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct DynamicFeed {
    venue_raw: DynamicVenueRaw,
}

#[derive(Debug, Deserialize)]
struct DynamicVenueRaw {
    delivery_specs: DeliverySpecs,
}

#[derive(Debug, Deserialize)]
struct DeliverySpecs {
    order_minimum_no_surcharge: u64,
    delivery_pricing: DeliveryPricing,
}

#[derive(Debug, Deserialize)]
struct DeliveryPricing {
    base_price: u64,
    distance_ranges: Vec<RawDistanceRange>,
}

#[derive(Debug, Deserialize)]
struct RawDistanceRange {
    max: u32,
    a: u64,
    b: u32,
}

fn build_venue(slug: &str, static_feed: StaticFeed, dynamic_feed: DynamicFeed) -> Result<Venue> {
    let invalid = |e: DopcError| DopcError::VenueData {
        message: e.to_string(),
    };

    let [lon, lat] = static_feed.venue_raw.location.coordinates;
    let location = GeoLocation::new(lat, lon).map_err(invalid)?;

    let specs = dynamic_feed.venue_raw.delivery_specs;
    let pricing = specs.delivery_pricing;

    let mut ranges = Vec::with_capacity(pricing.distance_ranges.len());
    for raw in pricing.distance_ranges {
        // A zero max marks the end of deliverability in the feed; past it
        // no range applies.
        if raw.max == 0 {
            continue;
        }
        ranges.push(
            DistanceRange::new(Some(raw.max), Money::new(raw.a), raw.b).map_err(invalid)?,
        );
    }

    Venue::new(
        slug,
        location,
        Money::new(specs.order_minimum_no_surcharge),
        Money::new(pricing.base_price),
        ranges,
    )
    .map_err(invalid)
}
