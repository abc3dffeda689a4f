use crate::utils::error::{DopcError, Result};
use crate::utils::validation::{validate_finite, validate_range};
use serde::Serialize;
use std::ops::Add;

/// Radius of the Earth in meters, as used by the great-circle distance.
pub const EARTH_RADIUS_M: f64 = 6_378_000.0;

/// An amount of money in the smallest denomination of the local currency
/// (cents in euro countries, öre in Sweden, yen in Japan).
///
/// All `Money` values taking part in one computation are assumed to share
/// the same currency. Amounts only ever add up; fees are rounded to whole
/// subunits before they become `Money`, so no division is offered here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> u64 {
        self.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

/// A validated geographic coordinate in decimal degrees.
///
/// Construction rejects non-finite values and values outside
/// latitude [-90, 90] / longitude [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    lat: f64,
    lon: f64,
}

impl GeoLocation {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        validate_finite("latitude", lat)?;
        validate_finite("longitude", lon)?;
        validate_range("latitude", lat, -90.0, 90.0)?;
        validate_range("longitude", lon, -180.0, 180.0)?;
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to `other` in meters, computed with the
    /// haversine formula and rounded to the nearest whole meter.
    pub fn great_circle_distance(&self, other: &GeoLocation) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let h = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let distance = 2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt());
        distance.round()
    }
}

/// One band of a venue's distance-based pricing schedule.
///
/// `max` is the exclusive upper bound in meters; `None` marks the catch-all
/// band with no upper bound. `constant` is a flat fee and `multiplier` a
/// rate in fee subunits per 10 meters of delivery distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceRange {
    max: Option<u32>,
    constant: Money,
    multiplier: u32,
}

impl DistanceRange {
    pub fn new(max: Option<u32>, constant: Money, multiplier: u32) -> Result<Self> {
        if max == Some(0) {
            return Err(DopcError::InvalidValue {
                field: "max".to_string(),
                value: "0".to_string(),
                reason: "a bounded distance range must have a positive upper bound".to_string(),
            });
        }
        Ok(Self {
            max,
            constant,
            multiplier,
        })
    }

    pub fn max(&self) -> Option<u32> {
        self.max
    }

    pub fn constant(&self) -> Money {
        self.constant
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }
}

/// Immutable venue configuration assembled from the upstream data feeds.
///
/// Construction validates the pricing schedule: bounded ranges must be
/// sorted by strictly ascending `max`, and an unbounded range may only
/// appear in last position.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    slug: String,
    location: GeoLocation,
    order_minimum_no_surcharge: Money,
    base_price: Money,
    distance_ranges: Vec<DistanceRange>,
}

impl Venue {
    pub fn new(
        slug: impl Into<String>,
        location: GeoLocation,
        order_minimum_no_surcharge: Money,
        base_price: Money,
        distance_ranges: Vec<DistanceRange>,
    ) -> Result<Self> {
        let mut prev_max: Option<u32> = None;
        for (i, range) in distance_ranges.iter().enumerate() {
            match range.max() {
                None if i + 1 != distance_ranges.len() => {
                    return Err(DopcError::InvalidValue {
                        field: "distance_ranges".to_string(),
                        value: format!("index {i}"),
                        reason: "an unbounded range may only appear last".to_string(),
                    });
                }
                None => {}
                Some(max) => {
                    if prev_max.is_some_and(|prev| max <= prev) {
                        return Err(DopcError::InvalidValue {
                            field: "distance_ranges".to_string(),
                            value: format!("index {i}"),
                            reason: "ranges must be sorted by strictly ascending max".to_string(),
                        });
                    }
                    prev_max = Some(max);
                }
            }
        }
        Ok(Self {
            slug: slug.into(),
            location,
            order_minimum_no_surcharge,
            base_price,
            distance_ranges,
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn location(&self) -> GeoLocation {
        self.location
    }

    pub fn order_minimum_no_surcharge(&self) -> Money {
        self.order_minimum_no_surcharge
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn distance_ranges(&self) -> &[DistanceRange] {
        &self.distance_ranges
    }
}

/// The delivery fee together with the distance that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeliveryFee {
    pub fee: Money,
    /// Delivery distance in meters.
    pub distance: f64,
}

/// A complete price quote for one delivery order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryOrderPrice {
    pub total_price: Money,
    pub small_order_surcharge: Money,
    pub cart_value: Money,
    pub delivery: DeliveryFee,
}
