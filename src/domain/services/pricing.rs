use crate::domain::model::{DeliveryFee, DeliveryOrderPrice, DistanceRange, GeoLocation, Money, Venue};

/// Computes the full price breakdown for a delivery order, or `None` when
/// the user's location falls outside every distance range of the venue.
///
/// Not-deliverable is a modeled outcome the caller must branch on, not a
/// failure. The venue is trusted to be structurally valid; `Venue::new`
/// already enforced range ordering, and all `Money` values share one
/// currency.
pub fn compute_delivery_order_price(
    venue: &Venue,
    cart_value: Money,
    user_location: GeoLocation,
) -> Option<DeliveryOrderPrice> {
    let distance = venue.location().great_circle_distance(&user_location);
    let range = select_range(venue.distance_ranges(), distance)?;

    let small_order_surcharge = Money::new(
        venue
            .order_minimum_no_surcharge()
            .amount()
            .saturating_sub(cart_value.amount()),
    );
    let delivery_fee =
        venue.base_price() + range.constant() + distance_fee(range.multiplier(), distance);
    let total_price = cart_value + small_order_surcharge + delivery_fee;

    Some(DeliveryOrderPrice {
        total_price,
        small_order_surcharge,
        cart_value,
        delivery: DeliveryFee {
            fee: delivery_fee,
            distance,
        },
    })
}

/// First range whose upper bound is open or strictly greater than the
/// distance. Bounds are exclusive: a distance exactly at `max` falls to
/// the next range.
fn select_range(ranges: &[DistanceRange], distance: f64) -> Option<&DistanceRange> {
    ranges
        .iter()
        .find(|range| match range.max() {
            None => true,
            Some(max) => distance < f64::from(max),
        })
}

/// Distance-proportional fee component: `multiplier` subunits per 10 meters.
/// Ties round to even, matching the reference pricing outputs.
fn distance_fee(multiplier: u32, distance: f64) -> Money {
    Money::new((f64::from(multiplier) * distance / 10.0).round_ties_even() as u64)
}
