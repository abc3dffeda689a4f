//! HTTP handlers for the delivery order price API.

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::domain::model::{DeliveryOrderPrice, GeoLocation, Money};
use crate::domain::services::pricing::compute_delivery_order_price;
use crate::utils::validation::validate_non_empty_string;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub venue_slug: String,
    /// Cart value in the smallest currency unit.
    pub cart_value: u64,
    pub user_lat: f64,
    pub user_lon: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn delivery_order_price(
    State(state): State<AppState>,
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> ApiResult<Json<DeliveryOrderPrice>> {
    let Query(params) = params.map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
    validate_non_empty_string("venue_slug", &params.venue_slug)
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
    let user_location = GeoLocation::new(params.user_lat, params.user_lon)
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

    let venue = state.venues.venue(&params.venue_slug).await?;

    tracing::debug!(
        venue = %params.venue_slug,
        cart_value = params.cart_value,
        "Computing delivery order price"
    );
    match compute_delivery_order_price(&venue, Money::new(params.cart_value), user_location) {
        Some(price) => Ok(Json(price)),
        None => Err(ApiError::OutOfRange(params.venue_slug)),
    }
}
