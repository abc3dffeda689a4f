//! API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{handlers, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/v1/delivery-order-price",
            get(handlers::delivery_order_price),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
