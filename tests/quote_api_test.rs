use dopc::api::{routes, state::AppState};
use dopc::VenueApiClient;
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;

const VENUE: &str = "home-assignment-venue-helsinki";

/// Boots the service against the given venue API base URL and returns the
/// address it listens on.
async fn spawn_app(venue_api_url: String) -> String {
    let provider = VenueApiClient::new(venue_api_url, Duration::from_secs(5)).unwrap();
    let app = routes::router().with_state(AppState::new(Arc::new(provider)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn static_feed() -> serde_json::Value {
    serde_json::json!({
        "venue_raw": {
            "location": {
                "coordinates": [24.93664, 60.16771]
            }
        }
    })
}

fn dynamic_feed() -> serde_json::Value {
    serde_json::json!({
        "venue_raw": {
            "delivery_specs": {
                "order_minimum_no_surcharge": 1000,
                "delivery_pricing": {
                    "base_price": 190,
                    "distance_ranges": [
                        {"min": 0, "max": 500, "a": 0, "b": 1},
                        {"min": 500, "max": 1000, "a": 100, "b": 1},
                        {"min": 1000, "max": 10000, "a": 500, "b": 2},
                        {"min": 10000, "max": 0, "a": 0, "b": 0}
                    ]
                }
            }
        }
    })
}

fn mock_feeds(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path(format!("/{}/static", VENUE));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(static_feed());
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/{}/dynamic", VENUE));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(dynamic_feed());
    });
}

#[tokio::test]
async fn test_quote_for_deliverable_order() {
    let server = MockServer::start();
    mock_feeds(&server);
    let app = spawn_app(server.url("")).await;

    let response = reqwest::get(format!(
        "{}/api/v1/delivery-order-price?venue_slug={}&cart_value=1000&user_lat=60.189714&user_lon=24.838463",
        app, VENUE
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total_price"], 2882);
    assert_eq!(body["small_order_surcharge"], 0);
    assert_eq!(body["cart_value"], 1000);
    assert_eq!(body["delivery"]["fee"], 1882);
    assert_eq!(body["delivery"]["distance"].as_f64(), Some(5961.0));
}

#[tokio::test]
async fn test_quote_includes_small_order_surcharge() {
    let server = MockServer::start();
    mock_feeds(&server);
    let app = spawn_app(server.url("")).await;

    let response = reqwest::get(format!(
        "{}/api/v1/delivery-order-price?venue_slug={}&cart_value=800&user_lat=60.189714&user_lon=24.838463",
        app, VENUE
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["small_order_surcharge"], 200);
    assert_eq!(body["total_price"], 2882);
}

#[tokio::test]
async fn test_out_of_range_location_is_rejected() {
    let server = MockServer::start();
    mock_feeds(&server);
    let app = spawn_app(server.url("")).await;

    // Far outside every bounded range; the max=0 sentinel ends deliverability.
    let response = reqwest::get(format!(
        "{}/api/v1/delivery-order-price?venue_slug={}&cart_value=1000&user_lat=82&user_lon=80",
        app, VENUE
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"]["type"], "out_of_range");
}

#[tokio::test]
async fn test_unknown_venue_maps_to_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/no-such-venue/static");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path("/no-such-venue/dynamic");
        then.status(404);
    });
    let app = spawn_app(server.url("")).await;

    let response = reqwest::get(format!(
        "{}/api/v1/delivery-order-price?venue_slug=no-such-venue&cart_value=1000&user_lat=60.19&user_lon=24.84",
        app
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"]["type"], "venue_not_found");
}

#[tokio::test]
async fn test_upstream_failure_maps_to_bad_gateway() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/{}/static", VENUE));
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/{}/dynamic", VENUE));
        then.status(500);
    });
    let app = spawn_app(server.url("")).await;

    let response = reqwest::get(format!(
        "{}/api/v1/delivery-order-price?venue_slug={}&cart_value=1000&user_lat=60.19&user_lon=24.84",
        app, VENUE
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), 502);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"]["type"], "upstream_error");
}

#[tokio::test]
async fn test_invalid_query_params_are_rejected() {
    let server = MockServer::start();
    mock_feeds(&server);
    let app = spawn_app(server.url("")).await;

    // Negative cart value.
    let response = reqwest::get(format!(
        "{}/api/v1/delivery-order-price?venue_slug={}&cart_value=-5&user_lat=60.19&user_lon=24.84",
        app, VENUE
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"]["type"], "invalid_request");

    // Latitude beyond 90 degrees.
    let response = reqwest::get(format!(
        "{}/api/v1/delivery-order-price?venue_slug={}&cart_value=1000&user_lat=95&user_lon=24.84",
        app, VENUE
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), 400);

    // Missing cart_value.
    let response = reqwest::get(format!(
        "{}/api/v1/delivery-order-price?venue_slug={}&user_lat=60.19&user_lon=24.84",
        app, VENUE
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start();
    let app = spawn_app(server.url("")).await;

    let response = reqwest::get(format!("{}/health", app)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}
