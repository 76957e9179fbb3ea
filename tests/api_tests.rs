use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use booking_search::build_app;
use booking_search::config::environment::EnvironmentConfig;
use booking_search::repositories::inventory_repository::InMemoryInventory;
use booking_search::state::AppState;

// App de test sobre el inventario seed real
fn create_test_app() -> axum::Router {
    let config = EnvironmentConfig {
        environment: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
    };
    let state = AppState::new(Arc::new(InMemoryInventory::seed()), config);
    build_app(state)
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn result_ids(body: &Value) -> Vec<&str> {
    body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get_json("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "booking-search");
}

#[tokio::test]
async fn test_search_san_francisco_scenario() {
    let (status, body) = get_json(
        "/api/search?pickupLocation=San%20Francisco&pickupDate=2025-11-10&dropoffDate=2025-11-12",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(result_ids(&body), vec!["car_001", "car_002", "car_004"]);

    // RAV4 reservado 11-10..11-11 se solapa con el rango pedido
    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["status"], "Available");
    assert_eq!(results[1]["status"], "Unavailable");
    assert_eq!(results[2]["status"], "Available");
}

#[tokio::test]
async fn test_search_availability_mode_excludes_unavailable() {
    let (status, body) = get_json(
        "/api/search?pickupLocation=San%20Francisco&pickupDate=2025-11-10&dropoffDate=2025-11-12&availability=available",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_ids(&body), vec!["car_001", "car_004"]);
    assert_eq!(body["meta"]["total"], 2);
}

#[tokio::test]
async fn test_search_repeated_type_params() {
    let (status, body) = get_json(
        "/api/search?type=SUV&type=Luxury&pickupDate=2025-11-10&dropoffDate=2025-11-12",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // SUV y Luxury sin importar ubicación; cada card anotada con su estado
    assert_eq!(result_ids(&body), vec!["car_002", "car_003"]);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["type"], "SUV");
    assert_eq!(results[0]["status"], "Unavailable");
    assert_eq!(results[1]["type"], "Luxury");
    assert_eq!(results[1]["status"], "Available");
}

#[tokio::test]
async fn test_search_types_csv_param() {
    let (status, body) = get_json(
        "/api/search?types=SUV,Luxury&pickupDate=2025-11-10&dropoffDate=2025-11-12",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_ids(&body), vec!["car_002", "car_003"]);
}

#[tokio::test]
async fn test_search_invalid_date_returns_400() {
    let (status, body) =
        get_json("/api/search?pickupDate=2025-13-01&dropoffDate=2025-11-12").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn test_search_dropoff_before_pickup_returns_400() {
    let (status, body) =
        get_json("/api/search?pickupDate=2025-11-12&dropoffDate=2025-11-10").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn test_search_missing_dates_returns_400() {
    let (status, body) = get_json("/api/search").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_search_pagination_metadata() {
    // Rango sin solapamientos con ninguna reserva
    let (status, body) = get_json(
        "/api/search?pickupDate=2025-12-01&dropoffDate=2025-12-02&per_page=2&page=2",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["count"], 2);
    assert_eq!(body["meta"]["total"], 4);
    assert_eq!(body["meta"]["page"], 2);
    assert_eq!(body["meta"]["per_page"], 2);
    assert_eq!(body["meta"]["pages"], 2);
    assert_eq!(result_ids(&body), vec!["car_003", "car_004"]);
}

#[tokio::test]
async fn test_search_page_beyond_results_is_empty_not_error() {
    let (status, body) = get_json(
        "/api/search?pickupDate=2025-12-01&dropoffDate=2025-12-02&per_page=2&page=9",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["count"], 0);
    assert_eq!(body["meta"]["total"], 4);
    assert_eq!(body["meta"]["pages"], 2);
    assert!(body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_defensive_coercion_of_bad_params() {
    // page/per_page/priceMax inválidos no son un error: se coercen
    let (status, body) = get_json(
        "/api/search?pickupDate=2025-12-01&dropoffDate=2025-12-02&page=abc&per_page=999&priceMax=cheap",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["meta"]["per_page"], 50);
    assert_eq!(body["meta"]["total"], 4);
}

#[tokio::test]
async fn test_search_price_and_rating_filters() {
    let (status, body) = get_json(
        "/api/search?pickupDate=2025-12-01&dropoffDate=2025-12-02&priceMax=100&rating=4.5",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Solo RAV4: precio 95 <= 100 y rating 4.5 >= 4.5; Civic cae por rating
    assert_eq!(result_ids(&body), vec!["car_002"]);
}

#[tokio::test]
async fn test_search_result_card_shape() {
    let (status, body) = get_json(
        "/api/search?pickupLocation=Los%20Angeles&pickupDate=2025-11-10&dropoffDate=2025-11-12",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let card = &body["results"][0];
    assert_eq!(card["id"], "car_003");
    assert_eq!(card["title"], "Mercedes C-Class");
    assert_eq!(card["type"], "Luxury");
    assert_eq!(card["location"], "Los Angeles");
    assert_eq!(card["rating"], 4.7);
    assert_eq!(card["pricePerDay"], 210);
    assert_eq!(
        card["features"],
        serde_json::json!(["Leather", "GPS", "Cruise Control"])
    );
    assert_eq!(card["status"], "Available");
}

#[tokio::test]
async fn test_touching_booking_endpoint_counts_as_overlap() {
    // Tesla reservado 11-14..11-16; pedir 11-16..11-18 comparte el día 16
    let (status, body) = get_json(
        "/api/search?pickupLocation=San%20Francisco&pickupDate=2025-11-16&dropoffDate=2025-11-18&availability=available",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_ids(&body), vec!["car_002", "car_004"]);
}
