use std::sync::Arc;

use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;

use outfit_api::engine::RecommendationEngine;
use outfit_api::error::{AppError, AppResult};
use outfit_api::models::CurrentConditions;
use outfit_api::routes::{create_router, AppState};
use outfit_api::services::providers::WeatherProvider;

/// Provider stub returning canned conditions, so tests never hit the network
struct StubWeatherProvider {
    conditions: CurrentConditions,
}

#[async_trait::async_trait]
impl WeatherProvider for StubWeatherProvider {
    async fn current_weather(&self, _location: &str) -> AppResult<CurrentConditions> {
        Ok(self.conditions.clone())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// Provider stub that always fails, for upstream-outage tests
struct FailingWeatherProvider;

#[async_trait::async_trait]
impl WeatherProvider for FailingWeatherProvider {
    async fn current_weather(&self, _location: &str) -> AppResult<CurrentConditions> {
        Err(AppError::ExternalApi("provider unavailable".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing-stub"
    }
}

fn conditions(temperature: f64, condition_code: u16) -> CurrentConditions {
    CurrentConditions {
        location: "Testville".to_string(),
        temperature_celsius: Some(temperature),
        condition: None,
        condition_code: Some(condition_code),
        description: None,
        wind_speed_mps: Some(2.0),
        fetched_at: Utc::now(),
    }
}

fn create_test_server(weather: CurrentConditions) -> TestServer {
    let provider = Arc::new(StubWeatherProvider {
        conditions: weather,
    });
    let state = AppState::new(provider, RecommendationEngine::default());
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(conditions(15.0, 800));
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let server = create_test_server(conditions(15.0, 800));
    let response = server.get("/").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert!(body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .any(|endpoint| endpoint == "/recommend"));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server(conditions(15.0, 800));
    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_get_weather_returns_stub_conditions() {
    let server = create_test_server(conditions(21.5, 800));
    let response = server.get("/weather/Testville").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["location"], "Testville");
    assert_eq!(body["temperature_celsius"], 21.5);
}

#[tokio::test]
async fn test_add_and_list_wardrobe_items() {
    let server = create_test_server(conditions(15.0, 800));

    let response = server
        .post("/wardrobe/items")
        .json(&json!({
            "name": "Denim jacket",
            "garment_type": "outerwear",
            "warmth_level": "cool",
            "colors": ["blue"]
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    assert_eq!(created["item"]["name"], "Denim jacket");
    // Defaults apply for fields the request omitted
    assert_eq!(created["item"]["waterproof"], false);
    assert_eq!(created["item"]["formality"], "casual");
    assert!(created["id"].as_str().is_some());

    let response = server.get("/wardrobe/items").await;
    response.assert_status_ok();
    let items: Vec<serde_json::Value> = response.json();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["item"]["garment_type"], "outerwear");
}

#[tokio::test]
async fn test_add_item_with_empty_name_is_rejected() {
    let server = create_test_server(conditions(15.0, 800));

    let response = server
        .post("/wardrobe/items")
        .json(&json!({
            "name": "   ",
            "garment_type": "top",
            "warmth_level": "mild"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommendation_flow() {
    // 8°C with rain (code 500): cool band, precipitating
    let server = create_test_server(conditions(8.0, 500));

    for item in [
        json!({ "name": "Flannel shirt", "garment_type": "top", "warmth_level": "cool" }),
        json!({ "name": "Jeans", "garment_type": "bottom", "warmth_level": "cool" }),
        json!({ "name": "Sneakers", "garment_type": "shoes", "warmth_level": "cool" }),
        json!({ "name": "Rain boots", "garment_type": "shoes", "warmth_level": "cool", "waterproof": true }),
        json!({ "name": "Rain jacket", "garment_type": "outerwear", "warmth_level": "cool", "waterproof": true }),
    ] {
        server.post("/wardrobe/items").json(&item).await.assert_status(axum::http::StatusCode::CREATED);
    }

    let response = server
        .post("/recommend")
        .json(&json!({ "location": "Testville", "occasion": "casual" }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["weather"]["temperature_band"], "cool");
    assert_eq!(body["weather"]["precipitating"], true);
    assert_eq!(body["outfit"]["top"]["name"], "Flannel shirt");
    assert_eq!(body["outfit"]["bottom"]["name"], "Jeans");
    // Waterproof shoes beat the earlier non-waterproof pair in rain
    assert_eq!(body["outfit"]["shoes"]["name"], "Rain boots");
    assert_eq!(body["outfit"]["outerwear"]["name"], "Rain jacket");
    assert_eq!(body["rationale"].as_array().unwrap().len(), 4);
    assert_eq!(body["formality"], "casual");
}

#[tokio::test]
async fn test_recommendation_omits_outerwear_when_warm_and_dry() {
    // 24°C, clear sky
    let server = create_test_server(conditions(24.0, 800));

    for item in [
        json!({ "name": "Tee", "garment_type": "top", "warmth_level": "warm" }),
        json!({ "name": "Shorts", "garment_type": "bottom", "warmth_level": "warm" }),
        json!({ "name": "Sandals", "garment_type": "shoes", "warmth_level": "warm" }),
        json!({ "name": "Jacket", "garment_type": "outerwear", "warmth_level": "warm" }),
    ] {
        server.post("/wardrobe/items").json(&item).await.assert_status(axum::http::StatusCode::CREATED);
    }

    let response = server
        .post("/recommend")
        .json(&json!({ "location": "Testville" }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert!(body["outfit"].get("outerwear").is_none());
}

#[tokio::test]
async fn test_recommendation_with_empty_wardrobe() {
    let server = create_test_server(conditions(15.0, 800));

    let response = server
        .post("/recommend")
        .json(&json!({ "location": "Testville" }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"],
        "no recommendation possible: wardrobe is empty"
    );
}

#[tokio::test]
async fn test_recommendation_names_missing_mandatory_type() {
    let server = create_test_server(conditions(15.0, 800));

    for item in [
        json!({ "name": "Tee", "garment_type": "top", "warmth_level": "mild" }),
        json!({ "name": "Chinos", "garment_type": "bottom", "warmth_level": "mild" }),
    ] {
        server.post("/wardrobe/items").json(&item).await.assert_status(axum::http::StatusCode::CREATED);
    }

    let response = server
        .post("/recommend")
        .json(&json!({ "location": "Testville" }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("shoes"));
}

#[tokio::test]
async fn test_recommendation_scopes_wardrobe_to_user() {
    let server = create_test_server(conditions(15.0, 800));

    for item in [
        json!({ "name": "Shared tee", "garment_type": "top", "warmth_level": "mild" }),
        json!({ "name": "Shared chinos", "garment_type": "bottom", "warmth_level": "mild" }),
        // Shoes exist only in alice's personal wardrobe
        json!({ "name": "Alice sneakers", "garment_type": "shoes", "warmth_level": "mild", "user_id": "alice" }),
    ] {
        server.post("/wardrobe/items").json(&item).await.assert_status(axum::http::StatusCode::CREATED);
    }

    // Anonymous callers only see shared items, so shoes are missing
    let response = server
        .post("/recommend")
        .json(&json!({ "location": "Testville" }))
        .await;
    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    // Alice gets shared items plus her own shoes
    let response = server
        .post("/recommend")
        .json(&json!({ "location": "Testville", "user_id": "alice" }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["outfit"]["shoes"]["name"], "Alice sneakers");
}

#[tokio::test]
async fn test_recommendation_with_blank_location_is_rejected() {
    let server = create_test_server(conditions(15.0, 800));

    let response = server
        .post("/recommend")
        .json(&json!({ "location": "  " }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_provider_outage_maps_to_bad_gateway() {
    let state = AppState::new(
        Arc::new(FailingWeatherProvider),
        RecommendationEngine::default(),
    );
    let server = TestServer::new(create_router(state)).unwrap();

    server
        .post("/wardrobe/items")
        .json(&json!({ "name": "Tee", "garment_type": "top", "warmth_level": "mild" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/recommend")
        .json(&json!({ "location": "Testville" }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
}
