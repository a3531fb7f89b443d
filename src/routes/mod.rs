use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware as axum_middleware,
    routing::get,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    engine::RecommendationEngine,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    models::WardrobeEntry,
    services::providers::WeatherProvider,
};

pub mod recommend;
pub mod wardrobe;
pub mod weather;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
    pub engine: Arc<RecommendationEngine>,
    /// Wardrobe entries in insertion order; that order is the engine's
    /// deterministic tie-break, so nothing may reorder this list.
    pub wardrobe: Arc<RwLock<Vec<WardrobeEntry>>>,
}

impl AppState {
    /// Creates application state around a weather provider and engine
    pub fn new(provider: Arc<dyn WeatherProvider>, engine: RecommendationEngine) -> Self {
        Self {
            provider,
            engine: Arc::new(engine),
            wardrobe: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/weather/:location", get(weather::get_weather))
        .route("/recommend", post(recommend::recommend))
        .route(
            "/wardrobe/items",
            get(wardrobe::list_items).post(wardrobe::add_item),
        )
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(axum_middleware::from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Service metadata
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Weather Outfit Recommendation API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/weather/{location}",
            "/recommend",
            "/wardrobe/items"
        ]
    }))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
