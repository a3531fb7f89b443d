use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::Recommendation,
    services,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub location: String,
    #[serde(default = "default_occasion")]
    pub occasion: String,
    pub user_id: Option<String>,
}

fn default_occasion() -> String {
    "casual".to_string()
}

/// Handler for the recommendation endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<Recommendation>> {
    tracing::info!(
        request_id = %request_id,
        location = %request.location,
        occasion = %request.occasion,
        user_id = ?request.user_id,
        "Processing recommendation request"
    );

    if request.location.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Location cannot be empty".to_string(),
        ));
    }

    // The user's own items plus the shared wardrobe, in insertion order;
    // anonymous callers see only the shared entries.
    let wardrobe = {
        let entries = state.wardrobe.read().await;
        entries
            .iter()
            .filter(|entry| entry.user_id.is_none() || entry.user_id == request.user_id)
            .map(|entry| entry.item.clone())
            .collect::<Vec<_>>()
    };

    let recommendation = services::recommendation::recommend_outfit(
        state.provider.clone(),
        &state.engine,
        &request.location,
        &request.occasion,
        wardrobe,
    )
    .await?;

    tracing::info!(
        request_id = %request_id,
        "Recommendation request completed"
    );

    Ok(Json(recommendation))
}
