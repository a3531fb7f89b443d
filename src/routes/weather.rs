use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::CurrentConditions, services};

use super::AppState;

/// Handler for current-weather lookup
pub async fn get_weather(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> AppResult<Json<CurrentConditions>> {
    let conditions = services::weather::current_weather(state.provider.clone(), &location).await?;
    Ok(Json(conditions))
}
