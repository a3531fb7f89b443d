use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{ClothingItem, Formality, GarmentType, WardrobeEntry, WarmthBand},
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub name: String,
    pub garment_type: GarmentType,
    pub warmth_level: WarmthBand,
    #[serde(default)]
    pub waterproof: bool,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub formality: Formality,
    /// Omit for the shared/default wardrobe
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub item: ClothingItem,
}

impl From<&WardrobeEntry> for ItemResponse {
    fn from(entry: &WardrobeEntry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id.clone(),
            item: entry.item.clone(),
        }
    }
}

/// Add a clothing item to the wardrobe
pub async fn add_item(
    State(state): State<AppState>,
    Json(request): Json<AddItemRequest>,
) -> AppResult<(StatusCode, Json<ItemResponse>)> {
    if request.name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Item name cannot be empty".to_string(),
        ));
    }

    let entry = WardrobeEntry::new(
        request.user_id,
        ClothingItem {
            name: request.name,
            garment_type: request.garment_type,
            warmth_level: request.warmth_level,
            waterproof: request.waterproof,
            colors: request.colors,
            formality: request.formality,
        },
    );
    let response = ItemResponse::from(&entry);

    let mut wardrobe = state.wardrobe.write().await;
    wardrobe.push(entry);

    tracing::info!(
        item = %response.item.name,
        garment_type = %response.item.garment_type,
        total_items = wardrobe.len(),
        "Wardrobe item added"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// List all clothing items in the wardrobe
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<ItemResponse>> {
    let wardrobe = state.wardrobe.read().await;
    let items: Vec<ItemResponse> = wardrobe.iter().map(ItemResponse::from).collect();
    Json(items)
}
