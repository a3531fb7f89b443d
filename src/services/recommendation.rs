use std::sync::Arc;
use std::time::Instant;

use crate::{
    engine::RecommendationEngine,
    error::AppResult,
    models::{ClothingItem, Recommendation},
    services::providers::WeatherProvider,
};

/// Produces an outfit recommendation for a location and occasion
///
/// Fetches current weather from the provider, normalizes it into the
/// canonical snapshot, and runs the engine over the caller's wardrobe.
/// The engine itself is pure; this function is the only place the
/// recommendation path touches the outside world.
pub async fn recommend_outfit(
    provider: Arc<dyn WeatherProvider>,
    engine: &RecommendationEngine,
    location: &str,
    occasion: &str,
    wardrobe: Vec<ClothingItem>,
) -> AppResult<Recommendation> {
    let start = Instant::now();

    tracing::info!(
        location = %location,
        occasion = %occasion,
        wardrobe_items = wardrobe.len(),
        provider = provider.name(),
        "Starting outfit recommendation"
    );

    let conditions = provider.current_weather(location).await?;
    let snapshot = engine.normalize(&conditions);

    tracing::info!(
        temperature_band = %snapshot.temperature_band,
        precipitating = snapshot.precipitating,
        wind_band = ?snapshot.wind_band,
        "Weather normalized"
    );

    let recommendation = engine.recommend(&snapshot, occasion, &wardrobe)?;

    let elapsed = start.elapsed();
    tracing::info!(
        processing_time_ms = elapsed.as_millis(),
        chosen_items = recommendation.rationale.len(),
        "Recommendation completed"
    );

    Ok(recommendation)
}
