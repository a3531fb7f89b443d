use std::sync::Arc;

use crate::{error::AppResult, models::CurrentConditions, services::providers::WeatherProvider};

/// Service function for current-weather lookup
///
/// Delegates to the configured WeatherProvider, maintaining a clean
/// separation between HTTP routing and provider selection.
pub async fn current_weather(
    provider: Arc<dyn WeatherProvider>,
    location: &str,
) -> AppResult<CurrentConditions> {
    provider.current_weather(location).await
}
