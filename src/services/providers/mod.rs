/// Weather data provider abstraction
///
/// Pluggable boundary for current-weather sources (OpenWeather today, any
/// other provider tomorrow). Handlers and the recommendation service only
/// ever see `CurrentConditions`; everything provider-specific stays behind
/// this trait and the engine's normalizer.
use crate::{error::AppResult, models::CurrentConditions};

pub mod open_weather;

/// Trait for current-weather providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions for a free-form location query
    ///
    /// Implementations resolve the location however their upstream does and
    /// report readings they could not obtain as `None` fields; the engine
    /// owns the fallback policy for those.
    async fn current_weather(&self, location: &str) -> AppResult<CurrentConditions>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
