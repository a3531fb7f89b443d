/// OpenWeather current-weather provider
///
/// Fetches `/data/2.5/weather` in metric units and flattens the response
/// into `CurrentConditions`. Lookups are wrapped in a short-TTL Redis cache
/// keyed by the normalized location, so bursts of requests for the same
/// place cost one upstream call.
use reqwest::Client as HttpClient;

use crate::{
    cache::{Cache, CacheKey},
    cached,
    error::{AppError, AppResult},
    models::{ApiWeatherResponse, CurrentConditions},
    services::providers::WeatherProvider,
};

const WEATHER_CACHE_TTL: u64 = 600; // 10 minutes

#[derive(Clone)]
pub struct OpenWeatherProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    cache: Cache,
}

impl OpenWeatherProvider {
    /// Creates a new OpenWeather provider
    pub fn new(cache: Cache, api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            cache,
        }
    }

    async fn fetch_current(&self, location: &str) -> AppResult<CurrentConditions> {
        let url = format!("{}/data/2.5/weather", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("q", location),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Unknown location: {}", location)));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OpenWeather API returned status {}: {}",
                status, body
            )));
        }

        let api_response: ApiWeatherResponse = response.json().await?;
        let conditions = api_response.into_conditions(location);

        tracing::info!(
            location = %conditions.location,
            temperature = ?conditions.temperature_celsius,
            condition = ?conditions.condition,
            provider = "openweather",
            "Current weather fetched"
        );

        Ok(conditions)
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, location: &str) -> AppResult<CurrentConditions> {
        if location.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Location cannot be empty".to_string(),
            ));
        }

        cached!(
            self.cache,
            CacheKey::CurrentWeather(location.to_string()),
            WEATHER_CACHE_TTL,
            self.fetch_current(location)
        )
    }

    fn name(&self) -> &'static str {
        "openweather"
    }
}
