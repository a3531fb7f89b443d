use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::clothing::WarmthBand;

/// Wind strength bucket derived from raw wind speed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WindBand {
    Calm,
    Breezy,
    Windy,
}

/// Canonical weather facts the engine decides on
///
/// Everything provider-specific has been stripped away by the normalizer;
/// absence of source data is resolved to the conservative defaults before
/// this struct exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature_band: WarmthBand,
    pub precipitating: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_band: Option<WindBand>,
}

/// Current conditions as reported by a weather provider
///
/// The fields are optional on purpose: providers omit readings, and the
/// normalizer owns the fallback policy. This struct is also what the weather
/// endpoint returns and what the cache stores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub location: String,
    pub temperature_celsius: Option<f64>,
    pub condition: Option<String>,
    pub condition_code: Option<u16>,
    pub description: Option<String>,
    pub wind_speed_mps: Option<f64>,
    pub fetched_at: DateTime<Utc>,
}

// ============================================================================
// OpenWeather API Types
// ============================================================================

/// Raw response from the OpenWeather current-weather endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiWeatherResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main: Option<ApiMainReadings>,
    #[serde(default)]
    pub weather: Vec<ApiCondition>,
    #[serde(default)]
    pub wind: Option<ApiWind>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMainReadings {
    #[serde(default)]
    pub temp: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCondition {
    #[serde(default)]
    pub id: Option<u16>,
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiWind {
    #[serde(default)]
    pub speed: Option<f64>,
}

impl ApiWeatherResponse {
    /// Flattens the provider response into engine-facing conditions
    ///
    /// The provider's resolved place name wins over the requested query when
    /// present. Only the first reported condition is kept; OpenWeather lists
    /// the primary condition first.
    pub fn into_conditions(self, requested_location: &str) -> CurrentConditions {
        let primary = self.weather.into_iter().next();

        CurrentConditions {
            location: self
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| requested_location.to_string()),
            temperature_celsius: self.main.and_then(|m| m.temp),
            condition: primary.as_ref().and_then(|c| c.main.clone()),
            condition_code: primary.as_ref().and_then(|c| c.id),
            description: primary.and_then(|c| c.description),
            wind_speed_mps: self.wind.and_then(|w| w.speed),
            fetched_at: Utc::now(),
        }
    }
}
