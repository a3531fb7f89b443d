use crate::models::{CurrentConditions, WarmthBand, WeatherSnapshot};

use super::config::EngineConfig;

/// Condition words that imply precipitation when no condition code is present
const PRECIPITATION_WORDS: [&str; 5] = ["rain", "drizzle", "snow", "sleet", "thunder"];

/// Converts raw provider conditions into the canonical snapshot
///
/// Never fails: a missing temperature reading lands in the mild band, a
/// missing condition means no precipitation, and a missing wind reading
/// leaves the wind band unset. All provider vocabulary (OpenWeather condition
/// code groups, condition names) is absorbed here so the stages downstream
/// only ever see the canonical bands.
pub(crate) fn normalize(config: &EngineConfig, conditions: &CurrentConditions) -> WeatherSnapshot {
    let temperature_band = conditions
        .temperature_celsius
        .map(|celsius| config.temperature.band(celsius))
        .unwrap_or(WarmthBand::Mild);

    let wind_band = conditions
        .wind_speed_mps
        .map(|speed| config.wind.band(speed));

    WeatherSnapshot {
        temperature_band,
        precipitating: is_precipitating(conditions),
        wind_band,
    }
}

/// True when the reported conditions include rain or snow
///
/// OpenWeather condition ids: 2xx thunderstorm, 3xx drizzle, 5xx rain,
/// 6xx snow. 7xx (atmosphere) and 800+ (clear/clouds) are dry. The condition
/// name is only consulted when no code was reported.
fn is_precipitating(conditions: &CurrentConditions) -> bool {
    if let Some(code) = conditions.condition_code {
        return matches!(code, 200..=699);
    }

    if let Some(condition) = &conditions.condition {
        let condition = condition.to_lowercase();
        return PRECIPITATION_WORDS
            .iter()
            .any(|word| condition.contains(word));
    }

    false
}
