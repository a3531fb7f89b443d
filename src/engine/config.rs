use serde::{Deserialize, Serialize};

use crate::models::{WarmthBand, WindBand};

/// Tunable policy for the recommendation engine
///
/// Passed in at construction so the engine stays a pure function of its
/// inputs; nothing in the pipeline reads ambient or global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Temperature cut points for banding raw readings
    pub temperature: TemperatureThresholds,
    /// Wind speed cut points for banding raw readings
    pub wind: WindThresholds,
    /// Whether casual items may stand in for business when nothing
    /// business-rated exists in a bucket
    pub allow_casual_for_business: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            temperature: TemperatureThresholds::default(),
            wind: WindThresholds::default(),
            allow_casual_for_business: true,
        }
    }
}

/// Contiguous, non-overlapping temperature bands in degrees Celsius
///
/// A reading below `cold_below` is cold; each following bound is exclusive
/// except `warm_to`, which itself still counts as warm. Anything above is hot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureThresholds {
    pub cold_below: f64,
    pub cool_below: f64,
    pub mild_below: f64,
    pub warm_to: f64,
}

impl Default for TemperatureThresholds {
    fn default() -> Self {
        Self {
            cold_below: 5.0,
            cool_below: 12.0,
            mild_below: 20.0,
            warm_to: 28.0,
        }
    }
}

impl TemperatureThresholds {
    /// Maps a Celsius reading onto the five-band scale
    pub fn band(&self, celsius: f64) -> WarmthBand {
        if celsius < self.cold_below {
            WarmthBand::Cold
        } else if celsius < self.cool_below {
            WarmthBand::Cool
        } else if celsius < self.mild_below {
            WarmthBand::Mild
        } else if celsius <= self.warm_to {
            WarmthBand::Warm
        } else {
            WarmthBand::Hot
        }
    }
}

/// Wind speed bands in meters per second
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindThresholds {
    pub calm_below: f64,
    pub breezy_below: f64,
}

impl Default for WindThresholds {
    fn default() -> Self {
        Self {
            calm_below: 4.0,
            breezy_below: 9.0,
        }
    }
}

impl WindThresholds {
    /// Maps a wind speed reading onto a wind band
    pub fn band(&self, speed_mps: f64) -> WindBand {
        if speed_mps < self.calm_below {
            WindBand::Calm
        } else if speed_mps < self.breezy_below {
            WindBand::Breezy
        } else {
            WindBand::Windy
        }
    }
}
