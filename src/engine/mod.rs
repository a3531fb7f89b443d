//! Deterministic outfit recommendation engine
//!
//! A pure, synchronous pipeline over immutable inputs: normalize the raw
//! weather into canonical bands, index the wardrobe by garment type, filter
//! each bucket against warmth/waterproofing/formality constraints, compose
//! one item per required slot with a fixed scoring rule, and assemble the
//! outfit with a per-item rationale. Identical inputs always produce the
//! identical recommendation; nothing here holds state across calls, so any
//! number of requests may run the engine concurrently.

use thiserror::Error;

use crate::models::{ClothingItem, CurrentConditions, GarmentType, Recommendation, WeatherSnapshot};

mod assembler;
mod composer;
mod config;
mod filter;
mod snapshot;
mod wardrobe;

pub use config::{EngineConfig, TemperatureThresholds, WindThresholds};

use wardrobe::WardrobeIndex;

/// Error types for the recommendation engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no recommendation possible: wardrobe is empty")]
    EmptyWardrobe,
    #[error("no suitable {missing_type} satisfies the current weather and occasion")]
    InfeasibleOutfit { missing_type: GarmentType },
}

/// The outfit recommendation engine
///
/// Holds only its configuration; construct once and share freely.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl RecommendationEngine {
    /// Creates an engine with the given policy configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Converts raw provider conditions into the canonical snapshot
    ///
    /// Never fails; missing or malformed readings fall back to the
    /// conservative defaults (mild band, no precipitation, unknown wind).
    pub fn normalize(&self, conditions: &CurrentConditions) -> WeatherSnapshot {
        snapshot::normalize(&self.config, conditions)
    }

    /// Selects a coherent outfit for the given weather, occasion and wardrobe
    ///
    /// Deterministic: scoring ties are broken by wardrobe insertion order,
    /// never by iteration order of any intermediate collection.
    pub fn recommend(
        &self,
        snapshot: &WeatherSnapshot,
        occasion: &str,
        wardrobe: &[ClothingItem],
    ) -> Result<Recommendation, EngineError> {
        let index = WardrobeIndex::build(wardrobe)?;
        let tier = filter::normalize_occasion(occasion);
        let buckets = filter::filter_index(&index, snapshot, tier, &self.config);
        let selection = composer::compose(&buckets, snapshot)?;

        Ok(assembler::assemble(&selection, snapshot, tier, occasion))
    }
}
