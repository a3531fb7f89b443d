use serde::{Deserialize, Serialize};

use super::clothing::{ClothingItem, Formality, GarmentType};
use super::weather::WeatherSnapshot;

/// A complete outfit: one item per mandatory slot, optional extras
///
/// Mandatory coverage (top, bottom, shoes) is encoded in the type; outerwear
/// and accessory are present only when the composer picked them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outfit {
    pub top: ClothingItem,
    pub bottom: ClothingItem,
    pub shoes: ClothingItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outerwear: Option<ClothingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory: Option<ClothingItem>,
}

/// Why one garment slot was filled the way it was
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RationaleEntry {
    pub garment_type: GarmentType,
    /// Name of the chosen item
    pub item: String,
    pub reason: String,
}

/// The engine's output, serialized as-is by the HTTP layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub outfit: Outfit,
    /// One entry per chosen item, in outfit order
    pub rationale: Vec<RationaleEntry>,
    /// The normalized weather the decision was made against
    pub weather: WeatherSnapshot,
    /// Occasion string as supplied by the caller
    pub occasion: String,
    /// Formality tier the occasion normalized to
    pub formality: Formality,
}
