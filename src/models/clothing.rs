use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// The functional slot a clothing item fills in an outfit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GarmentType {
    Top,
    Bottom,
    Shoes,
    Outerwear,
    Accessory,
}

impl Display for GarmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GarmentType::Top => "top",
            GarmentType::Bottom => "bottom",
            GarmentType::Shoes => "shoes",
            GarmentType::Outerwear => "outerwear",
            GarmentType::Accessory => "accessory",
        };
        write!(f, "{}", name)
    }
}

/// Five-level warmth scale shared by weather bands and garment ratings
///
/// The scale is ordered coldest to hottest; adjacency (index distance of one)
/// is what the constraint filter falls back to when a bucket has no exact
/// match for the current temperature band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum WarmthBand {
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
}

impl WarmthBand {
    pub const SCALE: [WarmthBand; 5] = [
        WarmthBand::Cold,
        WarmthBand::Cool,
        WarmthBand::Mild,
        WarmthBand::Warm,
        WarmthBand::Hot,
    ];

    /// Position on the ordered scale
    pub fn index(self) -> usize {
        self as usize
    }

    /// True when the two bands sit next to each other on the scale
    pub fn is_adjacent_to(self, other: WarmthBand) -> bool {
        self.index().abs_diff(other.index()) == 1
    }
}

impl Display for WarmthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WarmthBand::Cold => "cold",
            WarmthBand::Cool => "cool",
            WarmthBand::Mild => "mild",
            WarmthBand::Warm => "warm",
            WarmthBand::Hot => "hot",
        };
        write!(f, "{}", name)
    }
}

/// Formality tier used to match occasions to clothing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    #[default]
    Casual,
    Business,
    Formal,
}

impl Display for Formality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Formality::Casual => "casual",
            Formality::Business => "business",
            Formality::Formal => "formal",
        };
        write!(f, "{}", name)
    }
}

/// One wardrobe entry as the engine sees it
///
/// Items are read-only inputs to the recommendation pipeline; nothing in the
/// engine mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingItem {
    /// Free-text label (non-empty)
    pub name: String,
    /// Slot the item fills
    pub garment_type: GarmentType,
    /// Weather band the item is suited for
    pub warmth_level: WarmthBand,
    #[serde(default)]
    pub waterproof: bool,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub formality: Formality,
}

/// A stored wardrobe record: an item plus ownership metadata
///
/// Entries without a user id belong to the shared/default wardrobe that every
/// request can draw from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WardrobeEntry {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub item: ClothingItem,
}

impl WardrobeEntry {
    /// Creates a new wardrobe entry with a fresh id
    pub fn new(user_id: Option<String>, item: ClothingItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            item,
        }
    }
}
