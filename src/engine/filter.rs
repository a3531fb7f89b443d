use crate::models::{ClothingItem, Formality, GarmentType, WeatherSnapshot};

use super::config::EngineConfig;
use super::wardrobe::{Slot, WardrobeIndex};

/// How a candidate satisfied the warmth constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WarmthMatch {
    Exact,
    Adjacent,
}

/// How a candidate satisfied the formality constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormalityMatch {
    Exact,
    Substituted,
}

/// A filtered candidate, annotated with which fallbacks it needed
///
/// The annotations feed both the composer's scoring and the assembler's
/// rationale, so they are recorded once here instead of being re-derived.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a> {
    pub item: &'a ClothingItem,
    pub position: usize,
    pub warmth: WarmthMatch,
    pub formality: FormalityMatch,
    pub waterproof_exact: bool,
}

/// The five buckets after constraint filtering
///
/// Empty buckets are a normal outcome here; only the composer decides
/// whether an empty bucket is fatal.
#[derive(Debug)]
pub(crate) struct FilteredBuckets<'a> {
    pub top: Vec<Candidate<'a>>,
    pub bottom: Vec<Candidate<'a>>,
    pub shoes: Vec<Candidate<'a>>,
    pub outerwear: Vec<Candidate<'a>>,
    pub accessory: Vec<Candidate<'a>>,
}

/// Maps a free-form occasion string onto a formality tier
///
/// The vocabulary is open; anything unrecognized is casual.
pub(crate) fn normalize_occasion(occasion: &str) -> Formality {
    const FORMAL_WORDS: [&str; 5] = ["formal", "wedding", "gala", "black tie", "funeral"];
    const BUSINESS_WORDS: [&str; 5] = ["business", "work", "office", "meeting", "interview"];

    let occasion = occasion.trim().to_lowercase();

    if FORMAL_WORDS.iter().any(|word| occasion.contains(word)) {
        Formality::Formal
    } else if BUSINESS_WORDS.iter().any(|word| occasion.contains(word)) {
        Formality::Business
    } else {
        Formality::Casual
    }
}

/// Runs the constraint filter over every bucket of the index
pub(crate) fn filter_index<'a>(
    index: &WardrobeIndex<'a>,
    snapshot: &WeatherSnapshot,
    tier: Formality,
    config: &EngineConfig,
) -> FilteredBuckets<'a> {
    let filter = |garment_type| {
        filter_bucket(garment_type, index.bucket(garment_type), snapshot, tier, config)
    };

    FilteredBuckets {
        top: filter(GarmentType::Top),
        bottom: filter(GarmentType::Bottom),
        shoes: filter(GarmentType::Shoes),
        outerwear: filter(GarmentType::Outerwear),
        accessory: filter(GarmentType::Accessory),
    }
}

/// Applies the three candidate constraints to one bucket
///
/// Each constraint's fallback is decided against the raw bucket:
/// - warmth: exact band match, or adjacent band when the bucket holds no
///   exact match at all;
/// - formality: exact tier, or casual standing in for business when the
///   bucket holds nothing business-rated (casual never stands in for formal,
///   and formal items never substitute downward);
/// - waterproofing: in precipitation, outerwear and shoes must be waterproof
///   when the bucket has any waterproof option, and the constraint is
///   relaxed when it has none.
pub(crate) fn filter_bucket<'a>(
    garment_type: GarmentType,
    bucket: &[Slot<'a>],
    snapshot: &WeatherSnapshot,
    tier: Formality,
    config: &EngineConfig,
) -> Vec<Candidate<'a>> {
    let band = snapshot.temperature_band;
    let has_exact_warmth = bucket.iter().any(|slot| slot.item.warmth_level == band);
    let has_exact_formality = bucket.iter().any(|slot| slot.item.formality == tier);
    let waterproof_required = snapshot.precipitating
        && matches!(garment_type, GarmentType::Outerwear | GarmentType::Shoes)
        && bucket.iter().any(|slot| slot.item.waterproof);

    bucket
        .iter()
        .filter_map(|slot| {
            let warmth = if slot.item.warmth_level == band {
                WarmthMatch::Exact
            } else if !has_exact_warmth && slot.item.warmth_level.is_adjacent_to(band) {
                WarmthMatch::Adjacent
            } else {
                return None;
            };

            let formality = if slot.item.formality == tier {
                FormalityMatch::Exact
            } else if config.allow_casual_for_business
                && tier == Formality::Business
                && !has_exact_formality
                && slot.item.formality == Formality::Casual
            {
                FormalityMatch::Substituted
            } else {
                return None;
            };

            if waterproof_required && !slot.item.waterproof {
                return None;
            }

            Some(Candidate {
                item: slot.item,
                position: slot.position,
                warmth,
                formality,
                waterproof_exact: slot.item.waterproof == snapshot.precipitating,
            })
        })
        .collect()
}
