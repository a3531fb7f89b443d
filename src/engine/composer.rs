use std::cmp::Reverse;

use crate::models::{GarmentType, WarmthBand, WeatherSnapshot, WindBand};

use super::filter::{Candidate, FilteredBuckets, FormalityMatch, WarmthMatch};
use super::EngineError;

/// The composer's choice per slot, before assembly into the output shape
#[derive(Debug)]
pub(crate) struct Selection<'a> {
    pub top: Candidate<'a>,
    pub bottom: Candidate<'a>,
    pub shoes: Candidate<'a>,
    pub outerwear: Option<Candidate<'a>>,
    pub accessory: Option<Candidate<'a>>,
}

/// Candidate score per the fixed policy
///
/// +2 exact warmth / +1 adjacent, +1 exact formality / 0 substituted,
/// +1 when the waterproof flag matches the precipitation need exactly.
pub(crate) fn score(candidate: &Candidate<'_>) -> u32 {
    let warmth = match candidate.warmth {
        WarmthMatch::Exact => 2,
        WarmthMatch::Adjacent => 1,
    };
    let formality = match candidate.formality {
        FormalityMatch::Exact => 1,
        FormalityMatch::Substituted => 0,
    };
    let waterproof = u32::from(candidate.waterproof_exact);

    warmth + formality + waterproof
}

/// Picks one item per slot from the filtered buckets
///
/// Mandatory slots (top, bottom, shoes, checked in that order) fail the
/// whole composition when empty. Outerwear is considered only when the
/// weather warrants it and is silently omitted otherwise or when nothing
/// survived filtering; an accessory is added whenever one is available.
pub(crate) fn compose<'a>(
    buckets: &FilteredBuckets<'a>,
    snapshot: &WeatherSnapshot,
) -> Result<Selection<'a>, EngineError> {
    let top = pick_mandatory(GarmentType::Top, &buckets.top)?;
    let bottom = pick_mandatory(GarmentType::Bottom, &buckets.bottom)?;
    let shoes = pick_mandatory(GarmentType::Shoes, &buckets.shoes)?;

    let windy = snapshot.wind_band == Some(WindBand::Windy);

    let outerwear = if outerwear_warranted(snapshot) {
        pick_best(&buckets.outerwear, windy)
    } else {
        None
    };

    let accessory = pick_best(&buckets.accessory, windy);

    Ok(Selection {
        top,
        bottom,
        shoes,
        outerwear,
        accessory,
    })
}

/// Outerwear belongs in the outfit in cold or cool bands, or in any rain
pub(crate) fn outerwear_warranted(snapshot: &WeatherSnapshot) -> bool {
    matches!(
        snapshot.temperature_band,
        WarmthBand::Cold | WarmthBand::Cool
    ) || snapshot.precipitating
}

fn pick_mandatory<'a>(
    garment_type: GarmentType,
    candidates: &[Candidate<'a>],
) -> Result<Candidate<'a>, EngineError> {
    pick_best(candidates, false).ok_or(EngineError::InfeasibleOutfit {
        missing_type: garment_type,
    })
}

/// Deterministic selection: highest score wins, ties go to the earliest
/// wardrobe position. In windy conditions (outerwear/accessory slots only)
/// a warmer candidate breaks the tie before position does.
fn pick_best<'a>(candidates: &[Candidate<'a>], windy: bool) -> Option<Candidate<'a>> {
    candidates
        .iter()
        .max_by_key(|candidate| {
            let wind_preference = if windy {
                candidate.item.warmth_level.index()
            } else {
                0
            };
            (score(candidate), wind_preference, Reverse(candidate.position))
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClothingItem, Formality};

    fn candidate(
        name: &str,
        position: usize,
        warmth: WarmthMatch,
        formality: FormalityMatch,
        waterproof_exact: bool,
    ) -> Candidate<'static> {
        let item = Box::leak(Box::new(ClothingItem {
            name: name.to_string(),
            garment_type: GarmentType::Top,
            warmth_level: WarmthBand::Mild,
            waterproof: false,
            colors: vec![],
            formality: Formality::Casual,
        }));

        Candidate {
            item,
            position,
            warmth,
            formality,
            waterproof_exact,
        }
    }

    fn dry_snapshot(band: WarmthBand) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_band: band,
            precipitating: false,
            wind_band: None,
        }
    }

    fn empty_buckets() -> FilteredBuckets<'static> {
        FilteredBuckets {
            top: vec![],
            bottom: vec![],
            shoes: vec![],
            outerwear: vec![],
            accessory: vec![],
        }
    }

    #[test]
    fn test_score_weights() {
        let best = candidate("a", 0, WarmthMatch::Exact, FormalityMatch::Exact, true);
        assert_eq!(score(&best), 4);

        let worst = candidate("b", 0, WarmthMatch::Adjacent, FormalityMatch::Substituted, false);
        assert_eq!(score(&worst), 1);
    }

    #[test]
    fn test_highest_score_wins() {
        let weak = candidate("weak", 0, WarmthMatch::Adjacent, FormalityMatch::Exact, false);
        let strong = candidate("strong", 1, WarmthMatch::Exact, FormalityMatch::Exact, true);

        let chosen = pick_best(&[weak, strong], false).unwrap();
        assert_eq!(chosen.item.name, "strong");
    }

    #[test]
    fn test_tie_goes_to_earliest_insertion() {
        let first = candidate("first", 2, WarmthMatch::Exact, FormalityMatch::Exact, false);
        let second = candidate("second", 5, WarmthMatch::Exact, FormalityMatch::Exact, false);

        // Order in the candidate list must not matter, only position
        let chosen = pick_best(&[second, first], false).unwrap();
        assert_eq!(chosen.item.name, "first");
    }

    #[test]
    fn test_windy_tie_prefers_warmer_candidate() {
        let mut cool = candidate("cool one", 0, WarmthMatch::Exact, FormalityMatch::Exact, false);
        let cool_item = Box::leak(Box::new(ClothingItem {
            warmth_level: WarmthBand::Cool,
            ..cool.item.clone()
        }));
        cool.item = cool_item;

        let mut warm = candidate("warm one", 1, WarmthMatch::Exact, FormalityMatch::Exact, false);
        let warm_item = Box::leak(Box::new(ClothingItem {
            warmth_level: WarmthBand::Warm,
            ..warm.item.clone()
        }));
        warm.item = warm_item;

        // Without wind the earlier position wins; with wind the warmer item does
        let calm_choice = pick_best(&[cool, warm], false).unwrap();
        assert_eq!(calm_choice.item.name, "cool one");

        let windy_choice = pick_best(&[cool, warm], true).unwrap();
        assert_eq!(windy_choice.item.name, "warm one");
    }

    #[test]
    fn test_missing_mandatory_type_fails_in_fixed_order() {
        let mut buckets = empty_buckets();
        buckets.top = vec![candidate("tee", 0, WarmthMatch::Exact, FormalityMatch::Exact, true)];

        // Both bottom and shoes are missing; bottom is reported first
        let result = compose(&buckets, &dry_snapshot(WarmthBand::Mild));
        assert_eq!(
            result.unwrap_err(),
            EngineError::InfeasibleOutfit {
                missing_type: GarmentType::Bottom
            }
        );
    }

    #[test]
    fn test_outerwear_omitted_when_not_warranted() {
        let mut buckets = empty_buckets();
        buckets.top = vec![candidate("tee", 0, WarmthMatch::Exact, FormalityMatch::Exact, true)];
        buckets.bottom = vec![candidate("shorts", 1, WarmthMatch::Exact, FormalityMatch::Exact, true)];
        buckets.shoes = vec![candidate("sneakers", 2, WarmthMatch::Exact, FormalityMatch::Exact, true)];
        buckets.outerwear =
            vec![candidate("jacket", 3, WarmthMatch::Exact, FormalityMatch::Exact, true)];

        let selection = compose(&buckets, &dry_snapshot(WarmthBand::Warm)).unwrap();
        assert!(selection.outerwear.is_none());
    }

    #[test]
    fn test_outerwear_included_in_cold_band() {
        let mut buckets = empty_buckets();
        buckets.top = vec![candidate("sweater", 0, WarmthMatch::Exact, FormalityMatch::Exact, true)];
        buckets.bottom = vec![candidate("jeans", 1, WarmthMatch::Exact, FormalityMatch::Exact, true)];
        buckets.shoes = vec![candidate("boots", 2, WarmthMatch::Exact, FormalityMatch::Exact, true)];
        buckets.outerwear =
            vec![candidate("parka", 3, WarmthMatch::Exact, FormalityMatch::Exact, true)];

        let selection = compose(&buckets, &dry_snapshot(WarmthBand::Cold)).unwrap();
        assert_eq!(selection.outerwear.unwrap().item.name, "parka");
    }

    #[test]
    fn test_outerwear_warranted_but_unavailable_is_not_an_error() {
        let mut buckets = empty_buckets();
        buckets.top = vec![candidate("sweater", 0, WarmthMatch::Exact, FormalityMatch::Exact, true)];
        buckets.bottom = vec![candidate("jeans", 1, WarmthMatch::Exact, FormalityMatch::Exact, true)];
        buckets.shoes = vec![candidate("boots", 2, WarmthMatch::Exact, FormalityMatch::Exact, true)];

        let selection = compose(&buckets, &dry_snapshot(WarmthBand::Cold)).unwrap();
        assert!(selection.outerwear.is_none());
    }

    #[test]
    fn test_accessory_is_opportunistic() {
        let mut buckets = empty_buckets();
        buckets.top = vec![candidate("tee", 0, WarmthMatch::Exact, FormalityMatch::Exact, true)];
        buckets.bottom = vec![candidate("shorts", 1, WarmthMatch::Exact, FormalityMatch::Exact, true)];
        buckets.shoes = vec![candidate("sneakers", 2, WarmthMatch::Exact, FormalityMatch::Exact, true)];

        let selection = compose(&buckets, &dry_snapshot(WarmthBand::Warm)).unwrap();
        assert!(selection.accessory.is_none());

        buckets.accessory =
            vec![candidate("cap", 3, WarmthMatch::Exact, FormalityMatch::Exact, true)];
        let selection = compose(&buckets, &dry_snapshot(WarmthBand::Warm)).unwrap();
        assert_eq!(selection.accessory.unwrap().item.name, "cap");
    }
}
