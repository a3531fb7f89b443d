use crate::models::{
    Formality, GarmentType, Outfit, RationaleEntry, Recommendation, WeatherSnapshot, WindBand,
};

use super::composer::Selection;
use super::filter::{Candidate, FormalityMatch, WarmthMatch};

/// Packages a composed selection into the output structure
///
/// Pure transformation: clones the chosen items into the outfit and records,
/// per slot, which constraints drove the choice. Entries follow outfit order
/// (top, bottom, shoes, then outerwear and accessory when present).
pub(crate) fn assemble(
    selection: &Selection<'_>,
    snapshot: &WeatherSnapshot,
    tier: Formality,
    occasion: &str,
) -> Recommendation {
    let mut rationale = vec![
        rationale_entry(GarmentType::Top, &selection.top, snapshot, tier),
        rationale_entry(GarmentType::Bottom, &selection.bottom, snapshot, tier),
        rationale_entry(GarmentType::Shoes, &selection.shoes, snapshot, tier),
    ];

    if let Some(outerwear) = &selection.outerwear {
        rationale.push(rationale_entry(
            GarmentType::Outerwear,
            outerwear,
            snapshot,
            tier,
        ));
    }
    if let Some(accessory) = &selection.accessory {
        rationale.push(rationale_entry(
            GarmentType::Accessory,
            accessory,
            snapshot,
            tier,
        ));
    }

    Recommendation {
        outfit: Outfit {
            top: selection.top.item.clone(),
            bottom: selection.bottom.item.clone(),
            shoes: selection.shoes.item.clone(),
            outerwear: selection.outerwear.as_ref().map(|c| c.item.clone()),
            accessory: selection.accessory.as_ref().map(|c| c.item.clone()),
        },
        rationale,
        weather: snapshot.clone(),
        occasion: occasion.to_string(),
        formality: tier,
    }
}

fn rationale_entry(
    garment_type: GarmentType,
    candidate: &Candidate<'_>,
    snapshot: &WeatherSnapshot,
    tier: Formality,
) -> RationaleEntry {
    let mut reasons = Vec::new();

    match candidate.warmth {
        WarmthMatch::Exact => {
            reasons.push(format!("rated for {} weather", snapshot.temperature_band));
        }
        WarmthMatch::Adjacent => {
            reasons.push(format!(
                "closest available warmth to the {} band",
                snapshot.temperature_band
            ));
        }
    }

    match candidate.formality {
        FormalityMatch::Exact => {
            reasons.push(format!("suits a {} occasion", tier));
        }
        FormalityMatch::Substituted => {
            reasons.push(format!("casual stand-in, nothing {}-rated available", tier));
        }
    }

    if snapshot.precipitating {
        if candidate.item.waterproof {
            reasons.push("waterproof for the current precipitation".to_string());
        } else {
            reasons.push("precipitation expected but no waterproof option".to_string());
        }
    }

    if snapshot.wind_band == Some(WindBand::Windy)
        && matches!(
            garment_type,
            GarmentType::Outerwear | GarmentType::Accessory
        )
    {
        reasons.push("chosen with the strong wind in mind".to_string());
    }

    RationaleEntry {
        garment_type,
        item: candidate.item.name.clone(),
        reason: reasons.join("; "),
    }
}
