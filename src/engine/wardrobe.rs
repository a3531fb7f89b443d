use crate::models::{ClothingItem, GarmentType};

use super::EngineError;

/// A candidate item together with its original wardrobe position
///
/// The position is the tie-break of last resort everywhere downstream, so it
/// must survive the grouping here.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot<'a> {
    pub position: usize,
    pub item: &'a ClothingItem,
}

/// Wardrobe items grouped by garment type, insertion order preserved
///
/// One named bucket per garment type rather than a map keyed by the enum:
/// lookups stay O(1) and nothing downstream can depend on map iteration
/// order by accident.
#[derive(Debug, Default)]
pub(crate) struct WardrobeIndex<'a> {
    tops: Vec<Slot<'a>>,
    bottoms: Vec<Slot<'a>>,
    shoes: Vec<Slot<'a>>,
    outerwear: Vec<Slot<'a>>,
    accessories: Vec<Slot<'a>>,
}

impl<'a> WardrobeIndex<'a> {
    /// Groups items by garment type
    ///
    /// Errors only on an empty wardrobe; buckets left empty by a sparse
    /// wardrobe are valid, and it is the composer's job to report them when
    /// they block a mandatory slot.
    pub fn build(items: &'a [ClothingItem]) -> Result<Self, EngineError> {
        if items.is_empty() {
            return Err(EngineError::EmptyWardrobe);
        }

        let mut index = Self::default();
        for (position, item) in items.iter().enumerate() {
            index.bucket_mut(item.garment_type).push(Slot { position, item });
        }

        Ok(index)
    }

    /// Candidates for one garment type, in wardrobe insertion order
    pub fn bucket(&self, garment_type: GarmentType) -> &[Slot<'a>] {
        match garment_type {
            GarmentType::Top => &self.tops,
            GarmentType::Bottom => &self.bottoms,
            GarmentType::Shoes => &self.shoes,
            GarmentType::Outerwear => &self.outerwear,
            GarmentType::Accessory => &self.accessories,
        }
    }

    fn bucket_mut(&mut self, garment_type: GarmentType) -> &mut Vec<Slot<'a>> {
        match garment_type {
            GarmentType::Top => &mut self.tops,
            GarmentType::Bottom => &mut self.bottoms,
            GarmentType::Shoes => &mut self.shoes,
            GarmentType::Outerwear => &mut self.outerwear,
            GarmentType::Accessory => &mut self.accessories,
        }
    }
}
