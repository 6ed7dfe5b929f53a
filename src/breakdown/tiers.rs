//! Component tier table - ranks crafting components by refinement
//!
//! Higher tier means more processed or valuable. Anything not listed has
//! tier 0, so it is less important than anything listed.

use crate::core::keys;
use crate::core::types::ItemRef;

/// A crafting component paired with its importance tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierEntry {
    pub component: ItemRef,
    pub tier: u32,
}

/// Ordered list of component tiers; lookup is first-match
#[derive(Debug, Clone, Default)]
pub struct TierTable {
    entries: Vec<TierEntry>,
}

impl TierTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in tier assignments for vanilla smithing components
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        let defaults = [
            (keys::BONE_MEAL, 1),
            (keys::LEATHER, 1),
            (keys::INGOT_IRON, 1),
            (keys::INGOT_STEEL, 2),
            (keys::INGOT_SILVER, 2),
            (keys::INGOT_CORUNDUM, 2),
            (keys::INGOT_DWARVEN, 3),
            (keys::INGOT_MOONSTONE, 3),
            (keys::INGOT_QUICKSILVER, 3),
            // Gold ingot deliberately unlisted so gems or gold can each
            // be extracted from jewelry recipes.
            (keys::INGOT_ORICHALCUM, 3),
            (keys::INGOT_MALACHITE, 3),
            (keys::INGOT_EBONY, 4),
            (keys::DRAGON_BONE, 4),
            (keys::DRAGON_SCALES, 4),
            (keys::ORE_STALHRIM, 4),
        ];
        for (component, tier) in defaults {
            table.add(ItemRef::from(component), tier);
        }
        table
    }

    pub fn add(&mut self, component: ItemRef, tier: u32) {
        self.entries.push(TierEntry { component, tier });
    }

    /// Tier of the given component; 0 when unlisted
    pub fn tier_of(&self, component: &ItemRef) -> u32 {
        self.entries
            .iter()
            .find(|e| e.component == *component)
            .map(|e| e.tier)
            .unwrap_or(0)
    }
}
