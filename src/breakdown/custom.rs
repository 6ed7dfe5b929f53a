//! User-declared custom breakdown entries
//!
//! The configuration carries three parallel lists (weapon-, armor-, and
//! misc-sourced) that only differ in the declared category of the required
//! item. They share one entry shape here, tagged with the source category,
//! and go through a simplified build path: one declared input, one declared
//! output, no tiering or selection.

use crate::core::types::{BreakdownRecipe, CompareOp, Condition, ItemRef, PerkRef, WorkbenchKind};
use serde::Deserialize;

/// Which configured list an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryCategory {
    Weapon,
    Armor,
    #[default]
    Misc,
}

/// A declared breakdown conversion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CustomEntry {
    /// Item consumed by the breakdown recipe
    pub required_item: Option<ItemRef>,
    pub required_amount: u32,
    /// Component the recipe yields
    pub resulting_item: Option<ItemRef>,
    pub result_yield: u32,
    /// Route to the tanning rack instead of the smelter
    pub tanning_rack_entry: bool,
    /// Perks the actor must hold to use the recipe
    pub required_perks: Vec<PerkRef>,
    #[serde(skip)]
    pub category: EntryCategory,
}

impl Default for CustomEntry {
    fn default() -> Self {
        Self {
            required_item: None,
            required_amount: 1,
            resulting_item: None,
            result_yield: 1,
            tanning_rack_entry: false,
            required_perks: Vec::new(),
            category: EntryCategory::Misc,
        }
    }
}

impl CustomEntry {
    /// A misc-sourced conversion
    pub fn misc(required: &str, amount: u32, resulting: &str, result_yield: u32) -> Self {
        Self {
            required_item: Some(ItemRef::from(required)),
            required_amount: amount,
            resulting_item: Some(ItemRef::from(resulting)),
            result_yield,
            ..Self::default()
        }
    }

    pub fn with_perk(mut self, perk: &str) -> Self {
        self.required_perks.push(PerkRef::from(perk));
        self
    }

    pub fn tanning(mut self) -> Self {
        self.tanning_rack_entry = true;
        self
    }
}

/// Fold the three configured lists into one, preserving relative order:
/// weapon entries first, then armor, then misc.
pub fn merge(
    weapon: &[CustomEntry],
    armor: &[CustomEntry],
    misc: &[CustomEntry],
) -> Vec<CustomEntry> {
    weapon.iter().chain(armor).chain(misc).cloned().collect()
}

/// Build a breakdown recipe from a declared entry.
///
/// Returns None when either endpoint is unset; incomplete entries are
/// expected in hand-written configuration and are skipped, not errors.
/// The identifier encodes both endpoints, so it is unique as long as no
/// two entries declare the same conversion.
pub fn build_custom(entry: &CustomEntry) -> Option<BreakdownRecipe> {
    let required = entry.required_item.as_ref()?;
    let resulting = entry.resulting_item.as_ref()?;

    let mut conditions = vec![Condition::ItemCount {
        item: required.clone(),
        op: CompareOp::GreaterThan,
        value: 0,
    }];
    for perk in &entry.required_perks {
        conditions.push(Condition::HasPerk {
            perk: perk.clone(),
            op: CompareOp::EqualTo,
            value: 1,
        });
    }

    Some(BreakdownRecipe {
        id: format!("Breakdown{}-{}", required, resulting),
        workbench: if entry.tanning_rack_entry {
            WorkbenchKind::TanningRack
        } else {
            WorkbenchKind::Smelter
        },
        input: (required.clone(), entry.required_amount.max(1)),
        output: (resulting.clone(), entry.result_yield.max(1)),
        conditions,
    })
}
