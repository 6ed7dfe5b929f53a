//! Run settings with documented defaults
//!
//! Settings can be loaded from a TOML file or fall back to the built-in
//! defaults, which mirror a vanilla smithing setup: 80% yield, breakdown
//! recipes only for the highest-tier components, tempering stations
//! excluded, and a seed list of scrap/ore/firewood conversions.

use crate::breakdown::custom::{CustomEntry, EntryCategory};
use crate::core::error::{ForgeError, Result};
use crate::core::keys;
use crate::core::types::ItemRef;
use serde::Deserialize;
use std::path::Path;

/// Configuration for a generation run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Percentage of the original material requirements a breakdown
    /// recipe gives back (decimal results are rounded down).
    /// Must be in (0, 100].
    pub yield_percentage: u32,

    /// Generate a recipe for every component of a crafting recipe
    /// instead of only for the highest-tier ones.
    pub generate_recipe_for_each_component: bool,

    /// Station keywords to exclude. Stations with tempering recipes
    /// belong here, since tempering already covers recovery there.
    pub excluded_crafting_stations: Vec<ItemRef>,

    /// Custom weapon-sourced breakdown entries
    pub weapon_recipes: Vec<CustomEntry>,

    /// Custom armor-sourced breakdown entries
    pub armor_recipes: Vec<CustomEntry>,

    /// Custom misc-sourced breakdown entries
    pub misc_recipes: Vec<CustomEntry>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            yield_percentage: 80,
            generate_recipe_for_each_component: false,
            excluded_crafting_stations: vec![
                ItemRef::from(keys::SMITHING_ARMOR_TABLE),
                ItemRef::from(keys::SMITHING_SHARPENING_WHEEL),
            ],
            weapon_recipes: Vec::new(),
            armor_recipes: Vec::new(),
            misc_recipes: default_misc_recipes(),
        }
    }
}

/// Seed list of conversions for items that never had crafting recipes:
/// broken weapon parts, raw gold, firewood, and dwarven scrap.
fn default_misc_recipes() -> Vec<CustomEntry> {
    let broken_iron = [
        keys::IRON_MACE_BROKEN_HANDLE,
        keys::IRON_MACE_BROKEN_TOP,
        keys::IRON_SWORD_BROKEN_HANDLE,
        keys::IRON_SWORD_BROKEN_TOP,
        keys::IRON_WAR_AXE_BROKEN_HANDLE,
        keys::IRON_WAR_AXE_BROKEN_TOP,
    ];
    let dwarven_scrap = [
        (keys::DWARVEN_BOWL_01, 2),
        (keys::DWARVEN_BOWL_02, 2),
        (keys::DWARVEN_BOWL_03, 2),
        (keys::DWARVEN_COG, 3),
        (keys::DWARVEN_GEAR, 3),
        (keys::DWARVEN_SCRAP_METAL, 2),
    ];

    let mut entries: Vec<CustomEntry> = broken_iron
        .into_iter()
        .map(|part| CustomEntry::misc(part, 1, keys::INGOT_IRON, 1))
        .collect();
    entries.push(CustomEntry::misc(keys::GOLD_COIN, 100, keys::INGOT_GOLD, 1));
    entries.push(CustomEntry::misc(keys::FIREWOOD, 1, keys::COAL, 3));
    entries.push(CustomEntry::misc(keys::FIREWOOD, 1, keys::CHARCOAL, 6));
    entries.extend(dwarven_scrap.into_iter().map(|(item, amount)| {
        CustomEntry::misc(item, amount, keys::INGOT_DWARVEN, 1)
            .with_perk(keys::PERK_DWARVEN_SMITHING)
    }));
    entries
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse settings from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut settings: Settings = toml::from_str(content)
            .map_err(|e| ForgeError::Settings(e.to_string()))?;
        settings.normalize();
        settings.validate()?;
        Ok(settings)
    }

    /// Tag each custom list with its source category and clamp declared
    /// counts to at least 1.
    fn normalize(&mut self) {
        for entry in &mut self.weapon_recipes {
            entry.category = EntryCategory::Weapon;
        }
        for entry in &mut self.armor_recipes {
            entry.category = EntryCategory::Armor;
        }
        for entry in &mut self.misc_recipes {
            entry.category = EntryCategory::Misc;
        }
        let lists = [
            &mut self.weapon_recipes,
            &mut self.armor_recipes,
            &mut self.misc_recipes,
        ];
        for list in lists {
            for entry in list {
                entry.required_amount = entry.required_amount.max(1);
                entry.result_yield = entry.result_yield.max(1);
            }
        }
    }

    /// Reject settings the generation pass cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.yield_percentage == 0 || self.yield_percentage > 100 {
            return Err(ForgeError::Settings(format!(
                "yield_percentage must be in (0, 100], got {}",
                self.yield_percentage
            )));
        }
        Ok(())
    }
}
