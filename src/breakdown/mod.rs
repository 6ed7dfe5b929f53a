//! Breakdown recipe derivation engine
//!
//! Two independent paths feed the same output form:
//! - derived: filter eligible source recipes, select components worth
//!   recovering, and synthesize one breakdown recipe per selection;
//! - custom: fold the three user-declared entry lists into one shape and
//!   build each directly (one declared input, one declared output).
//!
//! The whole pass is stateless and deterministic over its inputs.

pub mod builder;
pub mod custom;
pub mod filter;
pub mod select;
pub mod tiers;

pub use tiers::{TierEntry, TierTable};

use crate::core::config::Settings;
use crate::core::types::{BreakdownRecipe, ItemKind, ItemRef, SourceRecipe};

/// Read-only record resolution, provided by the dataset layer
pub trait RecordStore {
    /// Classify the record behind a reference; None for dangling refs
    fn resolve(&self, item: &ItemRef) -> Option<ItemKind>;
}

/// Append-only, order-preserving sink for generated recipes
pub trait RecipeSink {
    fn emit(&mut self, recipe: BreakdownRecipe);
}

impl RecipeSink for Vec<BreakdownRecipe> {
    fn emit(&mut self, recipe: BreakdownRecipe) {
        self.push(recipe);
    }
}

/// Run both generation paths over the source recipes.
///
/// Source recipes must arrive deduplicated and in a stable priority
/// order; the pass emits in that order for the derived path, then in
/// merged declaration order for the custom path.
pub fn generate(
    recipes: &[SourceRecipe],
    store: &dyn RecordStore,
    tiers: &TierTable,
    settings: &Settings,
    sink: &mut dyn RecipeSink,
) {
    let mut derived = 0usize;
    for recipe in recipes {
        if !filter::is_eligible(recipe, &settings.excluded_crafting_stations, store) {
            continue;
        }
        let selected = select::select(
            recipe,
            tiers,
            settings.generate_recipe_for_each_component,
        );
        for (idx, entry) in selected.into_iter().enumerate() {
            let built = builder::build(recipe, entry, settings.yield_percentage, idx + 1);
            tracing::debug!(id = %built.id, "derived breakdown recipe");
            sink.emit(built);
            derived += 1;
        }
    }

    let mut custom = 0usize;
    let merged = custom::merge(
        &settings.weapon_recipes,
        &settings.armor_recipes,
        &settings.misc_recipes,
    );
    for entry in &merged {
        match custom::build_custom(entry) {
            Some(built) => {
                tracing::debug!(id = %built.id, "custom breakdown recipe");
                sink.emit(built);
                custom += 1;
            }
            None => {
                tracing::warn!(
                    category = ?entry.category,
                    "skipping custom entry with missing item reference"
                );
            }
        }
    }

    tracing::info!(derived, custom, "breakdown generation complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;

    struct MapStore(AHashMap<ItemRef, ItemKind>);

    impl RecordStore for MapStore {
        fn resolve(&self, item: &ItemRef) -> Option<ItemKind> {
            self.0.get(item).copied()
        }
    }

    #[test]
    fn test_generate_orders_derived_before_custom() {
        let mut map = AHashMap::new();
        map.insert(ItemRef::from("IronDagger"), ItemKind::Weapon);
        let store = MapStore(map);

        let recipes = vec![SourceRecipe {
            id: Some("RecipeIronDagger".into()),
            workbench: ItemRef::from("CraftingForge"),
            inputs: vec![(ItemRef::from("IngotIron"), 1)],
            output: ItemRef::from("IronDagger"),
            output_count: None,
            conditions: Vec::new(),
        }];

        let mut settings = Settings::default();
        settings.misc_recipes = vec![custom::CustomEntry::misc("Gold001", 100, "IngotGold", 1)];

        let mut out: Vec<BreakdownRecipe> = Vec::new();
        generate(
            &recipes,
            &store,
            &TierTable::with_defaults(),
            &settings,
            &mut out,
        );

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "BreakdownRecipeIronDagger1");
        assert_eq!(out[1].id, "BreakdownGold001-IngotGold");
    }

    #[test]
    fn test_generate_skips_incomplete_custom_entries() {
        let store = MapStore(AHashMap::new());
        let mut settings = Settings::default();
        settings.misc_recipes = vec![custom::CustomEntry::default()];

        let mut out: Vec<BreakdownRecipe> = Vec::new();
        generate(&[], &store, &TierTable::new(), &settings, &mut out);
        assert!(out.is_empty());
    }
}
