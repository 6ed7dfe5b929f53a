//! Eligibility filtering of source recipes
//!
//! Most records in a crafting dataset should not spawn breakdown recipes;
//! failing a check here is steady-state behavior, not an error.

use crate::breakdown::RecordStore;
use crate::core::types::{ItemKind, ItemRef, SourceRecipe};

/// Whether a source recipe should get breakdown recipes derived from it.
///
/// Requires all of:
/// - a non-null identifier (anonymous records are malformed),
/// - at least one input component,
/// - a workbench outside the excluded set,
/// - a produced item that resolves to armor, a weapon, or ammunition.
pub fn is_eligible(
    recipe: &SourceRecipe,
    excluded_stations: &[ItemRef],
    store: &dyn RecordStore,
) -> bool {
    if recipe.id.is_none() {
        return false;
    }
    if recipe.inputs.is_empty() {
        return false;
    }
    if excluded_stations.contains(&recipe.workbench) {
        return false;
    }
    matches!(
        store.resolve(&recipe.output),
        Some(ItemKind::Armor | ItemKind::Weapon | ItemKind::Ammunition)
    )
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

    fn store() -> MapStore {
        let mut map = AHashMap::new();
        map.insert(ItemRef::from("IronDagger"), ItemKind::Weapon);
        map.insert(ItemRef::from("HideHelmet"), ItemKind::Armor);
        map.insert(ItemRef::from("IronArrow"), ItemKind::Ammunition);
        map.insert(ItemRef::from("Lockpick"), ItemKind::Misc);
        MapStore(map)
    }

    fn recipe(output: &str) -> SourceRecipe {
        SourceRecipe {
            id: Some(format!("Recipe{}", output)),
            workbench: ItemRef::from("CraftingForge"),
            inputs: vec![(ItemRef::from("IngotIron"), 1)],
            output: ItemRef::from(output),
            output_count: None,
            conditions: Vec::new(),
        }
    }

    #[test]
    fn test_eligible_kinds() {
        let store = store();
        assert!(is_eligible(&recipe("IronDagger"), &[], &store));
        assert!(is_eligible(&recipe("HideHelmet"), &[], &store));
        assert!(is_eligible(&recipe("IronArrow"), &[], &store));
        // Misc output does not qualify
        assert!(!is_eligible(&recipe("Lockpick"), &[], &store));
    }

    #[test]
    fn test_anonymous_recipe_skipped() {
        let store = store();
        let mut r = recipe("IronDagger");
        r.id = None;
        assert!(!is_eligible(&r, &[], &store));
    }

    #[test]
    fn test_empty_inputs_skipped() {
        let store = store();
        let mut r = recipe("IronDagger");
        r.inputs.clear();
        assert!(!is_eligible(&r, &[], &store));
    }

    #[test]
    fn test_excluded_station_skipped() {
        let store = store();
        let excluded = [ItemRef::from("CraftingForge")];
        assert!(!is_eligible(&recipe("IronDagger"), &excluded, &store));
        // Other stations still pass
        let excluded = [ItemRef::from("CraftingSmithingSharpeningWheel")];
        assert!(is_eligible(&recipe("IronDagger"), &excluded, &store));
    }

    #[test]
    fn test_dangling_output_skipped() {
        let store = store();
        assert!(!is_eligible(&recipe("RemovedByMod"), &[], &store));
    }
}
