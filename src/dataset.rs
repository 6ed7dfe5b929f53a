//! JSON-backed dataset - the record store and output sink for the CLI
//!
//! The engine itself only consumes in-memory values; this module is the
//! thin I/O wrapper around it. A dataset file carries the item records
//! (for kind resolution) and the existing crafting recipes, already
//! deduplicated and in priority order.

use crate::breakdown::RecordStore;
use crate::core::error::Result;
use crate::core::types::{BreakdownRecipe, ItemKind, ItemRef, SourceRecipe};
use ahash::AHashMap;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    items: Vec<ItemRecord>,
    #[serde(default)]
    recipes: Vec<SourceRecipe>,
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: ItemRef,
    kind: ItemKind,
}

/// A loaded source dataset: recipes in priority order plus an index of
/// item kinds for reference resolution
#[derive(Debug, Default)]
pub struct Dataset {
    pub recipes: Vec<SourceRecipe>,
    index: AHashMap<ItemRef, ItemKind>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    pub fn parse_json(content: &str) -> Result<Self> {
        let file: DatasetFile = serde_json::from_str(content)?;
        let index = file
            .items
            .into_iter()
            .map(|record| (record.id, record.kind))
            .collect();
        Ok(Self {
            recipes: file.recipes,
            index,
        })
    }
}

impl RecordStore for Dataset {
    fn resolve(&self, item: &ItemRef) -> Option<ItemKind> {
        self.index.get(item).copied()
    }
}

/// Write generated recipes as pretty-printed JSON
pub fn write_recipes(path: &Path, recipes: &[BreakdownRecipe]) -> Result<()> {
    let json = serde_json::to_string_pretty(recipes)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let content = r#"{
            "items": [
                {"id": "IronDagger", "kind": "weapon"},
                {"id": "HideHelmet", "kind": "armor"},
                {"id": "Lockpick", "kind": "misc"}
            ],
            "recipes": [
                {
                    "id": "RecipeIronDagger",
                    "workbench": "CraftingForge",
                    "inputs": [["IngotIron", 1], ["LeatherStrips", 1]],
                    "output": "IronDagger",
                    "conditions": [
                        {"kind": "has_perk", "perk": "SteelSmithing", "op": "equal_to", "value": 1}
                    ]
                }
            ]
        }"#;
        let dataset = Dataset::parse_json(content).expect("should parse");
        assert_eq!(dataset.recipes.len(), 1);
        assert_eq!(dataset.recipes[0].inputs.len(), 2);
        assert_eq!(
            dataset.resolve(&ItemRef::from("IronDagger")),
            Some(ItemKind::Weapon)
        );
        assert_eq!(
            dataset.resolve(&ItemRef::from("Lockpick")),
            Some(ItemKind::Misc)
        );
        // Dangling reference resolves to nothing
        assert_eq!(dataset.resolve(&ItemRef::from("Unknown")), None);
    }

    #[test]
    fn test_parse_json_empty_sections() {
        let dataset = Dataset::parse_json("{}").expect("should parse");
        assert!(dataset.recipes.is_empty());
    }

    #[test]
    fn test_parse_json_malformed() {
        assert!(Dataset::parse_json("not json").is_err());
    }
}
