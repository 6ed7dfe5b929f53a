//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of an item or keyword record
///
/// Used only as a lookup key; the engine never inspects the record
/// behind it except through the record store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemRef(pub String);

impl ItemRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for ItemRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identity of a perk record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerkRef(pub String);

impl From<&str> for PerkRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PerkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Runtime kind of a resolved item record
///
/// Closed set: the engine only distinguishes the kinds that decide
/// eligibility; everything else is `Misc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Armor,
    Weapon,
    Ammunition,
    Misc,
}

/// Comparison operator used in recipe conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    GreaterThan,
    EqualTo,
}

/// A gating condition attached to a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// Actor must hold a number of a specific item
    ItemCount {
        item: ItemRef,
        op: CompareOp,
        value: u32,
    },
    /// Actor must hold a specific perk
    HasPerk {
        perk: PerkRef,
        op: CompareOp,
        value: u32,
    },
    /// Any other condition kind; carried in source recipes but never
    /// copied onto generated ones
    Opaque { data: String },
}

/// The two recovery stations a breakdown recipe can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkbenchKind {
    Smelter,
    TanningRack,
}

/// An existing crafting recipe from the source dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecipe {
    /// Recipe identifier; anonymous recipes are skipped by the filter
    pub id: Option<String>,
    /// Keyword of the station this recipe is crafted at
    pub workbench: ItemRef,
    /// Input components consumed, in declaration order
    #[serde(default)]
    pub inputs: Vec<(ItemRef, u32)>,
    /// Item the recipe produces
    pub output: ItemRef,
    /// How many of the output one craft yields (1 when unspecified)
    #[serde(default)]
    pub output_count: Option<u32>,
    /// Conditions gating the recipe
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// A generated breakdown recipe
///
/// Always exactly one input entry (the item being broken down) and one
/// output entry (the recovered component). The first condition is always
/// the ownership check on the input item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRecipe {
    pub id: String,
    pub workbench: WorkbenchKind,
    pub input: (ItemRef, u32),
    pub output: (ItemRef, u32),
    pub conditions: Vec<Condition>,
}
