//! Component selection policy
//!
//! Decides which input components of an eligible recipe get their own
//! breakdown recipe: all of them, or only the highest-tier ones.

use crate::breakdown::tiers::TierTable;
use crate::core::types::{ItemRef, SourceRecipe};

/// Pick the input entries to derive breakdown recipes for.
///
/// With `per_component` set, every input entry is returned in declaration
/// order, duplicates included. Otherwise only the entries whose component
/// ties for the highest tier among the inputs are returned, which keeps
/// the generated set down to the materials worth recovering.
pub fn select<'a>(
    recipe: &'a SourceRecipe,
    tiers: &TierTable,
    per_component: bool,
) -> Vec<&'a (ItemRef, u32)> {
    if per_component {
        return recipe.inputs.iter().collect();
    }
    let highest = recipe
        .inputs
        .iter()
        .map(|(component, _)| tiers.tier_of(component))
        .max()
        .unwrap_or(0);
    recipe
        .inputs
        .iter()
        .filter(|(component, _)| tiers.tier_of(component) == highest)
        .collect()
}
