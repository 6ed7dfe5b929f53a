//! Breakdown recipe synthesis for the derived path
//!
//! Inverts an eligible source recipe around one selected component: the
//! crafted item becomes the input, the component becomes the output, and
//! the yield is a configured fraction of what the original recipe consumed.

use crate::core::keys;
use crate::core::types::{
    BreakdownRecipe, CompareOp, Condition, ItemRef, SourceRecipe, WorkbenchKind,
};

/// Leather-family components are recovered at the tanning rack;
/// everything else goes to the smelter.
fn recovery_station(component: &ItemRef) -> WorkbenchKind {
    if component.0 == keys::LEATHER || component.0 == keys::LEATHER_STRIPS {
        WorkbenchKind::TanningRack
    } else {
        WorkbenchKind::Smelter
    }
}

/// Build one breakdown recipe for a selected input entry.
///
/// The yield is floor(count * yield_percentage / 100). When that rounds
/// to zero the yield is clamped to 1 and the required input count is
/// inflated by (2 - yield_percentage / 100), rounded up, so recovery is
/// never free even for rounding-loss cases.
///
/// `index` is a 1-based counter over the selected entries of the source
/// recipe; it keeps identifiers distinct when one source recipe spawns
/// several breakdown recipes.
pub fn build(
    source: &SourceRecipe,
    entry: &(ItemRef, u32),
    yield_percentage: u32,
    index: usize,
) -> BreakdownRecipe {
    let (component, component_count) = entry;
    let mut required_count = source.output_count.unwrap_or(1);
    let mut recipe_yield = component_count * yield_percentage / 100;
    if recipe_yield < 1 {
        recipe_yield = 1;
        required_count = (required_count * (200 - yield_percentage)).div_ceil(100);
    }

    // Require holding the item to be broken down, so the recipe list
    // stays uncluttered. Perk gates from the source carry over so items
    // can't be melted down without the perks needed to craft them.
    let mut conditions = vec![Condition::ItemCount {
        item: source.output.clone(),
        op: CompareOp::GreaterThan,
        value: 0,
    }];
    conditions.extend(
        source
            .conditions
            .iter()
            .filter(|c| matches!(c, Condition::HasPerk { .. }))
            .cloned(),
    );

    BreakdownRecipe {
        id: format!(
            "Breakdown{}{}",
            source.id.as_deref().unwrap_or_default(),
            index
        ),
        workbench: recovery_station(component),
        input: (source.output.clone(), required_count),
        output: (component.clone(), recipe_yield),
        conditions,
    }
}
