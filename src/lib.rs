//! Salvage Forge - breakdown recipe derivation
//!
//! Takes an existing crafting dataset and derives "breakdown" recipes:
//! for a recipe that turns components into an item, generate the reverse
//! recipe that melts the item back down into some of those components.

pub mod breakdown;
pub mod core;
pub mod dataset;
