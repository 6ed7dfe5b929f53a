//! Core types, configuration, and errors

pub mod config;
pub mod error;
pub mod keys;
pub mod types;

pub use config::Settings;
pub use error::{ForgeError, Result};
pub use types::{
    BreakdownRecipe, CompareOp, Condition, ItemKind, ItemRef, PerkRef, SourceRecipe,
    WorkbenchKind,
};
