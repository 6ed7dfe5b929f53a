//! Salvage Forge - entry point
//!
//! Loads a crafting dataset and run settings, derives breakdown recipes,
//! and writes them out as JSON.

use clap::Parser;
use salvage_forge::breakdown::{generate, TierTable};
use salvage_forge::core::error::Result;
use salvage_forge::core::types::BreakdownRecipe;
use salvage_forge::core::Settings;
use salvage_forge::dataset::{self, Dataset};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "salvage-forge",
    about = "Derives breakdown recipes from an existing crafting dataset"
)]
struct Cli {
    /// Source dataset (JSON)
    dataset: PathBuf,

    /// Settings file (TOML); built-in defaults are used when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Where to write the generated recipes
    #[arg(long, default_value = "breakdown_recipes.json")]
    output: PathBuf,

    /// Generate a recipe for every input component, not just the
    /// highest-tier ones
    #[arg(long)]
    per_component: bool,

    /// Override the configured yield percentage (1-100)
    #[arg(long)]
    yield_percentage: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salvage_forge=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => Settings::load_from_toml(path)?,
        None => Settings::default(),
    };
    if cli.per_component {
        settings.generate_recipe_for_each_component = true;
    }
    if let Some(pct) = cli.yield_percentage {
        settings.yield_percentage = pct;
    }
    settings.validate()?;

    let dataset = Dataset::load(&cli.dataset)?;
    tracing::info!(
        recipes = dataset.recipes.len(),
        yield_percentage = settings.yield_percentage,
        per_component = settings.generate_recipe_for_each_component,
        "dataset loaded"
    );

    let tiers = TierTable::with_defaults();
    let mut generated: Vec<BreakdownRecipe> = Vec::new();
    generate(&dataset.recipes, &dataset, &tiers, &settings, &mut generated);

    dataset::write_recipes(&cli.output, &generated)?;
    println!(
        "Wrote {} breakdown recipes to {}",
        generated.len(),
        cli.output.display()
    );
    Ok(())
}
