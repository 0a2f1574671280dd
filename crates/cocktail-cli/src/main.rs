//! Cocktails CLI - suggest cocktails from the spirits at hand

mod config;
mod render;

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cocktail_core::MatchEngine;
use cocktail_recipe::{load_catalog, load_catalog_or_empty, validate_catalog};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "cocktails")]
#[command(about = "Cocktail suggester - find what you can mix from the spirits you have")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the recipe JSON document (overrides COCKTAILS_RECIPES)
    #[arg(long, global = true)]
    recipes: Option<PathBuf>,

    /// Path to a spirit tables JSON file (overrides COCKTAILS_TABLES)
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest every cocktail the selected spirits can make
    Suggest {
        /// A spirit you have; repeat for each one
        #[arg(short, long = "spirit", value_name = "SPIRIT")]
        spirits: Vec<String>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known spirits by category
    Spirits {
        /// Only show spirits whose name contains this text
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Validate a recipe document
    Validate {
        /// Path to the recipe JSON document
        recipes: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging; stdout carries results only
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = CliConfig::from_env()?.with_overrides(cli.recipes, cli.tables);

    match cli.command {
        Commands::Suggest { spirits, json } => {
            suggest(&config, &spirits, json)?;
        }
        Commands::Spirits { search } => {
            list_spirits(&config, &search)?;
        }
        Commands::Validate { recipes } => {
            validate_recipes(&recipes.unwrap_or(config.recipes_path))?;
        }
    }

    Ok(())
}

/// Reject an empty selection before anything is loaded or matched.
fn check_selection(spirits: &[String]) -> Result<()> {
    if spirits.is_empty() {
        anyhow::bail!("Select at least one spirit.");
    }
    Ok(())
}

fn suggest(config: &CliConfig, spirits: &[String], json: bool) -> Result<()> {
    check_selection(spirits)?;

    let engine = MatchEngine::new(config.load_tables()?);
    let catalog = load_catalog_or_empty(&config.recipes_path);

    let known: HashSet<&str> = engine
        .tables()
        .spirit_labels()
        .chain(engine.tables().synonyms.canonical_keys())
        .collect();
    for spirit in spirits {
        if !known.contains(spirit.as_str()) {
            warn!("Unknown spirit '{}', matching it by name only", spirit);
        }
    }

    let matches = engine.find_matches(spirits, &catalog);
    info!(
        "{} of {} cocktails can be made with {} selected spirits",
        matches.len(),
        catalog.len(),
        spirits.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else if matches.is_empty() {
        println!("No cocktail can be made with this selection.");
    } else {
        print!("{}", render::render_table(&matches));
    }

    Ok(())
}

fn list_spirits(config: &CliConfig, search: &str) -> Result<()> {
    let engine = MatchEngine::new(config.load_tables()?);
    let found = engine.search_spirits(search);

    if found.is_empty() {
        println!("No spirit matches '{}'.", search);
        return Ok(());
    }

    let mut current = None;
    for (category, label) in found {
        if current != Some(category) {
            println!("{}:", category);
            current = Some(category);
        }
        println!("  {}", label);
    }

    Ok(())
}

fn validate_recipes(path: &PathBuf) -> Result<()> {
    info!("Validating recipes: {:?}", path);

    let catalog = load_catalog(path)?;

    match validate_catalog(&catalog) {
        Ok(()) => {
            println!("Recipe document is valid!");
            println!("  Cocktails: {}", catalog.len());
            Ok(())
        }
        Err(errors) => {
            eprintln!("Recipe validation failed:");
            for error in &errors {
                eprintln!("  - {}", error);
            }
            anyhow::bail!("Validation failed with {} errors", errors.len());
        }
    }
}
