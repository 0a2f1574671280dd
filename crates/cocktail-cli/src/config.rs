//! CLI configuration from environment variables.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cocktail_core::ReferenceTables;

const RECIPES_FILE: &str = "recipes.json";

#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Recipe document the catalog is loaded from.
    pub recipes_path: PathBuf,
    /// Optional JSON file replacing the built-in spirit tables.
    pub tables_path: Option<PathBuf>,
}

impl CliConfig {
    pub fn from_env() -> Result<Self> {
        let recipes_path = match std::env::var("COCKTAILS_RECIPES") {
            Ok(path) if path.trim().is_empty() => {
                anyhow::bail!("COCKTAILS_RECIPES is set but empty")
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => default_recipes_path(),
        };

        Ok(Self {
            recipes_path,
            tables_path: std::env::var("COCKTAILS_TABLES").ok().map(PathBuf::from),
        })
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_overrides(mut self, recipes: Option<PathBuf>, tables: Option<PathBuf>) -> Self {
        if let Some(path) = recipes {
            self.recipes_path = path;
        }
        if tables.is_some() {
            self.tables_path = tables;
        }
        self
    }

    /// Spirit tables to build the engine from. Tables are configuration, so
    /// a bad tables file stops startup instead of falling back.
    pub fn load_tables(&self) -> Result<ReferenceTables> {
        match &self.tables_path {
            Some(path) => ReferenceTables::from_path(path)
                .with_context(|| format!("Invalid spirit tables file {:?}", path)),
            None => Ok(ReferenceTables::builtin()),
        }
    }
}

/// `recipes.json` beside the executable when present, else in the working directory.
fn default_recipes_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.join(RECIPES_FILE))
        .filter(|path| path.exists())
        .unwrap_or_else(|| PathBuf::from(RECIPES_FILE))
}
