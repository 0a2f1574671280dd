//! Cocktail Core - spirit tables and match engine
//!
//! Given a selection of spirits, the [`MatchEngine`] resolves synonyms,
//! expands the selection to every spirit sharing a category with a selected
//! one, and returns the catalog recipes whose required spirits are all covered.

pub mod engine;
pub mod tables;

pub use engine::{CocktailMatch, MatchEngine};
pub use tables::{ReferenceTables, SpiritCategoryTable, SynonymTable, TableError};

// Re-export for downstream consumers
pub use cocktail_recipe::{Catalog, Recipe};
