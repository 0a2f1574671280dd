//! Cocktail Recipe - recipe document schema and catalog loader
//!
//! This crate defines the JSON recipe document (cocktail name mapped to its
//! required spirits and other ingredients) and loads it into an immutable,
//! insertion-ordered [`Catalog`].

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_catalog, load_catalog_or_empty, parse_catalog, CatalogError};
pub use schema::{Catalog, Recipe};
pub use validation::{validate_catalog, ValidationError};
