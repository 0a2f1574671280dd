//! Catalog loading from the recipe document

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info, warn};

use crate::schema::Catalog;
use crate::validation::validate_catalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("recipe document {} not found", path.display())]
    Unavailable { path: PathBuf },

    #[error("failed to read recipe document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("recipe document {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a recipe document. The whole document is rejected on the first error.
pub fn parse_catalog(content: &str) -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load the catalog from a UTF-8 JSON document on disk.
///
/// Validation findings are logged but never reject the catalog; a recipe
/// with no required spirit is kept and simply never matches.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CatalogError::Unavailable {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let catalog = parse_catalog(&content).map_err(|source| CatalogError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    if let Err(findings) = validate_catalog(&catalog) {
        for finding in &findings {
            warn!("Recipe document {:?}: {}", path, finding);
        }
    }

    info!("Loaded {} recipes from {:?}", catalog.len(), path);
    Ok(catalog)
}

/// Load the catalog, falling back to an empty one when the document is
/// missing or unreadable. The failure is reported to the operator log and
/// startup continues; every query against the empty catalog returns nothing.
pub fn load_catalog_or_empty(path: impl AsRef<Path>) -> Catalog {
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Error loading recipes: {}", e);
            Catalog::empty()
        }
    }
}
