//! Recipe document schema: cocktail name to required spirits and extras

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// One cocktail recipe.
///
/// Both ingredient maps keep the order they have in the source document so
/// the presentation layer can list them the way the author wrote them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    /// Canonical spirit key -> quantity description.
    /// Every key must be covered by a selection for the recipe to match.
    #[serde(default)]
    pub alcohols: IndexMap<String, String>,
    /// Non-alcohol ingredient -> quantity description. May be absent or null.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub others: IndexMap<String, String>,
}

impl Recipe {
    /// The set of spirit keys this recipe requires.
    pub fn required_alcohols(&self) -> impl Iterator<Item = &str> {
        self.alcohols.keys().map(String::as_str)
    }

    /// A recipe without any required spirit can never be suggested.
    pub fn is_matchable(&self) -> bool {
        !self.alcohols.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// The full recipe catalog, keyed by cocktail name in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    recipes: IndexMap<String, Recipe>,
}

impl Catalog {
    /// An empty catalog, used when the recipe document cannot be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Recipes in the order they appear in the source document.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.recipes.iter().map(|(name, recipe)| (name.as_str(), recipe))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }
}
