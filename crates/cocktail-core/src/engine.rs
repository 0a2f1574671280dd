//! Match engine: decides which catalog recipes a spirit selection can make

use std::collections::{BTreeSet, HashMap};

use cocktail_recipe::{Catalog, Recipe};
use serde::Serialize;
use tracing::debug;

use crate::tables::ReferenceTables;

/// A catalog recipe the selection fully covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CocktailMatch<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub recipe: &'a Recipe,
}

/// Finds recipes makeable from a selection of spirits.
///
/// Holds only read-only tables, so one engine can serve any number of
/// concurrent queries.
pub struct MatchEngine {
    tables: ReferenceTables,
    /// Canonical key -> indexes of the categories having an item with that key.
    category_index: HashMap<String, Vec<usize>>,
}

impl MatchEngine {
    pub fn new(tables: ReferenceTables) -> Self {
        let mut category_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, items) in tables.categories.values().enumerate() {
            for item in items {
                let key = tables.synonyms.canonical(item).to_string();
                let categories = category_index.entry(key).or_default();
                if categories.last() != Some(&idx) {
                    categories.push(idx);
                }
            }
        }

        debug!(
            "MatchEngine indexed {} spirit keys across {} categories",
            category_index.len(),
            tables.categories.len()
        );

        Self {
            tables,
            category_index,
        }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Resolve every selected label to its canonical key.
    pub fn canonicalize<I, S>(&self, selection: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        selection
            .into_iter()
            .map(|label| self.tables.synonyms.canonical(label.as_ref()).to_string())
            .collect()
    }

    /// Canonicalize the selection, then add every spirit of each category
    /// that has at least one selected member.
    ///
    /// Picking any one rum therefore unlocks all rums.
    pub fn expand<I, S>(&self, selection: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected = self.canonicalize(selection);

        let triggered: BTreeSet<usize> = selected
            .iter()
            .filter_map(|key| self.category_index.get(key))
            .flatten()
            .copied()
            .collect();

        let mut expanded = selected;
        for idx in triggered {
            if let Some((category, items)) = self.tables.categories.get_index(idx) {
                debug!("Selection unlocks category '{}'", category);
                expanded.extend(
                    items
                        .iter()
                        .map(|item| self.tables.synonyms.canonical(item).to_string()),
                );
            }
        }
        expanded
    }

    /// Every recipe whose required spirits are all covered by the expanded
    /// selection, in catalog order. Recipes requiring no spirit never match.
    pub fn find_matches<'c, I, S>(&self, selection: I, catalog: &'c Catalog) -> Vec<CocktailMatch<'c>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let expanded = self.expand(selection);
        if expanded.is_empty() {
            return Vec::new();
        }

        catalog
            .iter()
            .filter(|(_, recipe)| {
                recipe.is_matchable()
                    && recipe
                        .required_alcohols()
                        .all(|spirit| expanded.contains(spirit))
            })
            .map(|(name, recipe)| CocktailMatch { name, recipe })
            .collect()
    }

    /// Spirit labels whose text contains `query`, ignoring case, grouped by
    /// category and sorted within each. An empty query keeps every label.
    pub fn search_spirits(&self, query: &str) -> Vec<(&str, &str)> {
        let needle = query.to_lowercase();
        let mut found = Vec::new();
        for (category, items) in &self.tables.categories {
            let mut labels: Vec<&str> = items
                .iter()
                .map(String::as_str)
                .filter(|label| label.to_lowercase().contains(&needle))
                .collect();
            labels.sort_unstable();
            found.extend(labels.into_iter().map(|label| (category.as_str(), label)));
        }
        found
    }
}
