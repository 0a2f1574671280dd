//! Spirit reference tables: categories and synonyms

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("synonym '{key}' maps to '{maps_to}', which does not map to itself")]
    NotIdempotent { key: String, maps_to: String },

    #[error("failed to read tables file: {0}")]
    Io(#[from] std::io::Error),

    #[error("tables file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Category name -> spirit labels, in display order.
pub type SpiritCategoryTable = IndexMap<String, Vec<String>>;

/// Maps user-facing spirit labels to the keys recipes are indexed by.
///
/// Every canonical key maps to itself, so resolving a label twice gives the
/// same result as resolving it once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    map: HashMap<String, String>,
}

impl SynonymTable {
    pub fn new(map: HashMap<String, String>) -> Result<Self, TableError> {
        for (key, target) in &map {
            if map.get(target) != Some(target) {
                return Err(TableError::NotIdempotent {
                    key: key.clone(),
                    maps_to: target.clone(),
                });
            }
        }
        Ok(Self { map })
    }

    /// Canonical key for a label; labels without a synonym are their own key.
    pub fn canonical<'a>(&'a self, label: &'a str) -> &'a str {
        self.map.get(label).map(String::as_str).unwrap_or(label)
    }

    /// Keys that some label resolves to.
    pub fn canonical_keys(&self) -> impl Iterator<Item = &str> {
        self.map.values().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<'de> Deserialize<'de> for SynonymTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let map = HashMap::<String, String>::deserialize(deserializer)?;
        SynonymTable::new(map).map_err(serde::de::Error::custom)
    }
}

/// Static configuration the match engine is built from.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceTables {
    pub categories: SpiritCategoryTable,
    #[serde(default)]
    pub synonyms: SynonymTable,
}

const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Rhum",
        &[
            "Rhum blanc",
            "Rhum ambre",
            "Rhum brun",
            "Rhum epice (Spiced rum)",
            "Rhum overproof",
            "Rhum blond",
            "Rhum noir",
            "Malibu (rhum coco)",
        ],
    ),
    (
        "Whisky",
        &[
            "Whiskey bourbon",
            "Rye whiskey",
            "Scotch whisky",
            "Irish whiskey",
            "Canadian whisky",
            "Whisky japonais",
        ],
    ),
    (
        "Tequila",
        &["Tequila blanco", "Tequila reposado", "Tequila anejo"],
    ),
    (
        "Autres spirits",
        &[
            "Vodka", "Gin", "Mezcal", "Pisco", "Cachaca", "Soju", "Sake", "Baijiu", "Absinthe",
            "Champagne", "Prosecco",
        ],
    ),
    (
        "Liqueurs",
        &[
            "Aperol",
            "Campari",
            "Chartreuse verte",
            "Chartreuse jaune",
            "Limoncello",
            "Triple sec",
            "Cointreau",
            "Grand Marnier",
            "Curacao bleu",
            "Kahlua",
            "Baileys Irish Cream",
            "Amaretto",
            "Drambuie",
            "Sambuca",
            "Jagermeister",
            "Fernet-Branca",
            "St-Germain (liqueur de sureau)",
            "Benedictine",
            "Galliano",
            "Midori",
            "Liqueur de cafe",
            "Liqueur de peche",
            "Liqueur de framboise",
            "Creme de menthe verte",
            "Creme de menthe blanche",
            "Creme de cacao blanche",
            "Creme de cacao",
            "Creme de cassis",
            "Pimm's No. 1",
            "Sloe gin",
            "Amaro Nonino",
            "Cherry Heering",
            "Maraschino",
        ],
    ),
];

const BUILTIN_SYNONYMS: &[(&str, &str)] = &[
    ("Kahlua", "Liqueur de cafe"),
    ("Liqueur de cafe", "Liqueur de cafe"),
    ("Whiskey bourbon", "Bourbon"),
    ("Bourbon", "Bourbon"),
    ("Rye whiskey", "Rye whiskey"),
];

impl ReferenceTables {
    pub fn new(categories: SpiritCategoryTable, synonyms: SynonymTable) -> Self {
        Self {
            categories,
            synonyms,
        }
    }

    /// The spirit categories and synonyms the application ships with.
    pub fn builtin() -> Self {
        let categories = BUILTIN_CATEGORIES
            .iter()
            .map(|(name, items)| {
                (
                    name.to_string(),
                    items.iter().map(|item| item.to_string()).collect(),
                )
            })
            .collect();

        let synonyms = SynonymTable {
            map: BUILTIN_SYNONYMS
                .iter()
                .map(|(label, key)| (label.to_string(), key.to_string()))
                .collect(),
        };

        Self {
            categories,
            synonyms,
        }
    }

    /// Load tables from a JSON file shaped like
    /// `{"categories": {"Rhum": ["Rhum blanc", ...]}, "synonyms": {"Kahlua": "Liqueur de cafe", ...}}`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Every spirit label, category by category.
    pub fn spirit_labels(&self) -> impl Iterator<Item = &str> {
        self.categories
            .values()
            .flat_map(|items| items.iter().map(String::as_str))
    }
}
