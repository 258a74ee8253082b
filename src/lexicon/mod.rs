//! Grocery Lexicon
//!
//! Read-only reference data for the transcript pipeline: canonical item
//! names grouped by category, plus two alias maps (regional names and known
//! misspellings) that resolve to canonical names.
//!
//! A [`Lexicon`] is validated once when it is built and is never mutated
//! afterwards. Share it with `Arc<Lexicon>`.

mod data;
pub mod pack;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

pub use pack::LexiconPack;

/// Closed set of list categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryId {
    Produce,
    AsianPantry,
    IndianPantry,
    MeatSeafood,
    Dairy,
    Frozen,
    Beverages,
    Snacks,
    Bakery,
    Other,
}

impl CategoryId {
    /// Every category, in display order
    pub const ALL: [CategoryId; 10] = [
        CategoryId::Produce,
        CategoryId::AsianPantry,
        CategoryId::IndianPantry,
        CategoryId::MeatSeafood,
        CategoryId::Dairy,
        CategoryId::Frozen,
        CategoryId::Beverages,
        CategoryId::Snacks,
        CategoryId::Bakery,
        CategoryId::Other,
    ];

    /// Human readable label for list headings
    pub fn label(&self) -> &'static str {
        match self {
            CategoryId::Produce => "Produce",
            CategoryId::AsianPantry => "Asian Pantry",
            CategoryId::IndianPantry => "Indian Pantry",
            CategoryId::MeatSeafood => "Meat & Seafood",
            CategoryId::Dairy => "Dairy",
            CategoryId::Frozen => "Frozen",
            CategoryId::Beverages => "Beverages",
            CategoryId::Snacks => "Snacks",
            CategoryId::Bakery => "Bakery",
            CategoryId::Other => "Other",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A canonical item name and its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub canonical_name: String,
    pub category: CategoryId,
}

/// Which alias map resolved a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasKind {
    Localization,
    Misspelling,
}

/// Invalid reference data, detected while building a [`Lexicon`]
#[derive(Error, Debug, PartialEq)]
pub enum LexiconError {
    #[error("empty canonical name in category {0}")]
    EmptyName(CategoryId),

    #[error("duplicate canonical name: {0}")]
    DuplicateCanonical(String),

    #[error("duplicate {kind:?} alias: {alias}")]
    DuplicateAlias { kind: AliasKind, alias: String },

    #[error("alias '{alias}' points at unknown canonical name '{target}'")]
    UnknownTarget { alias: String, target: String },

    #[error("alias '{0}' appears in both the localization and misspelling maps")]
    AliasInBothMaps(String),

    #[error("alias '{0}' shadows a canonical name")]
    AliasShadowsCanonical(String),
}

/// Lowercased, trimmed lookup key
fn key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Immutable grocery reference data
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Entries in stable iteration order
    entries: Vec<LexiconEntry>,
    /// Lowercased canonical name -> index into `entries`
    index: HashMap<String, usize>,
    /// Lowercased alias -> index into `entries`
    localizations: HashMap<String, usize>,
    misspellings: HashMap<String, usize>,
}

impl Lexicon {
    /// Build the lexicon from the built-in reference data
    pub fn builtin() -> Result<Self, LexiconError> {
        let entries = data::CATALOG
            .iter()
            .flat_map(|(category, names)| {
                names.iter().map(move |name| LexiconEntry {
                    canonical_name: name.to_string(),
                    category: *category,
                })
            })
            .collect();

        let pairs = |table: &[(&str, &str)]| -> Vec<(String, String)> {
            table
                .iter()
                .map(|(alias, target)| (alias.to_string(), target.to_string()))
                .collect()
        };

        Self::from_parts(
            entries,
            pairs(data::LOCALIZATIONS),
            pairs(data::MISSPELLINGS),
        )
    }

    /// Build and validate a lexicon from raw parts
    ///
    /// Alias lists are `(alias, canonical name)` pairs. Entry order is kept
    /// as the iteration order.
    pub fn from_parts(
        entries: Vec<LexiconEntry>,
        localizations: Vec<(String, String)>,
        misspellings: Vec<(String, String)>,
    ) -> Result<Self, LexiconError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let name = key(&entry.canonical_name);
            if name.is_empty() {
                return Err(LexiconError::EmptyName(entry.category));
            }
            if index.insert(name.clone(), i).is_some() {
                return Err(LexiconError::DuplicateCanonical(name));
            }
        }

        let localizations = Self::alias_map(AliasKind::Localization, localizations, &index)?;
        let misspellings = Self::alias_map(AliasKind::Misspelling, misspellings, &index)?;

        if let Some(alias) = localizations
            .keys()
            .find(|alias| misspellings.contains_key(*alias))
        {
            return Err(LexiconError::AliasInBothMaps(alias.clone()));
        }

        debug!(
            "Lexicon built: {} entries, {} localizations, {} misspellings",
            entries.len(),
            localizations.len(),
            misspellings.len()
        );

        Ok(Self {
            entries,
            index,
            localizations,
            misspellings,
        })
    }

    fn alias_map(
        kind: AliasKind,
        pairs: Vec<(String, String)>,
        index: &HashMap<String, usize>,
    ) -> Result<HashMap<String, usize>, LexiconError> {
        let mut map = HashMap::with_capacity(pairs.len());
        for (alias, target) in pairs {
            let alias = key(&alias);
            if index.contains_key(&alias) {
                return Err(LexiconError::AliasShadowsCanonical(alias));
            }
            let target_idx = *index.get(&key(&target)).ok_or_else(|| {
                LexiconError::UnknownTarget {
                    alias: alias.clone(),
                    target: target.clone(),
                }
            })?;
            if map.insert(alias.clone(), target_idx).is_some() {
                return Err(LexiconError::DuplicateAlias { kind, alias });
            }
        }
        Ok(map)
    }

    /// Case-insensitive exact match against all canonical names
    pub fn is_canonical(&self, text: &str) -> bool {
        self.index.contains_key(&key(text))
    }

    /// The entry for a canonical name, if it is one
    pub fn entry(&self, text: &str) -> Option<&LexiconEntry> {
        self.index.get(&key(text)).map(|&i| &self.entries[i])
    }

    /// Category of a canonical name
    pub fn category_of(&self, canonical_name: &str) -> Option<CategoryId> {
        self.entry(canonical_name).map(|e| e.category)
    }

    /// Entries in stable iteration order
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Canonical names in stable iteration order
    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.canonical_name.as_str())
    }

    /// Resolve a regional or transliterated name
    pub fn localize(&self, text: &str) -> Option<&str> {
        self.localizations
            .get(&key(text))
            .map(|&i| self.entries[i].canonical_name.as_str())
    }

    /// Resolve a known misspelling
    pub fn demisspell(&self, text: &str) -> Option<&str> {
        self.misspellings
            .get(&key(text))
            .map(|&i| self.entries[i].canonical_name.as_str())
    }

    /// True when any of the three lookups recognizes the text
    pub fn recognizes(&self, text: &str) -> bool {
        self.is_canonical(text) || self.localize(text).is_some() || self.demisspell(text).is_some()
    }

    /// Merge a lexicon pack over this lexicon, re-validating the result
    ///
    /// Pack entries are appended, so existing iteration order is unchanged.
    pub fn with_pack(&self, pack: &LexiconPack) -> Result<Self, LexiconError> {
        let mut entries = self.entries.clone();
        entries.extend(pack.entries.iter().cloned());

        let mut localizations = self.alias_pairs(&self.localizations);
        localizations.extend(pack.localizations.iter().map(|(a, t)| (a.clone(), t.clone())));

        let mut misspellings = self.alias_pairs(&self.misspellings);
        misspellings.extend(pack.misspellings.iter().map(|(a, t)| (a.clone(), t.clone())));

        Self::from_parts(entries, localizations, misspellings)
    }

    fn alias_pairs(&self, map: &HashMap<String, usize>) -> Vec<(String, String)> {
        map.iter()
            .map(|(alias, &i)| (alias.clone(), self.entries[i].canonical_name.clone()))
            .collect()
    }

    /// Number of canonical entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
