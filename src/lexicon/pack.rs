//! Lexicon Packs
//!
//! Extra reference data shipped as JSON and merged over the built-in
//! lexicon at startup. A pack that fails to parse or validate is a startup
//! error, never a per-utterance one.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use super::{Lexicon, LexiconEntry};

/// A JSON lexicon pack
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconPack {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<LexiconEntry>,
    /// Regional name -> canonical name
    #[serde(default)]
    pub localizations: HashMap<String, String>,
    /// Misspelling -> canonical name
    #[serde(default)]
    pub misspellings: HashMap<String, String>,
}

impl LexiconPack {
    /// Read a pack from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon pack {}", path.display()))?;
        let pack: LexiconPack = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in lexicon pack {}", path.display()))?;
        Ok(pack)
    }
}

/// Build the built-in lexicon and merge every pack in order
pub fn load_with_packs<P: AsRef<Path>>(packs: &[P]) -> Result<Lexicon> {
    let mut lexicon = Lexicon::builtin().context("Built-in lexicon is invalid")?;

    for path in packs {
        let path = path.as_ref();
        let pack = LexiconPack::load(path)?;
        lexicon = lexicon
            .with_pack(&pack)
            .with_context(|| format!("Lexicon pack '{}' conflicts with loaded data", pack.name))?;
        info!(
            "📦 Loaded lexicon pack '{}' ({} entries)",
            pack.name,
            pack.entries.len()
        );
    }

    Ok(lexicon)
}
