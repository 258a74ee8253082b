//! List Store
//!
//! Grocery lists are owned by an external store, keyed by user and date.
//! The pipeline only reads item texts from it and hands it new items.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{PantryError, PantryResult};
use crate::lexicon::CategoryId;
use crate::pipeline::NewItem;

/// A committed list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: String,
    pub text: String,
    pub category: CategoryId,
    #[serde(default)]
    pub completed: bool,
}

impl GroceryItem {
    fn from_new(item: &NewItem) -> Self {
        Self {
            id: format!("{:016x}", rand::random::<u64>()),
            text: item.text.clone(),
            category: item.category,
            completed: false,
        }
    }
}

/// Identifies one list
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListKey {
    pub user: String,
    pub date: NaiveDate,
}

impl ListKey {
    pub fn new(user: &str, date: NaiveDate) -> Self {
        Self {
            user: user.to_string(),
            date,
        }
    }

    /// Today's list for a user
    pub fn today(user: &str) -> Self {
        Self::new(user, chrono::Local::now().date_naive())
    }

    fn storage_key(&self) -> String {
        format!("{}/{}", self.user, self.date.format("%Y-%m-%d"))
    }
}

/// Persistence for grocery lists
pub trait ListStore {
    fn items(&self, key: &ListKey) -> PantryResult<Vec<GroceryItem>>;

    fn add_items(&mut self, key: &ListKey, items: &[NewItem]) -> PantryResult<Vec<GroceryItem>>;

    fn set_completed(&mut self, key: &ListKey, id: &str, completed: bool) -> PantryResult<()>;

    fn remove(&mut self, key: &ListKey, id: &str) -> PantryResult<()>;

    /// Current texts, read fresh for duplicate filtering
    fn item_texts(&self, key: &ListKey) -> PantryResult<Vec<String>> {
        Ok(self.items(key)?.into_iter().map(|i| i.text).collect())
    }
}

/// All lists, keyed by `user/date`
type Lists = BTreeMap<String, Vec<GroceryItem>>;

fn find_item<'a>(lists: &'a mut Lists, key: &ListKey, id: &str) -> PantryResult<&'a mut GroceryItem> {
    lists
        .get_mut(&key.storage_key())
        .and_then(|items| items.iter_mut().find(|i| i.id == id))
        .ok_or_else(|| PantryError::Store(format!("no item {} in {}", id, key.storage_key())))
}

fn remove_item(lists: &mut Lists, key: &ListKey, id: &str) -> PantryResult<()> {
    let items = lists
        .get_mut(&key.storage_key())
        .ok_or_else(|| PantryError::Store(format!("no list {}", key.storage_key())))?;
    let before = items.len();
    items.retain(|i| i.id != id);
    if items.len() == before {
        return Err(PantryError::Store(format!(
            "no item {} in {}",
            id,
            key.storage_key()
        )));
    }
    Ok(())
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    lists: Lists,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListStore for MemoryStore {
    fn items(&self, key: &ListKey) -> PantryResult<Vec<GroceryItem>> {
        Ok(self.lists.get(&key.storage_key()).cloned().unwrap_or_default())
    }

    fn add_items(&mut self, key: &ListKey, items: &[NewItem]) -> PantryResult<Vec<GroceryItem>> {
        let created: Vec<GroceryItem> = items.iter().map(GroceryItem::from_new).collect();
        self.lists
            .entry(key.storage_key())
            .or_default()
            .extend(created.iter().cloned());
        Ok(created)
    }

    fn set_completed(&mut self, key: &ListKey, id: &str, completed: bool) -> PantryResult<()> {
        find_item(&mut self.lists, key, id)?.completed = completed;
        Ok(())
    }

    fn remove(&mut self, key: &ListKey, id: &str) -> PantryResult<()> {
        remove_item(&mut self.lists, key, id)
    }
}

/// Store persisting every list in one JSON document
pub struct JsonListStore {
    path: PathBuf,
    lists: Lists,
}

impl JsonListStore {
    /// Open the store, starting empty when the file does not exist yet
    pub fn open(path: PathBuf) -> Result<Self> {
        let lists = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read list store {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in list store {}", path.display()))?
        } else {
            Lists::new()
        };
        debug!("Opened list store {} ({} lists)", path.display(), lists.len());
        Ok(Self { path, lists })
    }

    fn save(&self) -> PantryResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.lists)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl ListStore for JsonListStore {
    fn items(&self, key: &ListKey) -> PantryResult<Vec<GroceryItem>> {
        Ok(self.lists.get(&key.storage_key()).cloned().unwrap_or_default())
    }

    fn add_items(&mut self, key: &ListKey, items: &[NewItem]) -> PantryResult<Vec<GroceryItem>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        let created: Vec<GroceryItem> = items.iter().map(GroceryItem::from_new).collect();
        self.lists
            .entry(key.storage_key())
            .or_default()
            .extend(created.iter().cloned());
        self.save()?;
        info!("💾 Saved {} item(s) to {}", created.len(), key.storage_key());
        Ok(created)
    }

    fn set_completed(&mut self, key: &ListKey, id: &str, completed: bool) -> PantryResult<()> {
        find_item(&mut self.lists, key, id)?.completed = completed;
        self.save()
    }

    fn remove(&mut self, key: &ListKey, id: &str) -> PantryResult<()> {
        remove_item(&mut self.lists, key, id)?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ListKey {
        ListKey::new("alex", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        let created = store
            .add_items(&key(), &[NewItem::new("milk", CategoryId::Dairy)])
            .unwrap();
        assert_eq!(created.len(), 1);
        assert!(!created[0].completed);
        assert_eq!(store.item_texts(&key()).unwrap(), vec!["milk".to_string()]);

        store.set_completed(&key(), &created[0].id, true).unwrap();
        assert!(store.items(&key()).unwrap()[0].completed);

        store.remove(&key(), &created[0].id).unwrap();
        assert!(store.items(&key()).unwrap().is_empty());
    }

    #[test]
    fn test_lists_are_separate_per_date() {
        let mut store = MemoryStore::new();
        store
            .add_items(&key(), &[NewItem::new("milk", CategoryId::Dairy)])
            .unwrap();
        let other = ListKey::new("alex", NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert!(store.items(&other).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_item_is_an_error() {
        let mut store = MemoryStore::new();
        assert!(store.set_completed(&key(), "nope", true).is_err());
        assert!(store.remove(&key(), "nope").is_err());
    }

    #[test]
    fn test_json_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lists.json");

        {
            let mut store = JsonListStore::open(path.clone()).unwrap();
            store
                .add_items(&key(), &[NewItem::new("jeera", CategoryId::Other)])
                .unwrap();
        }

        let store = JsonListStore::open(path).unwrap();
        let items = store.items(&key()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "jeera");
        assert_eq!(items[0].category, CategoryId::Other);
    }
}
