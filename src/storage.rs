use log::debug;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::ChefError;

/// Key the recipe requester writes and the results view reads
pub const CURRENT_RECIPE_KEY: &str = "currentRecipe";

/// Persistent string-to-string store backed by a single JSON file.
///
/// Mirrors the browser's `localStorage`: values are plain strings and every
/// write is flushed to disk before returning.
#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    /// Open the store at `path`. A missing file is an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, ChefError> {
        let path = path.into();
        let items = match tokio::fs::read_to_string(&path).await {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!("Opened storage {} with {} item(s)", path.display(), items.len());

        Ok(Self { path, items })
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Store `value` under `key`. If the write to disk fails the store is left
    /// exactly as it was.
    pub async fn set_item(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ChefError> {
        let key = key.into();
        let previous = self.items.insert(key.clone(), value.into());
        if let Err(e) = self.flush().await {
            match previous {
                Some(previous) => self.items.insert(key, previous),
                None => self.items.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    pub async fn remove_item(&mut self, key: &str) -> Result<(), ChefError> {
        if let Some(previous) = self.items.remove(key) {
            if let Err(e) = self.flush().await {
                self.items.insert(key.to_string(), previous);
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    async fn flush(&self) -> Result<(), ChefError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.items)?;
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("nope.json"))
            .await
            .unwrap();
        assert!(storage.is_empty());
        assert_eq!(storage.get_item(CURRENT_RECIPE_KEY), None);
    }

    #[tokio::test]
    async fn test_items_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut storage = LocalStorage::open(&path).await.unwrap();
        storage
            .set_item(CURRENT_RECIPE_KEY, r#"{"name":"Soup"}"#)
            .await
            .unwrap();
        storage.set_item("other", "value").await.unwrap();

        let reopened = LocalStorage::open(&path).await.unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(
            reopened.get_item(CURRENT_RECIPE_KEY),
            Some(r#"{"name":"Soup"}"#)
        );
    }

    #[tokio::test]
    async fn test_set_overwrites_and_remove_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut storage = LocalStorage::open(&path).await.unwrap();
        storage.set_item("k", "one").await.unwrap();
        storage.set_item("k", "two").await.unwrap();
        assert_eq!(storage.get_item("k"), Some("two"));

        storage.remove_item("k").await.unwrap();
        storage.remove_item("never-set").await.unwrap();
        assert!(LocalStorage::open(&path).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("sub");
        let mut storage = LocalStorage::open(parent.join("storage.json"))
            .await
            .unwrap();
        storage.set_item("kept", "old").await.unwrap();

        // A regular file where the directory should be makes every flush fail
        std::fs::remove_dir_all(&parent).unwrap();
        std::fs::write(&parent, "not a directory").unwrap();

        assert!(storage.set_item("kept", "new").await.is_err());
        assert!(storage.set_item(CURRENT_RECIPE_KEY, "{}").await.is_err());
        assert!(storage.remove_item("kept").await.is_err());

        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get_item("kept"), Some("old"));
        assert_eq!(storage.get_item(CURRENT_RECIPE_KEY), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            LocalStorage::open(&path).await,
            Err(ChefError::JsonError(_))
        ));
    }
}
