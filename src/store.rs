//! Local cached copy of the published hash table.

use crate::error::Result;
use crate::types::HashTable;
use std::path::{Path, PathBuf};

const HASHMAP_FILENAME: &str = "gameversion_hashmap.json";
const WORKDIR_NAME: &str = "gameversion_hash";

/// On-disk store for the hash table, JSON-encoded at a fixed path.
pub struct HashMapStore {
    path: PathBuf,
}

impl HashMapStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at the conventional location under the system temp directory.
    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join(WORKDIR_NAME).join(HASHMAP_FILENAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the stored table.
    ///
    /// An absent or unreadable file is [`crate::error::HashMapError::Io`];
    /// malformed JSON is [`crate::error::HashMapError::Parse`].
    pub async fn load(&self) -> Result<HashTable> {
        let bytes = tokio::fs::read(&self.path).await?;
        let table = serde_json::from_slice(&bytes)?;
        Ok(table)
    }

    /// Write the full table as pretty-printed JSON.
    ///
    /// Writes to a temporary sibling file and renames it into place, so a
    /// crash mid-write never corrupts an existing table. Concurrent writers
    /// are not synchronized; the last rename wins.
    pub async fn save(&self, table: &HashTable) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(table)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HashMapError;
    use crate::types::HashEntry;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> HashMapStore {
        HashMapStore::new(dir.path().join(HASHMAP_FILENAME))
    }

    fn sample_table() -> HashTable {
        let mut table = HashTable::new();
        table.insert_entry(
            "game1",
            HashEntry {
                files: vec!["game.exe".to_string()],
                hash_value: "abc123".to_string(),
                user_facing_version: "1.2.3".to_string(),
                variant: "steam".to_string(),
            },
        );
        table.insert_entry(
            "game2",
            HashEntry {
                files: vec!["bin/app".to_string(), "bin/data.pak".to_string()],
                hash_value: "def456".to_string(),
                user_facing_version: "0.9.0".to_string(),
                variant: "gog".to_string(),
            },
        );
        table
    }

    #[tokio::test]
    async fn round_trip_preserves_table() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let table = sample_table();

        store.save(&table).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, table);
    }

    #[tokio::test]
    async fn round_trip_preserves_empty_table() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&HashTable::new()).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = HashMapStore::new(dir.path().join("nested/dir").join(HASHMAP_FILENAME));

        store.save(&sample_table()).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn save_leaves_no_temporary_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&sample_table()).await.unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![HASHMAP_FILENAME.to_string()]);
    }

    #[tokio::test]
    async fn save_replaces_existing_table() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&sample_table()).await.unwrap();
        store.save(&HashTable::new()).await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn absent_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, HashMapError::Io(_)));
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), b"not json {").unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, HashMapError::Parse(_)));
    }
}
