//! Table acquisition strategies.
//!
//! The resolver does not care where a table comes from; it talks to a
//! [`TableSource`]. The remote source is the normal path; the file source
//! serves offline and debug setups from the local store.

use crate::error::Result;
use crate::fetch::HashMapFetcher;
use crate::store::HashMapStore;
use crate::types::HashTable;
use async_trait::async_trait;

/// Supplier of the current full hash table.
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn table(&self) -> Result<HashTable>;
}

/// Fetches the table from the published HTTPS location.
pub struct RemoteSource {
    fetcher: HashMapFetcher,
    url: String,
}

impl RemoteSource {
    pub fn new(fetcher: HashMapFetcher, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }
}

#[async_trait]
impl TableSource for RemoteSource {
    async fn table(&self) -> Result<HashTable> {
        self.fetcher.fetch(&self.url).await
    }
}

/// Reads the table from the local store.
pub struct FileSource {
    store: HashMapStore,
}

impl FileSource {
    pub fn new(store: HashMapStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TableSource for FileSource {
    async fn table(&self) -> Result<HashTable> {
        self.store.load().await
    }
}
