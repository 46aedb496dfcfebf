//! Persistence of manually catalogued hash entries.
//!
//! The interactive half of entry authoring lives in the host application;
//! this is the sink it hands completed entries to.

use crate::error::{HashMapError, Result};
use crate::store::HashMapStore;
use crate::types::{HashEntry, HashTable};

/// Merge `entry` into the locally stored table under `game_id` and persist.
///
/// A missing local file starts from an empty table; a malformed one is a
/// `Parse` error rather than silent data loss. An entry with the same
/// digest replaces the previous one.
pub async fn record_entry(store: &HashMapStore, game_id: &str, entry: HashEntry) -> Result<()> {
    let mut table = match store.load().await {
        Ok(table) => table,
        Err(HashMapError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            HashTable::new()
        }
        Err(err) => return Err(err),
    };
    table.insert_entry(game_id, entry);
    store.save(&table).await
}
