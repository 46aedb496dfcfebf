//! Core data model for the published hash table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One catalogued mapping from a digest to a human-readable version label.
///
/// Field names follow the published JSON schema exactly. Entries are
/// immutable once written and identified by `hash_value` within a game
/// scope; that `hash_value` equals the digest of the listed file set is a
/// trust invariant of the catalogue, not something this crate verifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashEntry {
    /// Relative paths of the files that produced the digest.
    pub files: Vec<String>,
    pub hash_value: String,
    pub user_facing_version: String,
    /// Distribution channel label (e.g. game store).
    pub variant: String,
}

/// Digest-keyed entries for one game.
pub type GameTable = HashMap<String, HashEntry>;

/// The root table: game identifier -> digest -> entry.
///
/// Serializes as a plain JSON object so the structure matches the remotely
/// published document exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashTable(pub HashMap<String, GameTable>);

impl HashTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subtree for one game identifier.
    pub fn game(&self, game_id: &str) -> Option<&GameTable> {
        self.0.get(game_id)
    }

    /// Insert an entry under its own `hash_value`, creating the game scope
    /// if needed. An entry with the same digest replaces the previous one.
    pub fn insert_entry(&mut self, game_id: &str, entry: HashEntry) {
        self.0
            .entry(game_id.to_string())
            .or_default()
            .insert(entry.hash_value.clone(), entry);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
