//! Per-game session cache of fetched table subtrees.

use crate::types::GameTable;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct CachedTable {
    table: Arc<GameTable>,
    fetched_at: Instant,
}

/// In-process cache of per-game table subtrees.
///
/// Entries are replaced wholesale, never edited in place, so readers never
/// observe a partially updated subtree. With no refresh interval configured
/// an entry lives for the lifetime of the process.
pub struct SessionCache {
    entries: RwLock<HashMap<String, CachedTable>>,
    refresh_after: Option<Duration>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::with_refresh_interval(None)
    }

    /// Cache whose entries go stale after `interval`, forcing a refetch on
    /// the next lookup.
    pub fn with_refresh_interval(interval: Option<Duration>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            refresh_after: interval,
        }
    }

    /// Fresh subtree for `game_id`, if one is cached.
    pub fn get(&self, game_id: &str) -> Option<Arc<GameTable>> {
        let entries = self.entries.read();
        let cached = entries.get(game_id)?;
        if let Some(interval) = self.refresh_after {
            if cached.fetched_at.elapsed() >= interval {
                return None;
            }
        }
        Some(Arc::clone(&cached.table))
    }

    /// Replace the subtree for `game_id`.
    pub fn insert(&self, game_id: &str, table: Arc<GameTable>) {
        self.entries.write().insert(
            game_id.to_string(),
            CachedTable {
                table,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drop the subtree for `game_id`, forcing the next lookup to acquire
    /// it again.
    pub fn invalidate(&self, game_id: &str) {
        self.entries.write().remove(game_id);
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtree() -> Arc<GameTable> {
        Arc::new(GameTable::new())
    }

    #[test]
    fn insert_then_get_returns_subtree() {
        let cache = SessionCache::new();
        assert!(cache.get("game1").is_none());

        cache.insert("game1", subtree());
        assert!(cache.get("game1").is_some());
        assert!(cache.get("game2").is_none());
    }

    #[test]
    fn invalidate_removes_one_game() {
        let cache = SessionCache::new();
        cache.insert("game1", subtree());
        cache.insert("game2", subtree());

        cache.invalidate("game1");
        assert!(cache.get("game1").is_none());
        assert!(cache.get("game2").is_some());
    }

    #[test]
    fn clear_removes_everything() {
        let cache = SessionCache::new();
        cache.insert("game1", subtree());
        cache.insert("game2", subtree());

        cache.clear();
        assert!(cache.get("game1").is_none());
        assert!(cache.get("game2").is_none());
    }

    #[test]
    fn zero_refresh_interval_is_always_stale() {
        let cache = SessionCache::with_refresh_interval(Some(Duration::ZERO));
        cache.insert("game1", subtree());
        assert!(cache.get("game1").is_none());
    }

    #[test]
    fn long_refresh_interval_keeps_entry_fresh() {
        let cache = SessionCache::with_refresh_interval(Some(Duration::from_secs(3600)));
        cache.insert("game1", subtree());
        assert!(cache.get("game1").is_some());
    }
}
