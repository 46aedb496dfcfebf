//! Version resolution from digests.

use crate::session::SessionCache;
use crate::source::TableSource;
use crate::types::GameTable;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Outcome of a digest lookup.
///
/// Callers that only need a display string use
/// [`VersionResolver::resolve_version`], which collapses all three cases.
/// The distinction between a digest that is not yet catalogued and a table
/// that could not be obtained at all is kept here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The digest is catalogued; carries the user-facing version label.
    Known(String),
    /// A table was obtained but the digest is not in it.
    Unknown(String),
    /// No table could be obtained; carries the digest unchanged.
    Unavailable(String),
}

impl Resolution {
    /// The display string: the version label when known, otherwise the
    /// digest itself.
    pub fn into_display(self) -> String {
        match self {
            Resolution::Known(version) => version,
            Resolution::Unknown(digest) | Resolution::Unavailable(digest) => digest,
        }
    }
}

/// Resolves digests to user-facing version strings.
///
/// Table subtrees are acquired lazily per game identifier through the
/// injected [`TableSource`] and held in the injected [`SessionCache`].
/// Acquisition failures never surface through [`resolve_version`]: the
/// digest is a safe display identity for "version unknown", and the game
/// stays uncached so a later call retries the acquisition.
///
/// [`resolve_version`]: VersionResolver::resolve_version
pub struct VersionResolver {
    source: Arc<dyn TableSource>,
    cache: Arc<SessionCache>,
    inflight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl VersionResolver {
    pub fn new(source: Arc<dyn TableSource>, cache: Arc<SessionCache>) -> Self {
        Self {
            source,
            cache,
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve `digest` for `game_id` to a display string. Never fails.
    pub async fn resolve_version(&self, game_id: &str, digest: &str) -> String {
        self.resolve(game_id, digest).await.into_display()
    }

    /// Resolve `digest` for `game_id`, keeping the tri-state outcome.
    pub async fn resolve(&self, game_id: &str, digest: &str) -> Resolution {
        let table = match self.game_table(game_id).await {
            Some(table) => table,
            None => return Resolution::Unavailable(digest.to_string()),
        };
        match table.get(digest) {
            Some(entry) => Resolution::Known(entry.user_facing_version.clone()),
            None => Resolution::Unknown(digest.to_string()),
        }
    }

    /// Cached subtree for `game_id`, acquiring it from the source on a miss.
    ///
    /// Concurrent callers for the same game share one acquisition through a
    /// per-game guard instead of issuing duplicate fetches.
    async fn game_table(&self, game_id: &str) -> Option<Arc<GameTable>> {
        if let Some(table) = self.cache.get(game_id) {
            return Some(table);
        }

        let guard = self.inflight_guard(game_id).await;
        let _held = guard.lock().await;

        // Another caller may have finished the acquisition while we waited.
        if let Some(table) = self.cache.get(game_id) {
            return Some(table);
        }

        match self.source.table().await {
            Ok(full) => {
                // A table without this game still counts as a successful
                // acquisition; the empty subtree is cached so lookups
                // degrade without refetching on every call.
                let subtree = Arc::new(full.game(game_id).cloned().unwrap_or_default());
                debug!(game_id, entries = subtree.len(), "cached hash table subtree");
                self.cache.insert(game_id, Arc::clone(&subtree));
                Some(subtree)
            }
            Err(err) => {
                warn!(game_id, error = %err, "failed to obtain hash table");
                None
            }
        }
    }

    async fn inflight_guard(&self, game_id: &str) -> Arc<Mutex<()>> {
        let mut inflight = self.inflight.lock().await;
        Arc::clone(inflight.entry(game_id.to_string()).or_default())
    }
}
