//! Runtime configuration for table acquisition and resolution.

use crate::error::Result;
use crate::fetch::{HashMapFetcher, DEFAULT_HASHMAP_URL};
use crate::logging::LoggingConfig;
use crate::resolver::VersionResolver;
use crate::session::SessionCache;
use crate::source::{FileSource, RemoteSource, TableSource};
use crate::store::HashMapStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Which strategy supplies the hash table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Fetch from the published HTTPS location (normal operation).
    Remote,
    /// Read from the local store (offline/debug).
    File,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Location of the published hash table.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Local table path, used by the file source and the authoring sink.
    #[serde(default = "HashMapStore::default_path")]
    pub local_path: PathBuf,

    #[serde(default = "default_source")]
    pub source: SourceKind,

    /// Seconds before a cached subtree is refetched; absent means entries
    /// live for the process lifetime.
    #[serde(default)]
    pub refresh_secs: Option<u64>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_endpoint_url() -> String {
    DEFAULT_HASHMAP_URL.to_string()
}

fn default_source() -> SourceKind {
    SourceKind::Remote
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            local_path: HashMapStore::default_path(),
            source: default_source(),
            refresh_secs: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl ResolverConfig {
    /// Load configuration from an optional file with `GAMEHASH_` environment
    /// overrides layered on top. With neither present, every field takes
    /// its default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix("GAMEHASH"))
            .build()?;
        let config = settings.try_deserialize()?;
        Ok(config)
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_secs.map(Duration::from_secs)
    }

    /// Wire a resolver from this configuration.
    pub fn build_resolver(&self) -> Result<VersionResolver> {
        let source: Arc<dyn TableSource> = match self.source {
            SourceKind::Remote => Arc::new(RemoteSource::new(
                HashMapFetcher::new()?,
                self.endpoint_url.clone(),
            )),
            SourceKind::File => Arc::new(FileSource::new(HashMapStore::new(&self.local_path))),
        };
        let cache = Arc::new(SessionCache::with_refresh_interval(self.refresh_interval()));
        Ok(VersionResolver::new(source, cache))
    }
}
