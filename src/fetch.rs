//! Retrieval of the published hash table over HTTPS.

use crate::error::{HashMapError, Result};
use crate::types::HashTable;
use reqwest::Client;
use std::time::Duration;

/// Well-known location of the published table.
pub const DEFAULT_HASHMAP_URL: &str =
    "https://raw.githubusercontent.com/Nexus-Mods/Vortex/announcements/gameversion_hashmap.json";

const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP fetcher for the authoritative hash table.
///
/// Issues a single unauthenticated GET and parses the full body as JSON.
/// No retry policy of its own; callers that want retries wrap this.
pub struct HashMapFetcher {
    client: Client,
}

impl HashMapFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(HTTP_CONNECT_TIMEOUT)
            .timeout(HTTP_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HashMapError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Fetch and parse the table published at `url`.
    ///
    /// Transport failures (DNS, connection, TLS, timeout, non-success
    /// status) are [`HashMapError::Network`]; a body that is not a valid
    /// table document is [`HashMapError::Parse`].
    pub async fn fetch(&self, url: &str) -> Result<HashTable> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?
            .error_for_status()
            .map_err(map_transport_error)?;

        let body = response.text().await.map_err(map_transport_error)?;
        let table = serde_json::from_str(&body)?;
        Ok(table)
    }
}

fn map_transport_error(error: reqwest::Error) -> HashMapError {
    if error.is_timeout() {
        HashMapError::Network(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        HashMapError::Network(format!("Connection error: {}", error))
    } else if let Some(status) = error.status() {
        HashMapError::Network(format!("Request failed with status {}: {}", status, error))
    } else {
        HashMapError::Network(format!("Transport error: {}", error))
    }
}
