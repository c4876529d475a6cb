// SPDX-License-Identifier: Apache-2.0

//! TTL-based file caching for GraphQL responses.
//!
//! Stores GraphQL responses whose only errors are `NOT_FOUND` as JSON files
//! with an embedded timestamp. Keys are SHA-256 digests of the caller's token
//! fingerprint, the operation name, query text and variables, so one file maps
//! to one exact request made by one identity.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::{APP_DIR_NAME, CacheConfig};
use crate::github::transport::{GraphqlRequest, GraphqlResponse};

/// A cached entry with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached data.
    pub data: T,
    /// When the entry was cached.
    pub cached_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// Create a new cache entry.
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// Check if this entry is still valid based on TTL.
    pub fn is_valid(&self, ttl: Duration) -> bool {
        let now = Utc::now();
        now.signed_duration_since(self.cached_at) < ttl
    }
}

/// Returns the default cache directory.
///
/// - Linux: `~/.cache/gh-md`
/// - macOS: `~/Library/Caches/gh-md`
/// - Windows: `C:\Users\<User>\AppData\Local\gh-md`
#[must_use]
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

/// Hex SHA-256 of a token, so entries never carry the secret itself.
#[must_use]
pub fn token_fingerprint(token: &SecretString) -> String {
    hex::encode(Sha256::digest(token.expose_secret().as_bytes()))
}

/// Generates the cache key for a GraphQL request made under `identity`.
///
/// Returns a key in the format `graphql/{sha256}.json`.
#[must_use]
pub fn cache_key_graphql(identity: &str, request: &GraphqlRequest) -> String {
    let mut hasher = Sha256::new();
    hasher.update(identity.as_bytes());
    hasher.update([0]);
    hasher.update(request.operation_name.as_bytes());
    hasher.update([0]);
    hasher.update(request.query.as_bytes());
    hasher.update([0]);
    hasher.update(Value::Object(request.variables.clone()).to_string().as_bytes());
    format!("graphql/{}.json", hex::encode(hasher.finalize()))
}

/// On-disk cache of GraphQL responses.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    root: PathBuf,
    ttl: Duration,
    identity: String,
}

impl ResponseCache {
    /// Creates a cache rooted at `root` whose entries live for `ttl`.
    ///
    /// The cache starts unscoped; see [`ResponseCache::scoped_to`].
    pub fn new(root: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            root: root.into(),
            ttl,
            identity: String::new(),
        }
    }

    /// Scopes entries to `token`. Caches scoped to different tokens never
    /// see each other's entries, even under the same root.
    #[must_use]
    pub fn scoped_to(mut self, token: &SecretString) -> Self {
        self.identity = token_fingerprint(token);
        self
    }

    /// Creates a cache from configuration, or `None` when caching is disabled.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        let ttl = i64::try_from(config.ttl_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .unwrap_or(Duration::MAX);
        Some(Self::new(cache_dir(), ttl))
    }

    /// Cache root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Looks up a fresh response for `request`.
    ///
    /// Missing, expired and unreadable entries are all a miss.
    #[must_use]
    pub fn get(&self, request: &GraphqlRequest) -> Option<GraphqlResponse> {
        let key = cache_key_graphql(&self.identity, request);
        match self.read::<GraphqlResponse>(&key) {
            Ok(Some(entry)) if entry.is_valid(self.ttl) => {
                debug!(key = %key, "Cache hit");
                Some(entry.data)
            }
            Ok(Some(_)) => {
                debug!(key = %key, "Cache entry expired");
                None
            }
            Ok(None) => None,
            Err(e) => {
                debug!(key = %key, error = %e, "Ignoring unreadable cache entry");
                None
            }
        }
    }

    /// Stores the response for `request`. Failures are logged and dropped.
    pub fn put(&self, request: &GraphqlRequest, response: &GraphqlResponse) {
        let key = cache_key_graphql(&self.identity, request);
        if let Err(e) = self.write(&key, &CacheEntry::new(response)) {
            debug!(key = %key, error = %e, "Failed to write cache entry");
        }
    }

    fn read<T: for<'de> Deserialize<'de>>(
        &self,
        key: &str,
    ) -> std::io::Result<Option<CacheEntry<T>>> {
        let path = self.root.join(key);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let entry: CacheEntry<T> = serde_json::from_str(&contents)?;
        Ok(Some(entry))
    }

    /// Atomic write: write to temp file, then rename.
    fn write<T: Serialize>(&self, key: &str, entry: &CacheEntry<T>) -> std::io::Result<()> {
        let path = self.root.join(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(entry)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(number: u64) -> GraphqlRequest {
        GraphqlRequest::new("IssueTitle", "query { viewer { login } }")
            .variable("owner", "cli")
            .variable("name", "cli")
            .variable("number", number)
    }

    #[test]
    fn test_cache_entry_new() {
        let entry = CacheEntry::new("data");
        assert!(entry.is_valid(Duration::minutes(1)));
        assert!(!entry.is_valid(Duration::zero()));
    }

    #[test]
    fn test_cache_key_is_stable_and_distinct() {
        let key = |identity, number| cache_key_graphql(identity, &request(number));
        assert_eq!(key("a", 1), key("a", 1));
        assert_ne!(key("a", 1), key("a", 2));
        assert_ne!(key("a", 1), key("b", 1));
        assert!(key("a", 1).starts_with("graphql/"));
        assert!(key("a", 1).ends_with(".json"));
    }

    #[test]
    fn test_token_fingerprint_hides_token() {
        let token = SecretString::from("ghp_abc123");
        let fingerprint = token_fingerprint(&token);
        assert_eq!(fingerprint.len(), 64);
        assert!(!fingerprint.contains("ghp_abc123"));
        assert_eq!(fingerprint, token_fingerprint(&SecretString::from("ghp_abc123")));
    }

    #[test]
    fn test_tokens_miss_each_others_entries() {
        let dir = tempfile::tempdir().unwrap();
        let first = ResponseCache::new(dir.path(), Duration::minutes(10))
            .scoped_to(&SecretString::from("token-a"));
        let second = ResponseCache::new(dir.path(), Duration::minutes(10))
            .scoped_to(&SecretString::from("token-b"));
        let response = GraphqlResponse::from_data(
            json!({ "repository": { "issueOrPullRequest": { "title": "Secret roadmap" } } }),
        );

        first.put(&request(7), &response);
        assert_eq!(first.get(&request(7)), Some(response));
        assert!(second.get(&request(7)).is_none());
        assert!(ResponseCache::new(dir.path(), Duration::minutes(10)).get(&request(7)).is_none());
    }

    #[test]
    fn test_put_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResponseCache::new(dir.path(), Duration::minutes(10));
        let response = GraphqlResponse::from_data(
            json!({ "repository": { "discussion": { "title": "Upgrade command" } } }),
        );

        assert!(cache.get(&request(2673)).is_none());
        cache.put(&request(2673), &response);
        assert_eq!(cache.get(&request(2673)), Some(response));
        assert!(cache.get(&request(2674)).is_none());
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResponseCache::new(dir.path(), Duration::zero());
        cache.put(
            &request(1),
            &GraphqlResponse::from_data(json!({ "repository": null })),
        );
        assert!(cache.get(&request(1)).is_none());
    }

    #[test]
    fn test_corrupt_entry_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResponseCache::new(dir.path(), Duration::minutes(10));
        let path = dir.path().join(cache_key_graphql("", &request(1)));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        assert!(cache.get(&request(1)).is_none());
    }

    #[test]
    fn test_disabled_config_has_no_cache() {
        let config = CacheConfig {
            enabled: false,
            ttl_minutes: 10,
        };
        assert!(ResponseCache::from_config(&config).is_none());
        assert!(ResponseCache::from_config(&CacheConfig::default()).is_some());
    }
}
