//! Cache settings assembly.
//!
//! Turns resolved URLs into the `CACHES` mapping a web framework expects:
//!
//! ```text
//! { "default": { "BACKEND": "redis_cache.RedisCache",
//!                "LOCATION": "localhost:6379",
//!                "OPTIONS": { "DB": 0,
//!                             "PARSER_CLASS": "redis.connection.HiredisParser",
//!                             "PASSWORD": null } } }
//! ```

use std::collections::BTreeMap;

use redisify_config::RedisifySettings;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::connection::RedisUrl;
use crate::error::RedisifyError;
use crate::keys::DEFAULT_KEY;
use crate::resolver::ResolvedUrls;

/// A single cache entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CacheEntry {
    #[serde(rename = "BACKEND")]
    pub backend: String,

    /// `host:port`, or the bare host when no port applies.
    #[serde(rename = "LOCATION")]
    pub location: String,

    #[serde(rename = "OPTIONS")]
    pub options: CacheOptions,
}

/// Connection options of a cache entry.
///
/// `PASSWORD` is always serialized, as `null` when the URL has none.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct CacheOptions {
    #[serde(rename = "DB")]
    pub database_index: u32,

    #[serde(rename = "PARSER_CLASS")]
    pub parser_class: String,

    #[serde(rename = "PASSWORD")]
    pub password: Option<String>,
}

impl std::fmt::Debug for CacheOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheOptions")
            .field("database_index", &self.database_index)
            .field("parser_class", &self.parser_class)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl CacheEntry {
    /// Builds an entry from a parsed URL.
    pub fn from_url(url: &RedisUrl, settings: &RedisifySettings) -> Self {
        Self {
            backend: settings.backend.clone(),
            location: url.location(settings.default_port),
            options: CacheOptions {
                database_index: url.database_index,
                parser_class: settings.parser_class.clone(),
                password: url.password.clone(),
            },
        }
    }
}

/// Cache name to entry mapping.
///
/// Serializes as a plain JSON object keyed by cache name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Caches(BTreeMap<String, CacheEntry>);

impl Caches {
    /// Returns the entry named `name`.
    pub fn get(&self, name: &str) -> Option<&CacheEntry> {
        self.0.get(name)
    }

    /// Returns the `default` cache entry, if any.
    pub fn default_cache(&self) -> Option<&CacheEntry> {
        self.get(DEFAULT_KEY)
    }

    /// Iterates over entries in cache name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CacheEntry)> {
        self.0.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Iterates over cache names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no cache was configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Caches {
    type Item = (String, CacheEntry);
    type IntoIter = std::collections::btree_map::IntoIter<String, CacheEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Parses every resolved URL and builds the cache mapping.
///
/// # Errors
///
/// Returns [`RedisifyError::InvalidUrl`] for the first URL that fails to
/// parse. No partial mapping is returned.
#[instrument(skip_all, fields(caches = resolved.len()))]
pub fn assemble(
    resolved: &ResolvedUrls,
    settings: &RedisifySettings,
) -> Result<Caches, RedisifyError> {
    let mut caches = BTreeMap::new();

    for (name, resolved_url) in resolved.iter() {
        let url =
            RedisUrl::parse_with_default_db(&resolved_url.url, settings.default_database_index)
                .map_err(|source| RedisifyError::InvalidUrl {
                    name: name.to_string(),
                    source,
                })?;

        let entry = CacheEntry::from_url(&url, settings);
        debug!(
            cache.name = name,
            cache.location = %entry.location,
            cache.db = entry.options.database_index,
            "Built cache entry"
        );
        caches.insert(name.to_string(), entry);
    }

    Ok(Caches(caches))
}
