//! # Redisify Cache
//!
//! Builds framework cache settings from Redis URLs found in the environment.
//!
//! This crate provides:
//! - Redis URL discovery with `default` precedence ([`resolver`])
//! - Redis URL parsing ([`connection`])
//! - Cache name derivation and known add-on providers ([`keys`])
//! - Cache settings assembly ([`config`])
//!
//! # Example
//!
//! ```
//! use redisify_cache::redisify;
//! use redisify_config::{Environment, RedisifySettings};
//!
//! let env: Environment = [("REDIS_URL", "redis://localhost/1")].into_iter().collect();
//! let caches = redisify(&env, &RedisifySettings::default()).unwrap();
//!
//! let default = caches.default_cache().unwrap();
//! assert_eq!(default.location, "localhost:6379");
//! assert_eq!(default.options.database_index, 1);
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod keys;
pub mod resolver;

pub use config::{CacheEntry, CacheOptions, Caches, assemble};
pub use connection::{REDIS_SCHEME_PREFIX, RedisUrl, is_redis_url};
pub use error::{RedisifyError, UrlError, redact};
pub use keys::{DEFAULT_KEY, REDIS_URL_VAR, derive_name};
pub use resolver::{ResolvedUrl, ResolvedUrls, Source, resolve};

use redisify_config::{Environment, RedisifySettings};
use tracing::info;

/// Resolves and assembles the cache mapping for `env`.
///
/// # Errors
///
/// Returns [`RedisifyError`] if any discovered or fallback URL is malformed.
pub fn redisify(env: &Environment, settings: &RedisifySettings) -> Result<Caches, RedisifyError> {
    let resolved = resolve(env, settings.fallback_url.as_deref());
    let caches = assemble(&resolved, settings)?;

    info!(
        caches = caches.len(),
        has_default = caches.default_cache().is_some(),
        "Cache settings built"
    );

    Ok(caches)
}
