//! # Redisify
//!
//! Friendly Redis cache settings for apps deployed with their configuration
//! in the environment.
//!
//! Looks for Redis URLs in the environment and turns them into a `CACHES`
//! mapping:
//!
//! - `REDIS_URL`, when set, becomes the `default` cache
//! - every other variable holding a `redis://` URL becomes a cache named after
//!   the variable, with `URL`/`URI` tokens removed (`OTHER_REDIS_URL` →
//!   `OTHER_REDIS`)
//! - without `REDIS_URL`, the first such URL (by variable name) is also the
//!   `default` cache
//! - with no Redis URL at all, the fallback URL, if any, is the `default`
//!   cache
//!
//! # Example
//!
//! ```ignore
//! let caches = redisify::redisify_env(Some("redis://localhost"))?;
//! println!("{}", serde_json::to_string_pretty(&caches)?);
//! ```

pub use redisify_cache::{
    CacheEntry, CacheOptions, Caches, DEFAULT_KEY, REDIS_URL_VAR, RedisUrl, RedisifyError,
    ResolvedUrls, Source, UrlError, assemble, derive_name, keys::providers::provider_for,
    redact, redisify, resolve,
};
pub use redisify_config::{Environment, RedisifySettings};

/// Builds the cache mapping from the current process environment.
///
/// Settings are read from the `REDISIFY_*` variables; `fallback`, when given,
/// replaces `REDISIFY_FALLBACK_URL`.
///
/// # Errors
///
/// Returns [`RedisifyError`] if any discovered or fallback URL is malformed.
pub fn redisify_env(fallback: Option<&str>) -> Result<Caches, RedisifyError> {
    let env = Environment::capture();
    let mut settings = RedisifySettings::from_environment(&env);
    if let Some(url) = fallback {
        settings = settings.with_fallback_url(url);
    }

    redisify(&env, &settings)
}
