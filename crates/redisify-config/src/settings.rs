//! Resolution settings.
//!
//! This module provides the knobs that shape the generated cache settings,
//! loaded from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! - `REDISIFY_FALLBACK_URL`: URL used for `default` when the environment has none (default: unset)
//! - `REDISIFY_DEFAULT_DB`: Database index when a URL has no path (default: `0`)
//! - `REDISIFY_DEFAULT_PORT`: Port substituted when a URL has none, or `none` (default: `6379`)
//! - `REDISIFY_BACKEND`: Cache backend identifier (default: `redis_cache.RedisCache`)
//! - `REDISIFY_PARSER_CLASS`: Parser class hint (default: `redis.connection.HiredisParser`)
//!
//! Variables under [`SETTINGS_PREFIX`] configure redisify itself and are
//! never scanned for cache URLs.

use tracing::warn;

use crate::Environment;

/// Prefix shared by every settings variable.
pub const SETTINGS_PREFIX: &str = "REDISIFY_";

/// Well-known Redis port.
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Backend identifier written to every cache entry.
pub const DEFAULT_BACKEND: &str = "redis_cache.RedisCache";

/// Parser class hint written to every cache entry.
pub const DEFAULT_PARSER_CLASS: &str = "redis.connection.HiredisParser";

/// Settings controlling how discovered URLs become cache entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedisifySettings {
    /// URL bound to `default` when the environment provides none.
    pub fallback_url: Option<String>,

    /// Database index used when a URL has no path.
    pub default_database_index: u32,

    /// Port substituted when a URL has none.
    ///
    /// `None` leaves the location as the bare host.
    pub default_port: Option<u16>,

    /// Cache backend identifier.
    pub backend: String,

    /// Parser class hint.
    pub parser_class: String,
}

impl Default for RedisifySettings {
    fn default() -> Self {
        Self {
            fallback_url: None,
            default_database_index: 0,
            default_port: Some(DEFAULT_REDIS_PORT),
            backend: DEFAULT_BACKEND.into(),
            parser_class: DEFAULT_PARSER_CLASS.into(),
        }
    }
}

impl RedisifySettings {
    /// Load settings from an environment snapshot.
    ///
    /// Falls back to default values if variables are not set or cannot be
    /// parsed.
    #[must_use]
    pub fn from_environment(env: &Environment) -> Self {
        let defaults = Self::default();

        Self {
            fallback_url: env.get_non_empty("REDISIFY_FALLBACK_URL").map(Into::into),
            default_database_index: parse_or("REDISIFY_DEFAULT_DB", env, 0),
            default_port: match env.get_non_empty("REDISIFY_DEFAULT_PORT") {
                Some(v) if v.eq_ignore_ascii_case("none") => None,
                Some(_) => Some(parse_or(
                    "REDISIFY_DEFAULT_PORT",
                    env,
                    DEFAULT_REDIS_PORT,
                )),
                None => defaults.default_port,
            },
            backend: env
                .get_non_empty("REDISIFY_BACKEND")
                .map_or(defaults.backend, Into::into),
            parser_class: env
                .get_non_empty("REDISIFY_PARSER_CLASS")
                .map_or(defaults.parser_class, Into::into),
        }
    }

    /// Sets the fallback URL.
    #[must_use]
    pub fn with_fallback_url(mut self, url: impl Into<String>) -> Self {
        self.fallback_url = Some(url.into());
        self
    }

    /// Sets the database index used when a URL has no path.
    #[must_use]
    pub fn with_default_database_index(mut self, index: u32) -> Self {
        self.default_database_index = index;
        self
    }

    /// Sets the port substituted when a URL has none.
    #[must_use]
    pub fn with_default_port(mut self, port: Option<u16>) -> Self {
        self.default_port = port;
        self
    }
}

fn parse_or<T>(name: &str, env: &Environment, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match env.get_non_empty(name) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(env.var = name, value = raw, default = %default, "Ignoring unparseable setting");
            default
        }),
        None => default,
    }
}
