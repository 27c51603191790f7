//! Cache name derivation.
//!
//! Every Redis URL found in the environment becomes a cache whose name is
//! derived from the variable that held it.

/// Name of the cache entry the framework binds by default.
pub const DEFAULT_KEY: &str = "default";

/// Variable that, when set, always defines the `default` cache.
pub const REDIS_URL_VAR: &str = "REDIS_URL";

/// Tokens stripped from a variable name when deriving a cache name.
const SUFFIX_TOKENS: [&str; 2] = ["URL", "URI"];

/// Derives a cache name from an environment variable name.
///
/// The name is split on `_`, every `URL` and `URI` token is dropped, and the
/// rest is joined back with `_`. Matching is case-sensitive.
///
/// ```
/// use redisify_cache::keys::derive_name;
///
/// assert_eq!(derive_name("OTHER_REDIS_URL"), "OTHER_REDIS");
/// assert_eq!(derive_name("ANOTHER_REDIS_URI"), "ANOTHER_REDIS");
/// ```
pub fn derive_name(variable: &str) -> String {
    variable
        .split('_')
        .filter(|token| !SUFFIX_TOKENS.contains(token))
        .collect::<Vec<_>>()
        .join("_")
}

/// Heroku add-on variables known to carry Redis URLs.
pub mod providers {
    /// Known add-on variables and the provider behind each.
    pub const KNOWN_PROVIDERS: [(&str, &str); 5] = [
        ("REDISTOGO_URL", "Redis To Go"),
        ("OPENREDIS_URL", "openredis"),
        ("REDISGREEN_URL", "RedisGreen"),
        ("MYREDIS_URL", "MyRedis"),
        ("REDISCLOUD_URL", "Redis Cloud"),
    ];

    /// Returns the add-on provider for a variable, if it is a known one.
    pub fn provider_for(variable: &str) -> Option<&'static str> {
        KNOWN_PROVIDERS
            .iter()
            .find(|(name, _)| *name == variable)
            .map(|(_, provider)| *provider)
    }
}
