//! Redis URL discovery.
//!
//! Scans an [`Environment`] for Redis URLs and decides which cache name each
//! one is bound to. Precedence for the `default` cache:
//!
//! 1. `REDIS_URL`, when set and non-empty
//! 2. the first other Redis URL found, scanning variables in name order
//! 3. the caller's fallback URL
//!
//! Every Redis URL other than `REDIS_URL` is also bound under the name
//! derived from its variable, so the URL picked in step 2 appears twice.
//! Variables under [`SETTINGS_PREFIX`] are redisify's own settings and are
//! not scanned.

use std::collections::BTreeMap;

use redisify_config::{Environment, SETTINGS_PREFIX};
use tracing::{debug, warn};

use crate::connection::is_redis_url;
use crate::error::redact;
use crate::keys::{DEFAULT_KEY, REDIS_URL_VAR, derive_name, providers::provider_for};

/// Where a resolved URL came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// An environment variable, by name.
    Variable(String),
    /// The caller-supplied fallback URL.
    Fallback,
}

/// A URL bound to a cache name, not yet parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub url: String,
    pub source: Source,
}

/// Cache name to URL bindings produced by [`resolve`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedUrls {
    urls: BTreeMap<String, ResolvedUrl>,
}

impl ResolvedUrls {
    /// Returns the URL bound to `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.urls.get(name).map(|resolved| resolved.url.as_str())
    }

    /// Returns where the URL bound to `name` came from.
    pub fn source(&self, name: &str) -> Option<&Source> {
        self.urls.get(name).map(|resolved| &resolved.source)
    }

    /// Returns the URL bound to `default`.
    pub fn default_url(&self) -> Option<&str> {
        self.get(DEFAULT_KEY)
    }

    /// Iterates over bindings in cache name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedUrl)> {
        self.urls.iter().map(|(name, resolved)| (name.as_str(), resolved))
    }

    /// Iterates over bound cache names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.urls.keys().map(String::as_str)
    }

    /// Returns the number of bound cache names.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns true when nothing was bound.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    fn has_default(&self) -> bool {
        self.urls.contains_key(DEFAULT_KEY)
    }

    fn bind(&mut self, name: impl Into<String>, url: &str, source: Source) {
        self.urls.insert(
            name.into(),
            ResolvedUrl {
                url: url.to_string(),
                source,
            },
        );
    }
}

/// Discovers Redis URLs in `env` and binds them to cache names.
///
/// `fallback_url` is used for `default` only when the environment holds no
/// Redis URL at all. Nothing here fails: an environment without URLs and no
/// fallback simply yields an empty result.
pub fn resolve(env: &Environment, fallback_url: Option<&str>) -> ResolvedUrls {
    let mut resolved = ResolvedUrls::default();

    let explicit_default = env.get_non_empty(REDIS_URL_VAR);
    if let Some(url) = explicit_default {
        debug!(env.var = REDIS_URL_VAR, url = %redact(url), "Using REDIS_URL as default cache");
        resolved.bind(DEFAULT_KEY, url, Source::Variable(REDIS_URL_VAR.into()));
    }

    for (variable, value) in env.iter() {
        if variable == REDIS_URL_VAR
            || variable.starts_with(SETTINGS_PREFIX)
            || !is_redis_url(value)
        {
            continue;
        }

        let name = derive_name(variable);
        if name == DEFAULT_KEY && explicit_default.is_some() {
            warn!(env.var = variable, "Skipping Redis URL that would replace REDIS_URL as default");
            continue;
        }

        debug!(
            env.var = variable,
            cache.name = %name,
            provider = provider_for(variable).unwrap_or("unknown"),
            url = %redact(value),
            "Found Redis URL"
        );

        if !resolved.has_default() {
            debug!(env.var = variable, "Using first Redis URL found as default cache");
            resolved.bind(DEFAULT_KEY, value, Source::Variable(variable.into()));
        }

        if name.is_empty() {
            warn!(env.var = variable, "Not naming Redis URL whose variable name derives an empty cache name");
            continue;
        }
        resolved.bind(name, value, Source::Variable(variable.into()));
    }

    if let Some(url) = fallback_url.filter(|_| !resolved.has_default()) {
        debug!(url = %redact(url), "Using fallback URL as default cache");
        resolved.bind(DEFAULT_KEY, url, Source::Fallback);
    }

    resolved
}
