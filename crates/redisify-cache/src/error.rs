//! Error types for URL parsing and cache assembly.
//!
//! URLs carried inside errors are always redacted, so an error can be logged
//! or printed without leaking a password.

use std::num::ParseIntError;
use std::ops::Range;

/// Error raised when a Redis URL cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum UrlError {
    #[error("malformed URL '{url}': {source}")]
    Malformed {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme '{scheme}' in '{url}', expected 'redis'")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("missing host in '{url}'")]
    MissingHost { url: String },

    #[error("invalid database index '{path}' in '{url}'")]
    InvalidDatabaseIndex {
        url: String,
        path: String,
        #[source]
        source: ParseIntError,
    },
}

/// Error type for building cache settings.
#[derive(Debug, thiserror::Error)]
pub enum RedisifyError {
    #[error("cache '{name}' has an invalid Redis URL")]
    InvalidUrl {
        name: String,
        #[source]
        source: UrlError,
    },
}

impl RedisifyError {
    /// Name of the cache entry that failed.
    pub fn cache_name(&self) -> &str {
        match self {
            Self::InvalidUrl { name, .. } => name,
        }
    }
}

/// Masks the password in a URL-shaped string.
///
/// Works on raw text, so it can be applied to values that failed to parse.
/// Anything without a `user:password@` section is returned unchanged.
pub fn redact(raw: &str) -> String {
    let Some(span) = userinfo_span(raw) else {
        return raw.to_string();
    };
    let Some(colon) = raw[span.clone()].find(':') else {
        return raw.to_string();
    };

    let password_start = span.start + colon + 1;
    format!("{}***{}", &raw[..password_start], &raw[span.end..])
}

/// Returns the `user[:password]` text of a URL exactly as written.
///
/// The userinfo ends at the last `@` of the authority, so an unescaped `@`
/// in a password is kept. Nothing is percent-encoded or decoded.
pub(crate) fn userinfo(raw: &str) -> Option<&str> {
    userinfo_span(raw).map(|span| &raw[span])
}

fn userinfo_span(raw: &str) -> Option<Range<usize>> {
    let authority_start = raw.find("://")? + 3;
    let rest = &raw[authority_start..];
    let authority_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let at = rest[..authority_len].rfind('@')?;

    Some(authority_start..authority_start + at)
}
