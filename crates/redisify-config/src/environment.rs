//! Environment snapshot.
//!
//! Resolution never reads `std::env` directly. The process environment is
//! captured once into an [`Environment`] and every later step works on that
//! snapshot, which keeps resolution pure and lets tests build environments
//! without touching the real process table.

use std::collections::BTreeMap;

use tracing::debug;

/// An immutable snapshot of environment variables.
///
/// Variables are kept in an ordered map, so [`Environment::iter`] always
/// yields them sorted by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Captures the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn capture() -> Self {
        let mut vars = BTreeMap::new();

        for (name, value) in std::env::vars_os() {
            match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => {
                    vars.insert(name, value);
                }
                (Ok(name), Err(_)) => {
                    debug!(env.var = %name, "Skipping variable with non-unicode value");
                }
                (Err(name), _) => {
                    debug!(env.var = ?name, "Skipping variable with non-unicode name");
                }
            }
        }

        Self { vars }
    }

    /// Returns the value of `name`, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Returns the value of `name` when it is set to a non-empty string.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// Iterates over `(name, value)` pairs in lexicographic order of name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
