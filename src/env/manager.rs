//! Resolution of declared variables into an immutable mapping.

use crate::env::entry::EnvEntry;
use crate::env::source::{EnvSource, ProcessEnv};
use crate::error::{EnvError, EnvResult};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Resolved values for a declared set of environment variables.
///
/// Construction reads every declaration in order and stops at the first
/// variable that is absent. A successfully built manager holds a value for
/// every declared name and exposes no way to change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvManager {
    values: BTreeMap<String, String>,
}

impl EnvManager {
    /// Resolve `entries` against the process environment.
    pub fn new<I>(entries: I) -> EnvResult<Self>
    where
        I: IntoIterator<Item = EnvEntry>,
    {
        Self::from_source(entries, &ProcessEnv)
    }

    /// Resolve `entries` against an arbitrary source.
    pub fn from_source<I, S>(entries: I, source: &S) -> EnvResult<Self>
    where
        I: IntoIterator<Item = EnvEntry>,
        S: EnvSource + ?Sized,
    {
        let mut values = BTreeMap::new();

        for entry in entries {
            let raw = source.var(entry.name()).ok_or_else(|| {
                debug!(name = entry.name(), "Required environment variable is not defined");
                EnvError::missing(entry.name())
            })?;

            debug!(
                name = entry.name(),
                transformed = entry.has_transform(),
                "Resolved environment variable"
            );
            let value = entry.resolve(raw);
            values.insert(entry.name().to_string(), value);
        }

        info!(count = values.len(), "Environment configuration loaded");
        Ok(Self { values })
    }

    /// Get the resolved value for `name`.
    pub fn get(&self, name: impl AsRef<str>) -> EnvResult<&str> {
        let name = name.as_ref();
        self.values
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| EnvError::not_found(name))
    }

    /// All resolved values, keyed by variable name.
    pub fn get_all(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.values.contains_key(name.as_ref())
    }

    /// Declared names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
