//! Declarations of required environment variables.

use std::fmt;
use std::sync::Arc;

/// Transform applied to a raw value before it is stored.
pub type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A single required variable, optionally paired with a transform.
///
/// # Example
/// ```ignore
/// let entries = vec![
///     EnvEntry::new("AWS_REGION"),
///     EnvEntry::new("KEYCLOAK_URL").with_transform(|v| v.trim_end_matches('/').to_string()),
/// ];
/// ```
#[derive(Clone)]
pub struct EnvEntry {
    name: String,
    transform: Option<Transform>,
}

impl EnvEntry {
    /// Declare a passthrough variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: None,
        }
    }

    /// Attach a transform that maps the raw value to the stored value.
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    /// Produce the value to store for `raw`.
    pub fn resolve(&self, raw: String) -> String {
        match &self.transform {
            Some(transform) => transform(&raw),
            None => raw,
        }
    }
}

impl fmt::Debug for EnvEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvEntry")
            .field("name", &self.name)
            .field("transform", &self.has_transform())
            .finish()
    }
}

impl From<&str> for EnvEntry {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
