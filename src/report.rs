//! Rendering of the resolved configuration for humans and scripts.

use crate::env::{EnvManager, RequiredVar};
use crate::error::Result;
use crate::util::SecretString;
use std::collections::BTreeMap;

/// Output format for [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// `NAME=value` lines
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Resolved values with sensitive entries replaced by `[REDACTED]`.
pub fn redacted_values(env: &EnvManager) -> BTreeMap<&str, &str> {
    env.get_all()
        .iter()
        .map(|(name, value)| {
            let sensitive = RequiredVar::from_name(name).is_some_and(RequiredVar::is_sensitive);
            let shown = if sensitive {
                SecretString::redacted()
            } else {
                value.as_str()
            };
            (name.as_str(), shown)
        })
        .collect()
}

pub fn render(env: &EnvManager, format: ReportFormat) -> Result<String> {
    let values = redacted_values(env);
    match format {
        ReportFormat::Text => Ok(values
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("\n")),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&values)?),
    }
}
