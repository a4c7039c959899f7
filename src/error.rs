//! Error types for envguard
//!
//! Initialization failures (a required variable is absent) and
//! lookup failures (asking for a name that was never declared) are kept as
//! separate variants so callers can tell a deployment problem from a
//! programming mistake.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Environment error: {0}")]
    Env(#[from] EnvError),

    #[error("Failed to load env file {}: {reason}", .path.display())]
    DotEnv { path: PathBuf, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while resolving or reading required environment variables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("Environment variable {name} is not defined")]
    MissingVariable { name: String },

    #[error("Environment variable {name} was not found or its transform produced no value")]
    LookupNotFound { name: String },
}

impl EnvError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::LookupNotFound { name: name.into() }
    }

    /// Name of the variable this error refers to
    pub fn name(&self) -> &str {
        match self {
            Self::MissingVariable { name } | Self::LookupNotFound { name } => name,
        }
    }

    /// True for errors raised while building the configuration, as opposed to
    /// lookups against an already built one.
    pub fn is_initialization(&self) -> bool {
        matches!(self, Self::MissingVariable { .. })
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for environment resolution and lookups
pub type EnvResult<T> = std::result::Result<T, EnvError>;
