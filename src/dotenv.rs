//! `.env` bootstrap
//!
//! Populates the process environment before the required variables are
//! resolved. Variables already set in the environment are left untouched.

use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load variables from an env file into the process environment.
///
/// With an explicit `path` the file must exist and parse. Without one, the
/// nearest `.env` in the current directory or its parents is used if present.
/// Returns the path that was loaded, if any.
pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| AppError::DotEnv {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            info!(path = %path.display(), "Loaded env file");
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(found) => {
                info!(path = %found.display(), "Loaded env file");
                Ok(Some(found))
            }
            Err(e) if e.not_found() => {
                debug!("No .env file found");
                Ok(None)
            }
            Err(e) => Err(AppError::DotEnv {
                path: PathBuf::from(".env"),
                reason: e.to_string(),
            }),
        },
    }
}
