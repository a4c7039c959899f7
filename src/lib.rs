//! Startup guard for required environment variables
//!
//! Resolves a fixed list of environment variables once at process start,
//! fails on the first one that is missing, and exposes the result as an
//! immutable mapping plus a typed [`AppSettings`] view.
//!
//! ## Example
//!
//! ```ignore
//! use envguard::{AppSettings, RequiredVar, load_required};
//!
//! let env = load_required()?;
//! let region = env.get(RequiredVar::AwsRegion)?;
//! let settings = AppSettings::from_manager(&env)?;
//! ```
//!
//! Required variables:
//!
//! ```text
//! S3_BUCKET_NAME  S3_ENDPOINT  AWS_REGION  AWS_SECRET_ACCESS_KEY  AWS_ACCESS_KEY_ID
//! BUCKET_NAME     KEYCLOAK_URL KC_ADMIN_USERNAME  KC_ADMIN_PASSWORD  KC_CLIENT_ID
//! ```

pub mod dotenv;
pub mod env;
pub mod error;
pub mod report;
pub mod settings;
pub mod util;

// Re-export main types
pub use dotenv::load_dotenv;
pub use env::{EnvEntry, EnvManager, EnvSource, RequiredVar, load_required};
pub use error::{AppError, EnvError, Result};
pub use settings::AppSettings;
