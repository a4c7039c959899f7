//! Required environment variables
//!
//! Declares the variables the service needs, resolves them once at startup,
//! and exposes the frozen result through [`EnvManager`].

pub mod entry;
pub mod manager;
pub mod required;
pub mod source;

pub use entry::{EnvEntry, Transform};
pub use manager::EnvManager;
pub use required::{
    RequiredVar, S3_BUCKET_NAME_OVERRIDE, load_required, load_required_from, required_entries,
};
pub use source::{EnvSource, ProcessEnv};
