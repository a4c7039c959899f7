//! The fixed set of variables this service needs to start.

use crate::env::entry::EnvEntry;
use crate::env::manager::EnvManager;
use crate::env::source::{EnvSource, ProcessEnv};
use crate::error::EnvResult;
use std::fmt;

/// Value stored for `S3_BUCKET_NAME` regardless of what the environment holds.
// FIXME: this discards the configured bucket; confirm with the storage owners
// whether the override can be dropped before relying on S3_BUCKET_NAME.
pub const S3_BUCKET_NAME_OVERRIDE: &str = "bbb";

/// Required environment variables, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequiredVar {
    S3BucketName,
    S3Endpoint,
    AwsRegion,
    AwsSecretAccessKey,
    AwsAccessKeyId,
    BucketName,
    KeycloakUrl,
    KcAdminUsername,
    KcAdminPassword,
    KcClientId,
}

impl RequiredVar {
    pub const ALL: [RequiredVar; 10] = [
        RequiredVar::S3BucketName,
        RequiredVar::S3Endpoint,
        RequiredVar::AwsRegion,
        RequiredVar::AwsSecretAccessKey,
        RequiredVar::AwsAccessKeyId,
        RequiredVar::BucketName,
        RequiredVar::KeycloakUrl,
        RequiredVar::KcAdminUsername,
        RequiredVar::KcAdminPassword,
        RequiredVar::KcClientId,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RequiredVar::S3BucketName => "S3_BUCKET_NAME",
            RequiredVar::S3Endpoint => "S3_ENDPOINT",
            RequiredVar::AwsRegion => "AWS_REGION",
            RequiredVar::AwsSecretAccessKey => "AWS_SECRET_ACCESS_KEY",
            RequiredVar::AwsAccessKeyId => "AWS_ACCESS_KEY_ID",
            RequiredVar::BucketName => "BUCKET_NAME",
            RequiredVar::KeycloakUrl => "KEYCLOAK_URL",
            RequiredVar::KcAdminUsername => "KC_ADMIN_USERNAME",
            RequiredVar::KcAdminPassword => "KC_ADMIN_PASSWORD",
            RequiredVar::KcClientId => "KC_CLIENT_ID",
        }
    }

    /// Look up a variable by its environment name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|var| var.as_str() == name)
    }

    /// Whether the value must be kept out of logs and reports.
    pub const fn is_sensitive(self) -> bool {
        matches!(
            self,
            RequiredVar::AwsSecretAccessKey | RequiredVar::KcAdminPassword
        )
    }

    fn entry(self) -> EnvEntry {
        let entry = EnvEntry::new(self.as_str());
        match self {
            RequiredVar::S3BucketName => {
                entry.with_transform(|_| S3_BUCKET_NAME_OVERRIDE.to_string())
            }
            _ => entry,
        }
    }
}

impl fmt::Display for RequiredVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for RequiredVar {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Declarations for every [`RequiredVar`], in order.
pub fn required_entries() -> Vec<EnvEntry> {
    RequiredVar::ALL.into_iter().map(RequiredVar::entry).collect()
}

/// Resolve the required variables from the process environment.
pub fn load_required() -> EnvResult<EnvManager> {
    load_required_from(&ProcessEnv)
}

/// Resolve the required variables from `source`.
pub fn load_required_from<S: EnvSource + ?Sized>(source: &S) -> EnvResult<EnvManager> {
    EnvManager::from_source(required_entries(), source)
}
