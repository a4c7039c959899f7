//! Typed view over the resolved environment
//!
//! [`AppSettings`] is built once at startup and handed to whatever needs S3
//! or Keycloak credentials. Share it behind an `Arc` when more than one
//! component holds it.

use crate::env::{EnvManager, RequiredVar, load_required};
use crate::error::EnvResult;
use crate::util::SecretString;
use serde::Serialize;

/// S3-compatible object storage settings
#[derive(Debug, Clone, Serialize)]
pub struct S3Settings {
    pub bucket_name: String,
    pub endpoint: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: SecretString,
}

/// Keycloak admin client settings
#[derive(Debug, Clone, Serialize)]
pub struct KeycloakSettings {
    pub url: String,
    pub admin_username: String,
    pub admin_password: SecretString,
    pub client_id: String,
}

/// Everything the service reads from its environment
#[derive(Debug, Clone, Serialize)]
pub struct AppSettings {
    pub s3: S3Settings,
    pub keycloak: KeycloakSettings,
    /// Application bucket, distinct from `s3.bucket_name`
    pub bucket_name: String,
}

impl AppSettings {
    /// Build settings from an already resolved manager.
    pub fn from_manager(env: &EnvManager) -> EnvResult<Self> {
        let get = |var: RequiredVar| env.get(var).map(str::to_string);
        let secret = |var: RequiredVar| env.get(var).map(SecretString::new);

        Ok(Self {
            s3: S3Settings {
                bucket_name: get(RequiredVar::S3BucketName)?,
                endpoint: get(RequiredVar::S3Endpoint)?,
                region: get(RequiredVar::AwsRegion)?,
                access_key_id: get(RequiredVar::AwsAccessKeyId)?,
                secret_access_key: secret(RequiredVar::AwsSecretAccessKey)?,
            },
            keycloak: KeycloakSettings {
                url: get(RequiredVar::KeycloakUrl)?,
                admin_username: get(RequiredVar::KcAdminUsername)?,
                admin_password: secret(RequiredVar::KcAdminPassword)?,
                client_id: get(RequiredVar::KcClientId)?,
            },
            bucket_name: get(RequiredVar::BucketName)?,
        })
    }

    /// Resolve the required variables from the process environment.
    pub fn from_env() -> EnvResult<Self> {
        Self::from_manager(&load_required()?)
    }
}
