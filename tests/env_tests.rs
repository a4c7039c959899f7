//! Required environment resolution tests

use envguard::env::{EnvEntry, EnvManager, RequiredVar, load_required, load_required_from};
use envguard::{AppSettings, EnvError};
use rstest::rstest;
use std::collections::HashMap;
use std::env;

fn full_env() -> HashMap<String, String> {
    RequiredVar::ALL
        .into_iter()
        .map(|v| (v.as_str().to_string(), format!("{}-value", v.as_str())))
        .collect()
}

/// Replace the required variables in the process environment.
///
/// Callers must be marked `#[serial]`.
fn set_process_env(vars: &HashMap<String, String>) {
    unsafe {
        for var in RequiredVar::ALL {
            env::remove_var(var.as_str());
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }
    }
}

fn clear_process_env() {
    unsafe {
        for var in RequiredVar::ALL {
            env::remove_var(var.as_str());
        }
    }
}

#[test]
fn test_get_all_contains_exactly_declared() {
    let mut vars = full_env();
    vars.insert("PATH_LIKE_EXTRA".to_string(), "ignored".to_string());

    let manager = load_required_from(&vars).unwrap();
    let all = manager.get_all();

    assert_eq!(all.len(), RequiredVar::ALL.len());
    for var in RequiredVar::ALL {
        let expected = match var {
            RequiredVar::S3BucketName => "bbb".to_string(),
            _ => format!("{}-value", var.as_str()),
        };
        assert_eq!(all[var.as_str()], expected);
    }
    assert!(!all.contains_key("PATH_LIKE_EXTRA"));
}

#[rstest]
#[case(RequiredVar::S3BucketName)]
#[case(RequiredVar::S3Endpoint)]
#[case(RequiredVar::AwsRegion)]
#[case(RequiredVar::AwsSecretAccessKey)]
#[case(RequiredVar::AwsAccessKeyId)]
#[case(RequiredVar::BucketName)]
#[case(RequiredVar::KeycloakUrl)]
#[case(RequiredVar::KcAdminUsername)]
#[case(RequiredVar::KcAdminPassword)]
#[case(RequiredVar::KcClientId)]
fn test_missing_variable_is_named(#[case] missing: RequiredVar) {
    let mut vars = full_env();
    vars.remove(missing.as_str());

    let err = load_required_from(&vars).unwrap_err();

    assert_eq!(err, EnvError::missing(missing.as_str()));
    assert!(err.is_initialization());
    assert!(err.to_string().contains(missing.as_str()));
}

#[test]
fn test_first_missing_in_declaration_order_is_reported() {
    let mut vars = full_env();
    vars.remove("KC_CLIENT_ID");
    vars.remove("AWS_REGION");

    let err = load_required_from(&vars).unwrap_err();
    assert_eq!(err.name(), "AWS_REGION");
}

#[test]
fn test_get_matches_get_all() {
    let manager = load_required_from(&full_env()).unwrap();

    for (name, value) in manager.get_all() {
        assert_eq!(manager.get(name).unwrap(), value);
    }
    assert_eq!(
        manager.get(RequiredVar::KeycloakUrl).unwrap(),
        "KEYCLOAK_URL-value"
    );
}

#[rstest]
#[case("PATH")]
#[case("s3_endpoint")]
#[case("")]
fn test_get_undeclared_fails(#[case] name: &str) {
    let manager = load_required_from(&full_env()).unwrap();

    let err = manager.get(name).unwrap_err();
    assert!(matches!(err, EnvError::LookupNotFound { .. }));
    assert!(!err.is_initialization());
}

#[test]
fn test_construction_is_deterministic() {
    let vars = full_env();
    let first = load_required_from(&vars).unwrap();
    let second = load_required_from(&vars).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.get_all(), second.get_all());
}

#[test]
fn test_custom_declaration_with_transform() {
    let vars = full_env();
    let manager = EnvManager::from_source(
        vec![
            EnvEntry::new("KEYCLOAK_URL").with_transform(|v| v.to_lowercase()),
            "AWS_REGION".into(),
        ],
        &vars,
    )
    .unwrap();

    assert_eq!(manager.get("KEYCLOAK_URL").unwrap(), "keycloak_url-value");
    assert_eq!(manager.get("AWS_REGION").unwrap(), "AWS_REGION-value");
}

#[test]
#[serial_test::serial]
fn test_process_env_bucket_override() {
    let mut vars: HashMap<String, String> = RequiredVar::ALL
        .into_iter()
        .map(|v| (v.as_str().to_string(), "set".to_string()))
        .collect();
    vars.insert("S3_ENDPOINT".to_string(), "http://x".to_string());
    vars.insert("AWS_REGION".to_string(), "us-east-1".to_string());
    vars.insert("S3_BUCKET_NAME".to_string(), "real-bucket".to_string());
    set_process_env(&vars);

    let manager = load_required().unwrap();

    assert_eq!(manager.get("S3_BUCKET_NAME").unwrap(), "bbb");
    assert_eq!(manager.get("S3_ENDPOINT").unwrap(), "http://x");
    assert_eq!(manager.get("AWS_REGION").unwrap(), "us-east-1");

    let settings = AppSettings::from_env().unwrap();
    assert_eq!(settings.s3.bucket_name, "bbb");
    assert_eq!(settings.s3.region, "us-east-1");

    clear_process_env();
}

#[test]
#[serial_test::serial]
fn test_process_env_missing_client_id() {
    let mut vars = full_env();
    vars.remove("KC_CLIENT_ID");
    set_process_env(&vars);

    let err = load_required().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Environment variable KC_CLIENT_ID is not defined"
    );

    clear_process_env();
}

#[test]
#[serial_test::serial]
fn test_process_env_empty_value_accepted() {
    let mut vars = full_env();
    vars.insert("BUCKET_NAME".to_string(), String::new());
    set_process_env(&vars);

    let manager = load_required().unwrap();
    assert_eq!(manager.get(RequiredVar::BucketName).unwrap(), "");

    clear_process_env();
}

#[test]
fn test_manager_shared_across_threads() {
    use std::sync::Arc;

    let manager = Arc::new(load_required_from(&full_env()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let manager = Arc::clone(&manager);
            std::thread::spawn(move || manager.get(RequiredVar::AwsRegion).unwrap().to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "AWS_REGION-value");
    }
}

#[test]
#[serial_test::serial]
fn test_custom_declaration_from_process_env() {
    set_process_env(&full_env());

    let manager = EnvManager::new(vec![
        EnvEntry::new("S3_ENDPOINT"),
        EnvEntry::new("BUCKET_NAME").with_transform(|v| format!("{v}-suffixed")),
    ])
    .unwrap();

    assert_eq!(manager.len(), 2);
    assert_eq!(manager.get("BUCKET_NAME").unwrap(), "BUCKET_NAME-value-suffixed");

    clear_process_env();
}

#[cfg(unix)]
#[test]
#[serial_test::serial]
fn test_process_env_non_utf8_value_is_present() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    unsafe {
        env::set_var("ENVGUARD_TEST_RAW_BYTES", OsString::from_vec(vec![0x66, 0xff, 0x6f]));
    }

    let manager = EnvManager::new(vec![EnvEntry::from("ENVGUARD_TEST_RAW_BYTES")]).unwrap();
    assert_eq!(manager.get("ENVGUARD_TEST_RAW_BYTES").unwrap(), "f\u{FFFD}o");

    unsafe {
        env::remove_var("ENVGUARD_TEST_RAW_BYTES");
    }
}
