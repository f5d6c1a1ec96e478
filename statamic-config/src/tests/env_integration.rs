//! Tests for environment variable overrides

use crate::{load_configuration, Severity};
use serial_test::serial;
use std::env;
use tempfile::TempDir;

#[test]
#[serial]
fn test_env_only_configuration() {
    let temp_dir = TempDir::new().unwrap();

    env::set_var("STATAMIC_SCHEMA_UNDEFINED_FIELD_SEVERITY", "hint");

    let result = load_configuration(temp_dir.path());

    env::remove_var("STATAMIC_SCHEMA_UNDEFINED_FIELD_SEVERITY");

    assert_eq!(result.unwrap().undefined_field_severity, Severity::Hint);
}

#[test]
#[serial]
fn test_env_nested_custom_fieldtype() {
    let temp_dir = TempDir::new().unwrap();

    env::set_var("STATAMIC_SCHEMA_CUSTOM_FIELDTYPES__MONEY", "App\\Fieldtypes\\Money");

    let result = load_configuration(temp_dir.path());

    env::remove_var("STATAMIC_SCHEMA_CUSTOM_FIELDTYPES__MONEY");

    let config = result.unwrap();
    assert_eq!(
        config.custom_fieldtypes.get("money").map(String::as_str),
        Some("App\\Fieldtypes\\Money")
    );
}

#[test]
#[serial]
fn test_unprefixed_variables_are_ignored() {
    let temp_dir = TempDir::new().unwrap();

    env::set_var("UNDEFINED_FIELD_SEVERITY", "hint");

    let result = load_configuration(temp_dir.path());

    env::remove_var("UNDEFINED_FIELD_SEVERITY");

    assert_eq!(result.unwrap().undefined_field_severity, Severity::Error);
}
