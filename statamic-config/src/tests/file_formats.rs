//! Tests for different configuration file formats

use crate::{ConfigError, ConfigProvider, Severity};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
#[serial]
fn test_toml_format() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(
        temp_dir.path().join("statamic-schema.toml"),
        r#"
blueprint_paths = ["resources/blueprints", "/opt/theme/blueprints"]
computed_scan_paths = ["app", "src/Computed.php"]
undefined_field_severity = "warning"

[custom_fieldtypes]
money = "App\\Fieldtypes\\Money"
"#,
    )
    .unwrap();

    let config = ConfigProvider::new(temp_dir.path()).load().unwrap();

    assert_eq!(
        config.blueprint_paths,
        vec![
            temp_dir.path().join("resources/blueprints"),
            PathBuf::from("/opt/theme/blueprints"),
        ]
    );
    assert_eq!(
        config.computed_scan_paths,
        vec![
            temp_dir.path().join("app"),
            temp_dir.path().join("src/Computed.php"),
        ]
    );
    assert_eq!(config.undefined_field_severity, Severity::Warning);
    assert_eq!(
        config.custom_fieldtypes.get("money").map(String::as_str),
        Some("App\\Fieldtypes\\Money")
    );
    assert!(config.report_undefined_fields);
}

#[test]
#[serial]
fn test_yaml_format() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(
        temp_dir.path().join("statamic-schema.yaml"),
        r#"
blueprint_paths:
  - blueprints
custom_fieldtypes:
  money: App\Fieldtypes\Money
  seo_pro: Statamic\SeoPro\Fieldtypes\SeoProFieldtype
report_undefined_fields: false
"#,
    )
    .unwrap();

    let config = ConfigProvider::new(temp_dir.path()).load().unwrap();

    assert_eq!(config.blueprint_paths, vec![temp_dir.path().join("blueprints")]);
    assert_eq!(config.custom_fieldtypes.len(), 2);
    assert!(!config.report_undefined_fields);
}

#[test]
#[serial]
fn test_yml_format() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(
        temp_dir.path().join("statamic-schema.yml"),
        "undefined_field_severity: info\n",
    )
    .unwrap();

    let config = ConfigProvider::new(temp_dir.path()).load().unwrap();
    assert_eq!(config.undefined_field_severity, Severity::Info);
}

#[test]
#[serial]
fn test_json_format() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(
        temp_dir.path().join("statamic-schema.json"),
        r#"
{
    "computed_scan_paths": ["app/Providers"],
    "undefined_field_severity": "hint"
}
"#,
    )
    .unwrap();

    let config = ConfigProvider::new(temp_dir.path()).load().unwrap();
    assert_eq!(
        config.computed_scan_paths,
        vec![temp_dir.path().join("app/Providers")]
    );
    assert_eq!(config.undefined_field_severity, Severity::Hint);
}

#[test]
#[serial]
fn test_invalid_severity_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(
        temp_dir.path().join("statamic-schema.yaml"),
        "undefined_field_severity: fatal\n",
    )
    .unwrap();

    let result = ConfigProvider::new(temp_dir.path()).load();
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
#[serial]
fn test_empty_custom_class_fails_validation() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(
        temp_dir.path().join("statamic-schema.yaml"),
        "custom_fieldtypes:\n  money: \"\"\n",
    )
    .unwrap();

    let result = ConfigProvider::new(temp_dir.path()).load();
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
