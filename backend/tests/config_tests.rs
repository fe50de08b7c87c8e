//! Configuration loading from files and the process environment.

mod support;

use std::io::Write;

use apiary_backend::config::MAX_PRECISION;
use apiary_backend::{ServiceConfig, ServiceError};
use apiary_units::UnitPreference;
use support::{with_scoped_env, CLEAR_CONFIG_ENV};

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn from_file_reads_all_sections() {
    let file = config_file(
        r#"
[server]
host = "127.0.0.1"
port = 8181

[display]
default_preference = "imperial"
precision = 3
"#,
    );

    let config = ServiceConfig::from_file(file.path()).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.display.default_preference, UnitPreference::Imperial);
    assert_eq!(config.display.precision, 3);
}

#[test]
fn from_file_missing_file_is_configuration_error() {
    let result = ServiceConfig::from_file("/definitely/not/here/apiary.toml");
    assert!(matches!(result, Err(ServiceError::Configuration(_))));
}

#[test]
fn from_file_rejects_malformed_toml() {
    let file = config_file("[server\nport = ");
    let err = ServiceConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn from_file_rejects_out_of_range_precision() {
    let file = config_file(&format!("[display]\nprecision = {}\n", MAX_PRECISION + 1));
    assert!(ServiceConfig::from_file(file.path()).is_err());
}

#[test]
fn bundled_config_matches_defaults() {
    let config = ServiceConfig::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/apiary.toml")).unwrap();
    assert_eq!(config, ServiceConfig::default());
}

#[test]
fn load_applies_environment_overrides() {
    let mut env = CLEAR_CONFIG_ENV.to_vec();
    env.extend([
        ("PORT", Some("9191")),
        ("APIARY_UNIT_PREFERENCE", Some("imperial")),
        ("APIARY_DISPLAY_PRECISION", Some("1")),
    ]);

    let config = with_scoped_env(&env, ServiceConfig::load).unwrap();
    assert_eq!(config.server.port, 9191);
    assert_eq!(config.display.default_preference, UnitPreference::Imperial);
    assert_eq!(config.display.precision, 1);
}

#[test]
fn load_without_overrides_uses_file_or_defaults() {
    let config = with_scoped_env(&CLEAR_CONFIG_ENV, ServiceConfig::load).unwrap();
    assert_eq!(config, ServiceConfig::default());
}

#[test]
fn load_rejects_invalid_environment_values() {
    for (key, value) in [
        ("PORT", "not-a-port"),
        ("APIARY_UNIT_PREFERENCE", "martian"),
        ("APIARY_DISPLAY_PRECISION", "many"),
    ] {
        let mut env = CLEAR_CONFIG_ENV.to_vec();
        env.push((key, Some(value)));
        let result = with_scoped_env(&env, ServiceConfig::load);
        assert!(
            matches!(result, Err(ServiceError::Configuration(_))),
            "{key}={value} should be rejected"
        );
    }
}
