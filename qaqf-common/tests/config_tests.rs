//! Tests for configuration loading and settings precedence
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate QAQF_* variables are marked with #[serial].

use qaqf_common::config::{
    load_or_default, load_toml_config, locate_config_file, CliOverrides, ServiceSettings,
    TomlConfig, CONFIG_PATH_ENV, DEFAULT_GENERATION_ENDPOINT, DEFAULT_PORT,
    GENERATION_ENDPOINT_ENV, GENERATION_TOKEN_ENV, PORT_ENV,
};
use qaqf_common::Error;
use serial_test::serial;
use std::env;
use std::time::Duration;
use tempfile::TempDir;

fn clear_env() {
    env::remove_var(CONFIG_PATH_ENV);
    env::remove_var(PORT_ENV);
    env::remove_var(GENERATION_ENDPOINT_ENV);
    env::remove_var(GENERATION_TOKEN_ENV);
}

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("qaqf-cg.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
#[serial]
fn test_defaults_when_nothing_configured() {
    clear_env();

    let settings = ServiceSettings::resolve(&CliOverrides::default(), &TomlConfig::default()).unwrap();

    assert_eq!(settings.port, DEFAULT_PORT);
    assert_eq!(settings.generation_endpoint, DEFAULT_GENERATION_ENDPOINT);
    assert_eq!(settings.generation_token, None);
    assert_eq!(settings.generation_timeout, Duration::from_secs(120));
    assert_eq!(settings.session_idle_timeout, Duration::from_secs(3600));
    assert_eq!(settings.max_sessions, 1000);
    assert_eq!(settings.log_level, "info");
}

#[test]
#[serial]
fn test_toml_overrides_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        port = 6100

        [logging]
        level = "debug"

        [generation]
        endpoint = "https://toml.example.org/generate"
        api_token = "toml-token"
        timeout_secs = 15

        [sessions]
        idle_timeout_secs = 900
        max_sessions = 20
        "#,
    );

    let toml = load_toml_config(&path).unwrap();
    let settings = ServiceSettings::resolve(&CliOverrides::default(), &toml).unwrap();

    assert_eq!(settings.port, 6100);
    assert_eq!(settings.generation_endpoint, "https://toml.example.org/generate");
    assert_eq!(settings.generation_token.as_deref(), Some("toml-token"));
    assert_eq!(settings.generation_timeout, Duration::from_secs(15));
    assert_eq!(settings.session_idle_timeout, Duration::from_secs(900));
    assert_eq!(settings.max_sessions, 20);
    assert_eq!(settings.log_level, "debug");
}

#[test]
#[serial]
fn test_env_overrides_toml() {
    clear_env();
    env::set_var(PORT_ENV, "6200");
    env::set_var(GENERATION_ENDPOINT_ENV, "http://env.example.org/generate");
    env::set_var(GENERATION_TOKEN_ENV, "env-token");

    let mut toml = TomlConfig::default();
    toml.port = Some(6100);
    toml.generation.endpoint = Some("https://toml.example.org/generate".to_string());
    toml.generation.api_token = Some("toml-token".to_string());

    let settings = ServiceSettings::resolve(&CliOverrides::default(), &toml).unwrap();

    assert_eq!(settings.port, 6200);
    assert_eq!(settings.generation_endpoint, "http://env.example.org/generate");
    assert_eq!(settings.generation_token.as_deref(), Some("env-token"));

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var(PORT_ENV, "6200");
    env::set_var(GENERATION_ENDPOINT_ENV, "http://env.example.org/generate");

    let cli = CliOverrides {
        port: Some(6300),
        generation_endpoint: Some("http://cli.example.org/generate".to_string()),
        log_level: Some("trace".to_string()),
    };
    let settings = ServiceSettings::resolve(&cli, &TomlConfig::default()).unwrap();

    assert_eq!(settings.port, 6300);
    assert_eq!(settings.generation_endpoint, "http://cli.example.org/generate");
    assert_eq!(settings.log_level, "trace");

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_port_is_config_error() {
    clear_env();
    env::set_var(PORT_ENV, "not-a-port");

    let result = ServiceSettings::resolve(&CliOverrides::default(), &TomlConfig::default());
    assert!(matches!(result, Err(Error::Config(_))));

    clear_env();
}

#[test]
#[serial]
fn test_non_http_endpoint_rejected() {
    clear_env();
    let cli = CliOverrides {
        generation_endpoint: Some("localhost:5000".to_string()),
        ..Default::default()
    };

    let result = ServiceSettings::resolve(&cli, &TomlConfig::default());
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_zero_timeout_rejected() {
    clear_env();
    let mut toml = TomlConfig::default();
    toml.generation.timeout_secs = Some(0);

    let result = ServiceSettings::resolve(&CliOverrides::default(), &toml);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_config_path_env_is_used() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "port = 6400\n");
    env::set_var(CONFIG_PATH_ENV, &path);

    assert_eq!(locate_config_file(None), Some(path.clone()));
    assert_eq!(load_or_default(None).port, Some(6400));

    clear_env();
}

#[test]
#[serial]
fn test_explicit_path_beats_env() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let env_path = write_config(&dir, "port = 6400\n");
    let explicit = dir.path().join("explicit.toml");
    std::fs::write(&explicit, "port = 6500\n").unwrap();
    env::set_var(CONFIG_PATH_ENV, &env_path);

    assert_eq!(load_or_default(Some(&explicit)).port, Some(6500));

    clear_env();
}

#[test]
#[serial]
fn test_missing_file_degrades_to_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.toml");

    assert!(matches!(load_toml_config(&missing), Err(Error::Io(_))));
    assert_eq!(load_or_default(Some(&missing)), TomlConfig::default());
}

#[test]
#[serial]
fn test_malformed_file_degrades_to_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "port = \"not a number\"\n");

    assert!(matches!(load_toml_config(&path), Err(Error::TomlParse(_))));
    assert_eq!(load_or_default(Some(&path)), TomlConfig::default());
}

#[test]
#[serial]
fn test_zero_session_limits_rejected() {
    clear_env();
    let mut toml = TomlConfig::default();
    toml.sessions.idle_timeout_secs = Some(0);
    let result = ServiceSettings::resolve(&CliOverrides::default(), &toml);
    assert!(matches!(result, Err(Error::Config(_))));

    let mut toml = TomlConfig::default();
    toml.sessions.max_sessions = Some(0);
    let result = ServiceSettings::resolve(&CliOverrides::default(), &toml);
    assert!(matches!(result, Err(Error::Config(_))));
}
