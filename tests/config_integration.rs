//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use folio::config::AppConfig;
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("FOLIO_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("FOLIO_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_sets_particle_seed() {
    std::env::set_var("FOLIO_PARTICLES__SEED", "42");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.particles.seed, Some(42));
    std::env::remove_var("FOLIO_PARTICLES__SEED");
}

#[test]
#[serial]
fn test_default_file_loads() {
    std::env::remove_var("FOLIO_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    let field = config.particles.to_field_config();
    assert_eq!(field.population_floor, 50);
    assert_eq!(field.connection_distance, 100.0);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[window]\ntitle = \"Default\"\nwidth = 800\n",
    )
    .unwrap();
    fs::write(dir.path().join("user.toml"), "[window]\ntitle = \"Mine\"\n").unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.window.title, "Mine");
    assert_eq!(config.window.width, 800);
    assert_eq!(config.window.height, 720);
}

#[test]
#[serial]
fn test_missing_dir_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(dir.path().join("nope")).unwrap();
    assert_eq!(config.window.title, "Folio");
    assert_eq!(config.particles.frame_rate, 60.0);
}

#[test]
#[serial]
fn test_bad_value_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[particles]\ninitial_count = \"many\"\n",
    )
    .unwrap();

    let err = AppConfig::load_from(dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
