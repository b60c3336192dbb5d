use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_empty_config_dir_when_loaded_then_defaults_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert_eq!(config.backends.auth_url, "http://localhost:8081");
    assert_eq!(config.backends.default_url, "http://localhost:8081");
    assert_eq!(*config.logging.level, log::LevelFilter::Info);
}

#[test]
#[serial]
fn given_config_toml_when_loaded_then_file_values_apply() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
[backends]
orders_url = "http://orders.internal:9000"

[logging]
level = "debug"
colored = false
"#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.backends.orders_url, "http://orders.internal:9000");
    assert_eq!(config.backends.auth_url, "http://localhost:8081");
    assert_eq!(*config.logging.level, log::LevelFilter::Debug);
    assert!(!config.logging.colored);
}

#[test]
#[serial]
fn given_env_overrides_when_loaded_then_they_beat_file_and_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _orders = EnvGuard::set("INV_BACKEND_ORDERS_URL", "http://elsewhere:1234");
    let _level = EnvGuard::set("INV_LOG_LEVEL", "trace");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.backends.orders_url, "http://elsewhere:1234");
    assert_eq!(*config.logging.level, log::LevelFilter::Trace);
}

#[test]
#[serial]
fn given_backend_url_without_scheme_when_validated_then_error_names_field() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _bad = EnvGuard::set("INV_BACKEND_INVENTORY_URL", "inventory:8082");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("inventory_url"));
}

#[test]
#[serial]
fn given_no_storage_override_then_session_file_lives_in_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.session_path().unwrap();

    // Then
    assert_eq!(path, temp.path().join("session.json"));
}

#[test]
#[serial]
fn given_session_file_override_then_it_wins() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("INV_SESSION_FILE", "/tmp/elsewhere/session.json");

    // When
    let config = Config::load().unwrap();
    let path = config.session_path().unwrap();

    // Then
    assert_eq!(path, std::path::PathBuf::from("/tmp/elsewhere/session.json"));
}
