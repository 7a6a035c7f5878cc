//! Integration tests

use envtag::{EnvError, Record};
use serial_test::serial;
use std::env;

#[derive(Debug, Default, Record)]
struct ServiceConfig {
    #[env("default=svc")]
    pub name: String,

    #[env("required")]
    pub port: i32,
}

#[derive(Debug, Default, Record)]
struct ConfigWithDefaults {
    #[env("default=127.0.0.1")]
    pub host: String,

    #[env("default=7")]
    pub workers: i64,

    #[env("default=true")]
    pub debug_mode: bool,
}

#[derive(Debug, Default, Record)]
struct ConfigWithCustomKeys {
    #[env("key=db_connection_string")]
    pub database_url: String,

    #[env("key=REDIS_URL")]
    pub cache_url: String,
}

#[derive(Debug, Default, Record)]
struct ConfigWithOptions {
    #[env("options=a,b,c")]
    pub mode: String,

    #[env("default=2 options=1,2,3")]
    pub level: i32,
}

#[derive(Debug, Default, Record)]
#[env(prefix = "APP_")]
struct ConfigWithPrefix {
    pub port: i32,

    #[env("key=db")]
    pub database_url: String,
}

#[derive(Debug, Default, Record)]
struct ConfigWithUnsupportedField {
    pub name: String,
    pub ratio: f64,
}

fn clear(keys: &[&str]) {
    for key in keys {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_service_config() {
    clear(&["NAME"]);
    env::set_var("PORT", "8080");

    let mut config = ServiceConfig::default();
    envtag::process(&mut config).unwrap();
    assert_eq!(config.name, "svc");
    assert_eq!(config.port, 8080);

    env::remove_var("PORT");
}

#[test]
#[serial]
fn test_missing_required_field_keeps_earlier_fields() {
    clear(&["NAME", "PORT"]);

    let mut config = ServiceConfig::default();
    let result = envtag::process(&mut config);
    match result {
        Err(EnvError::RequiredMissing { key }) => assert_eq!(key, "PORT"),
        other => panic!("Expected RequiredMissing, got {other:?}"),
    }
    assert_eq!(config.name, "svc");
}

#[test]
#[serial]
fn test_required_ignores_default() {
    #[derive(Debug, Default, Record)]
    struct TempConfig {
        #[env("required default=7")]
        pub port: i32,
    }

    clear(&["PORT"]);

    let result = TempConfig::from_env();
    assert!(matches!(result, Err(EnvError::RequiredMissing { .. })));
}

#[test]
#[serial]
fn test_config_with_defaults() {
    clear(&["HOST", "WORKERS", "DEBUG_MODE"]);

    let config = ConfigWithDefaults::from_env().unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.workers, 7);
    assert!(config.debug_mode);
}

#[test]
#[serial]
fn test_config_override_defaults() {
    env::set_var("HOST", "0.0.0.0");
    env::set_var("WORKERS", "20");
    env::set_var("DEBUG_MODE", "F");

    let config = ConfigWithDefaults::from_env().unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.workers, 20);
    assert!(!config.debug_mode);

    clear(&["HOST", "WORKERS", "DEBUG_MODE"]);
}

#[test]
#[serial]
fn test_empty_value_is_treated_as_absent() {
    env::set_var("WORKERS", "");
    clear(&["HOST", "DEBUG_MODE"]);

    let config = ConfigWithDefaults::from_env().unwrap();
    assert_eq!(config.workers, 7);

    env::remove_var("WORKERS");
}

#[test]
#[serial]
fn test_unannotated_field_is_reset_to_zero_value() {
    clear(&["PORT", "APP_PORT", "APP_DB"]);

    let mut config = ConfigWithPrefix {
        port: 9999,
        database_url: "stale".to_string(),
    };
    envtag::process(&mut config).unwrap();
    assert_eq!(config.port, 0);
    assert_eq!(config.database_url, "");
}

#[test]
#[serial]
fn test_custom_keys() {
    env::set_var("DB_CONNECTION_STRING", "postgres://localhost/db");
    env::set_var("REDIS_URL", "redis://localhost");

    let config = ConfigWithCustomKeys::from_env().unwrap();
    assert_eq!(config.database_url, "postgres://localhost/db");
    assert_eq!(config.cache_url, "redis://localhost");

    clear(&["DB_CONNECTION_STRING", "REDIS_URL"]);
}

#[test]
#[serial]
fn test_struct_prefix() {
    env::set_var("APP_PORT", "3000");
    env::set_var("APP_DB", "postgres://localhost/app");

    let config = ConfigWithPrefix::from_env().unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.database_url, "postgres://localhost/app");

    clear(&["APP_PORT", "APP_DB"]);
}

#[test]
#[serial]
fn test_explicit_prefix_overrides_struct_prefix() {
    env::set_var("SVC_PORT", "4000");
    env::set_var("APP_PORT", "3000");
    env::remove_var("SVC_DB");

    let mut config = ConfigWithPrefix::default();
    envtag::process_with_prefix(&mut config, "svc_").unwrap();
    assert_eq!(config.port, 4000);

    clear(&["SVC_PORT", "APP_PORT"]);
}

#[test]
#[serial]
fn test_option_not_allowed() {
    env::set_var("MODE", "d");
    env::remove_var("LEVEL");

    let mut config = ConfigWithOptions::default();
    let err = envtag::process(&mut config).unwrap_err();
    assert_eq!(err.to_string(), r#"MODE="d" not in allowed options: [a b c]"#);

    env::remove_var("MODE");
}

#[test]
#[serial]
fn test_option_allowed() {
    env::set_var("MODE", "b");
    env::set_var("LEVEL", "3");

    let config = ConfigWithOptions::from_env().unwrap();
    assert_eq!(config.mode, "b");
    assert_eq!(config.level, 3);

    clear(&["MODE", "LEVEL"]);
}

#[test]
#[serial]
fn test_parse_error() {
    env::set_var("WORKERS", "not_a_number");

    let result = ConfigWithDefaults::from_env();
    match result {
        Err(err @ EnvError::InvalidValue { .. }) => assert_eq!(
            err.to_string(),
            r#"WORKERS: could not convert value "not_a_number" into i64 type"#
        ),
        other => panic!("Expected InvalidValue, got {other:?}"),
    }

    env::remove_var("WORKERS");
}

#[test]
#[serial]
fn test_unsupported_field_type() {
    env::set_var("NAME", "svc");
    env::remove_var("RATIO");

    let mut config = ConfigWithUnsupportedField::default();
    match envtag::process(&mut config) {
        Err(EnvError::UnsupportedType { type_name }) => assert_eq!(type_name, "f64"),
        other => panic!("Expected UnsupportedType, got {other:?}"),
    }
    assert_eq!(config.name, "svc");

    env::remove_var("NAME");
}

#[test]
#[serial]
#[should_panic(expected = "PORT required")]
fn test_must_process_panics() {
    clear(&["NAME", "PORT"]);

    let mut config = ServiceConfig::default();
    envtag::must_process(&mut config);
}

#[test]
#[serial]
fn test_must_process_with_prefix() {
    env::set_var("EDGE_PORT", "443");
    env::remove_var("EDGE_NAME");

    let mut config = ServiceConfig::default();
    envtag::must_process_with_prefix(&mut config, "EDGE_");
    assert_eq!(config.port, 443);

    env::remove_var("EDGE_PORT");
}

#[test]
#[serial]
fn test_raw_identifier_field() {
    #[derive(Debug, Default, Record)]
    struct TempConfig {
        #[env("default=plain")]
        pub r#type: String,
    }

    env::set_var("TYPE", "json");

    let config = TempConfig::from_env().unwrap();
    assert_eq!(config.r#type, "json");

    env::remove_var("TYPE");
}

#[test]
fn test_env_with_map_lookup() {
    use std::collections::HashMap;

    let vars = HashMap::from([
        ("MODE".to_string(), "c".to_string()),
        ("LEVEL".to_string(), "1".to_string()),
    ]);
    let env = envtag::Env::with_lookup(vars);

    let mut config = ConfigWithOptions::default();
    env.process(&mut config).unwrap();
    assert_eq!(config.mode, "c");
    assert_eq!(config.level, 1);
}

#[test]
fn test_derived_field_table() {
    let fields = ServiceConfig::FIELDS;
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name, "name");
    assert_eq!(fields[0].annotation, "default=svc");
    assert_eq!(
        fields[1].ty,
        envtag::DeclaredType::Known(envtag::Kind::Int(envtag::IntWidth::I32))
    );
    assert_eq!(ConfigWithPrefix::PREFIX, "APP_");
}
