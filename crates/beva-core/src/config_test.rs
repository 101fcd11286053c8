use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_accepts_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_rejects_unknown_value() {
    let err = parse_environment("staging").unwrap_err();
    assert!(err.to_string().contains("staging"));
}

#[test]
fn defaults_apply_when_env_is_empty() {
    let map = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).unwrap();

    assert_eq!(config.env, Environment::Development);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.location_timeout_secs, 10);
    assert!((config.default_geofence_radius_m - 100.0).abs() < f64::EPSILON);
    assert!(config.high_accuracy_location);
    assert!(config.stores_path.ends_with("stores.yaml"));
    assert!(config.products_path.ends_with("products.yaml"));
}

#[test]
fn explicit_values_override_defaults() {
    let mut map = HashMap::new();
    map.insert("BEVA_ENV", "production");
    map.insert("BEVA_LOG_LEVEL", "debug");
    map.insert("BEVA_LOCATION_TIMEOUT_SECS", "5");
    map.insert("BEVA_DEFAULT_GEOFENCE_RADIUS_M", "250.5");
    map.insert("BEVA_HIGH_ACCURACY_LOCATION", "0");

    let config = build_app_config(lookup_from_map(&map)).unwrap();

    assert_eq!(config.env, Environment::Production);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.location_timeout_secs, 5);
    assert!((config.default_geofence_radius_m - 250.5).abs() < f64::EPSILON);
    assert!(!config.high_accuracy_location);
}

#[test]
fn malformed_timeout_is_rejected() {
    let mut map = HashMap::new();
    map.insert("BEVA_LOCATION_TIMEOUT_SECS", "soon");

    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    assert!(err.to_string().contains("BEVA_LOCATION_TIMEOUT_SECS"));
}

#[test]
fn malformed_bool_is_rejected() {
    let mut map = HashMap::new();
    map.insert("BEVA_HIGH_ACCURACY_LOCATION", "yes");

    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    assert!(err.to_string().contains("expected true/false/1/0"));
}

#[test]
fn non_positive_radius_is_rejected() {
    let mut map = HashMap::new();
    map.insert("BEVA_DEFAULT_GEOFENCE_RADIUS_M", "-10");

    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    assert!(err.to_string().contains("radius must be positive"));
}

#[test]
fn environment_display_labels() {
    assert_eq!(Environment::Development.to_string(), "development");
    assert_eq!(Environment::Test.to_string(), "test");
    assert_eq!(Environment::Production.to_string(), "production");
}
