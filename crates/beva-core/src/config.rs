use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false/1/0, got '{other}'"),
            }),
        }
    };

    let env = parse_environment(&or_default("BEVA_ENV", "development"))?;
    let log_level = or_default("BEVA_LOG_LEVEL", "info");
    let stores_path = PathBuf::from(or_default("BEVA_STORES_PATH", "./config/stores.yaml"));
    let products_path = PathBuf::from(or_default("BEVA_PRODUCTS_PATH", "./config/products.yaml"));

    let location_timeout_secs = parse_u64("BEVA_LOCATION_TIMEOUT_SECS", "10")?;
    let default_geofence_radius_m = parse_f64("BEVA_DEFAULT_GEOFENCE_RADIUS_M", "100")?;
    let high_accuracy_location = parse_bool("BEVA_HIGH_ACCURACY_LOCATION", "true")?;

    if default_geofence_radius_m <= 0.0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "BEVA_DEFAULT_GEOFENCE_RADIUS_M".to_string(),
            reason: format!("radius must be positive, got {default_geofence_radius_m}"),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        stores_path,
        products_path,
        location_timeout_secs,
        default_geofence_radius_m,
        high_accuracy_location,
    })
}

fn parse_environment(raw: &str) -> Result<Environment, ConfigError> {
    match raw {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BEVA_ENV".to_string(),
            reason: format!("expected development/test/production, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
