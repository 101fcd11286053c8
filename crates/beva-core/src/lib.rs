pub mod app_config;
pub mod catalog;
pub mod config;
pub mod entities;
pub mod vocab;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_products, load_stores, Catalog, ProductsFile, StoresFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use entities::{ActingUser, GeoPosition, Product, Store};
pub use vocab::{
    Appearance, DisplayCondition, IncidentType, PackagingCondition, Promotion, Role, Severity,
    ShelfLocation,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
