//! Store and product catalogs loaded from YAML reference files.
//!
//! A session receives one [`Catalog`] at start and never refreshes it
//! mid-session. Validation happens at load time so the workflow can trust
//! coordinate ranges and radius values downstream.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::entities::{Product, Store};
use crate::CatalogError;

#[derive(Debug, Deserialize)]
pub struct StoresFile {
    pub stores: Vec<Store>,
}

#[derive(Debug, Deserialize)]
pub struct ProductsFile {
    pub products: Vec<Product>,
}

/// The reference data handed to a visit session at start.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub stores: Vec<Store>,
    pub products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub fn new(stores: Vec<Store>, products: Vec<Product>) -> Self {
        Self { stores, products }
    }

    /// Products selectable in the product-selection stage.
    #[must_use]
    pub fn active_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.active).collect()
    }

    /// Looks a product up by id, active or not.
    #[must_use]
    pub fn product(&self, id: uuid::Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Load and validate the store catalog from a YAML file.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_stores(path: &Path) -> Result<StoresFile, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let stores_file: StoresFile =
        serde_yaml::from_str(&content).map_err(|e| CatalogError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;

    validate_stores(&stores_file)?;

    Ok(stores_file)
}

/// Load and validate the product catalog from a YAML file.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_products(path: &Path) -> Result<ProductsFile, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let products_file: ProductsFile =
        serde_yaml::from_str(&content).map_err(|e| CatalogError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;

    validate_products(&products_file)?;

    Ok(products_file)
}

fn validate_stores(stores_file: &StoresFile) -> Result<(), CatalogError> {
    let mut seen_names = HashSet::new();

    for store in &stores_file.stores {
        if store.name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "store name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(store.name.to_lowercase()) {
            return Err(CatalogError::Validation(format!(
                "duplicate store name: '{}'",
                store.name
            )));
        }

        // Coordinates come in pairs; a lone latitude is a data-entry error,
        // not a "no coordinates" store.
        if store.latitude.is_some() != store.longitude.is_some() {
            return Err(CatalogError::Validation(format!(
                "store '{}' has only one of latitude/longitude",
                store.name
            )));
        }

        if let Some(lat) = store.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(CatalogError::Validation(format!(
                    "store '{}' has latitude {lat} outside [-90, 90]",
                    store.name
                )));
            }
        }

        if let Some(lon) = store.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(CatalogError::Validation(format!(
                    "store '{}' has longitude {lon} outside [-180, 180]",
                    store.name
                )));
            }
        }

        if let Some(radius) = store.geofence_radius_m {
            if radius <= 0.0 {
                return Err(CatalogError::Validation(format!(
                    "store '{}' has non-positive geofence radius {radius}",
                    store.name
                )));
            }
        }
    }

    Ok(())
}

fn validate_products(products_file: &ProductsFile) -> Result<(), CatalogError> {
    let mut seen_names = HashSet::new();

    for product in &products_file.products {
        if product.name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "product name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(product.name.to_lowercase()) {
            return Err(CatalogError::Validation(format!(
                "duplicate product name: '{}'",
                product.name
            )));
        }
    }

    Ok(())
}
