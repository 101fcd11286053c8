//! Reference entities consumed read-only by the visit core.
//!
//! Stores and products come from the catalog files (or the upstream admin
//! CRUD, which is outside this workspace); the acting user comes from the
//! session context. None of these are mutated here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::vocab::Role;

/// Geofence radius applied when a store does not carry its own.
pub const DEFAULT_GEOFENCE_RADIUS_M: f64 = 100.0;

/// A retail store a promoter can visit.
///
/// Coordinates are optional: stores are registered by office staff and some
/// never get geocoded. A store without both coordinates can never be
/// classified as in range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Allowed visit radius in meters. `None` means the default applies.
    pub geofence_radius_m: Option<f64>,
    pub chain_id: Uuid,
    pub zone_id: Uuid,
}

impl Store {
    /// Returns `(latitude, longitude)` only when both are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// The geofence radius to enforce, falling back to `default_m`.
    #[must_use]
    pub fn effective_radius_m(&self, default_m: f64) -> f64 {
        self.geofence_radius_m.unwrap_or(default_m)
    }
}

/// A berry product evaluated during a visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Icon name resolved by the presentation layer's static mapping table.
    pub icon: String,
    /// Accent color used on the product card, e.g. `"#e0218a"`.
    pub color: String,
    /// Inactive products stay in reports but are not selectable for new visits.
    pub active: bool,
}

/// The authenticated user driving the current session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActingUser {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

/// A device position in decimal degrees.
///
/// Ephemeral: obtained once per entry into store selection and discarded
/// afterwards, never persisted or continuously tracked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}
