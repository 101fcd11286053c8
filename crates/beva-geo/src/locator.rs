//! One-shot device location and the geofence selection gate.
//!
//! Location failures are never fatal here: a denied, absent, or timed-out
//! provider degrades to "no position known", the selection screen shows a
//! warning, and an admin can still enter a store via the override.

use std::time::Duration;

use thiserror::Error;

use beva_core::{ActingUser, GeoPosition, Store};

use crate::candidate::{classify, StoreCandidate};

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("no location provider is available on this device")]
    Unavailable,

    #[error("location permission denied")]
    Denied,

    #[error("location request timed out")]
    Timeout,
}

/// Seam over the platform geolocation API.
///
/// One-shot: callers request the current position once per entry into store
/// selection; there is no subscription.
pub trait LocationProvider {
    fn current_position(
        &self,
        timeout: Duration,
        high_accuracy: bool,
    ) -> impl std::future::Future<Output = Result<GeoPosition, LocationError>> + Send;
}

/// The handoff from store selection into the visit workflow.
#[derive(Debug, Clone)]
pub struct StoreSelection {
    pub store: Store,
    /// `true` when an admin bypassed the geofence gate.
    pub via_override: bool,
}

/// Classifies stores by proximity and gates which ones may start a visit.
#[derive(Debug, Clone)]
pub struct GeofenceLocator {
    timeout: Duration,
    high_accuracy: bool,
    default_radius_m: f64,
}

impl GeofenceLocator {
    #[must_use]
    pub fn new(timeout: Duration, high_accuracy: bool, default_radius_m: f64) -> Self {
        Self {
            timeout,
            high_accuracy,
            default_radius_m,
        }
    }

    /// Request the device position once.
    ///
    /// Both provider errors and the locator's own timeout budget degrade to
    /// `None`; the caller treats that as "no coordinates comparison
    /// possible" rather than an error.
    pub async fn locate<P: LocationProvider>(&self, provider: &P) -> Option<GeoPosition> {
        let result = tokio::time::timeout(
            self.timeout,
            provider.current_position(self.timeout, self.high_accuracy),
        )
        .await;

        match result {
            Ok(Ok(position)) => {
                tracing::debug!(
                    latitude = position.latitude,
                    longitude = position.longitude,
                    "device position acquired"
                );
                Some(position)
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "location request failed, continuing without position");
                None
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.timeout.as_secs(),
                    "location request exceeded its budget, continuing without position"
                );
                None
            }
        }
    }

    /// Classify and order `stores` against an optional device position.
    #[must_use]
    pub fn classify(&self, position: Option<GeoPosition>, stores: &[Store]) -> Vec<StoreCandidate> {
        classify(position, stores, self.default_radius_m)
    }

    /// Whether `user` may start a visit at this candidate.
    #[must_use]
    pub fn can_select(&self, candidate: &StoreCandidate, user: &ActingUser) -> bool {
        candidate.in_range || user.role.can_override_geofence()
    }

    /// Attempt to select a store for a visit.
    ///
    /// Returns `None` for an ineligible candidate — a no-op, not an error;
    /// the selection screen disables those entries.
    #[must_use]
    pub fn select(&self, candidate: &StoreCandidate, user: &ActingUser) -> Option<StoreSelection> {
        if !self.can_select(candidate, user) {
            tracing::debug!(
                store = %candidate.store.name,
                role = %user.role,
                "selection blocked: out of range and no override capability"
            );
            return None;
        }
        Some(StoreSelection {
            store: candidate.store.clone(),
            via_override: !candidate.in_range,
        })
    }
}

#[cfg(test)]
#[path = "locator_test.rs"]
mod locator_test;
