//! Store classification for the selection screen.
//!
//! Every store in the catalog becomes a [`StoreCandidate`] with a computed
//! distance and in-range flag. Candidates are recomputed whenever the device
//! position or the store set changes; they are never persisted.

use std::cmp::Ordering;

use serde::Serialize;

use beva_core::{GeoPosition, Store};

use crate::distance::haversine_distance_m;

/// A store decorated with proximity data for display and gating.
#[derive(Debug, Clone, Serialize)]
pub struct StoreCandidate {
    pub store: Store,
    /// Present only when both the device position and the store coordinates
    /// are known.
    pub distance_m: Option<f64>,
    /// `false` whenever either coordinate set is missing.
    pub in_range: bool,
    pub has_coordinates: bool,
}

/// Classify and order stores by proximity to `position`.
///
/// Stores with a known distance sort ascending; stores without coordinates
/// sort after all coordinate-bearing ones, keeping their input order. When
/// `position` is `None` (location unavailable or denied) no store gets a
/// distance and none is in range.
#[must_use]
pub fn classify(
    position: Option<GeoPosition>,
    stores: &[Store],
    default_radius_m: f64,
) -> Vec<StoreCandidate> {
    let mut candidates: Vec<StoreCandidate> = stores
        .iter()
        .map(|store| {
            let has_coordinates = store.coordinates().is_some();
            let distance_m = match (position, store.coordinates()) {
                (Some(here), Some((lat, lon))) => Some(haversine_distance_m(
                    here,
                    GeoPosition {
                        latitude: lat,
                        longitude: lon,
                    },
                )),
                _ => None,
            };
            let in_range = distance_m
                .is_some_and(|d| d <= store.effective_radius_m(default_radius_m));
            StoreCandidate {
                store: store.clone(),
                distance_m,
                in_range,
                has_coordinates,
            }
        })
        .collect();

    // Stable sort keeps input order among coordinate-less candidates.
    candidates.sort_by(|a, b| match (a.distance_m, b.distance_m) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn store(name: &str, lat: Option<f64>, lon: Option<f64>, radius: Option<f64>) -> Store {
        Store {
            id: Uuid::new_v4(),
            name: name.to_string(),
            city: "Santiago".to_string(),
            latitude: lat,
            longitude: lon,
            geofence_radius_m: radius,
            chain_id: Uuid::new_v4(),
            zone_id: Uuid::new_v4(),
        }
    }

    fn here() -> GeoPosition {
        GeoPosition {
            latitude: -33.4039,
            longitude: -70.5711,
        }
    }

    #[test]
    fn store_without_coordinates_never_in_range() {
        let stores = vec![store("Tottus Ñuñoa", None, None, None)];
        let candidates = classify(Some(here()), &stores, 100.0);
        assert!(!candidates[0].has_coordinates);
        assert!(candidates[0].distance_m.is_none());
        assert!(!candidates[0].in_range);
    }

    #[test]
    fn no_position_means_no_distance_for_anyone() {
        let stores = vec![store("Jumbo Kennedy", Some(-33.4039), Some(-70.5711), None)];
        let candidates = classify(None, &stores, 100.0);
        assert!(candidates[0].has_coordinates);
        assert!(candidates[0].distance_m.is_none());
        assert!(!candidates[0].in_range);
    }

    #[test]
    fn store_at_the_device_position_is_in_range() {
        let stores = vec![store("Jumbo Kennedy", Some(-33.4039), Some(-70.5711), None)];
        let candidates = classify(Some(here()), &stores, 100.0);
        assert!(candidates[0].in_range);
        assert!(candidates[0].distance_m.unwrap() < 1.0);
    }

    #[test]
    fn distance_beyond_radius_is_out_of_range() {
        // ~500 m east of the device.
        let stores = vec![store("Lider Maipú", Some(-33.4039), Some(-70.5657), None)];
        let candidates = classify(Some(here()), &stores, 100.0);
        assert!(!candidates[0].in_range);
        assert!(candidates[0].distance_m.unwrap() > 100.0);
    }

    #[test]
    fn per_store_radius_overrides_the_default() {
        let stores = vec![store(
            "Lider Maipú",
            Some(-33.4039),
            Some(-70.5657),
            Some(1000.0),
        )];
        let candidates = classify(Some(here()), &stores, 100.0);
        assert!(candidates[0].in_range);
    }

    #[test]
    fn candidates_sort_by_ascending_distance() {
        let stores = vec![
            store("Far", Some(-33.5101), Some(-70.7573), None),
            store("Near", Some(-33.4040), Some(-70.5712), None),
        ];
        let candidates = classify(Some(here()), &stores, 100.0);
        assert_eq!(candidates[0].store.name, "Near");
        assert_eq!(candidates[1].store.name, "Far");
        assert!(candidates[0].distance_m.unwrap() < candidates[1].distance_m.unwrap());
    }

    #[test]
    fn coordinate_less_stores_sort_last_in_input_order() {
        let stores = vec![
            store("NoCoords A", None, None, None),
            store("Near", Some(-33.4040), Some(-70.5712), None),
            store("NoCoords B", None, None, None),
        ];
        let candidates = classify(Some(here()), &stores, 100.0);
        assert_eq!(candidates[0].store.name, "Near");
        assert_eq!(candidates[1].store.name, "NoCoords A");
        assert_eq!(candidates[2].store.name, "NoCoords B");
    }
}
