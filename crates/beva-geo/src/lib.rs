pub mod candidate;
pub mod distance;
pub mod locator;

pub use candidate::{classify, StoreCandidate};
pub use distance::haversine_distance_m;
pub use locator::{GeofenceLocator, LocationError, LocationProvider, StoreSelection};
