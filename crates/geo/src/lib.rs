//! Geodesy utilities for ArtWalk.
//!
//! This crate provides:
//! - Haversine great-circle distance in meters
//! - Normalization of coordinates into a bounded display range
//! - WASM bindings for the browser client
//!
//! # Example
//!
//! ```
//! use artwalk_geo::{haversine_distance_meters, Coordinate};
//!
//! let phoenix = Coordinate::new(37.7749, -122.4194);
//! let cybernetic = Coordinate::new(37.7765, -122.4175);
//!
//! let meters = haversine_distance_meters(&phoenix, &cybernetic);
//! assert!((meters - 244.0).abs() < 5.0);
//! ```

mod error;
mod haversine;
pub mod normalize;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{GeoError, GeoErrorCode, Result};
pub use haversine::{
    EARTH_RADIUS_KM, EARTH_RADIUS_M, distance, haversine_distance, haversine_distance_meters,
};
pub use normalize::{DISPLAY_MAX, DISPLAY_MID, DISPLAY_MIN, DisplayPoint, normalize};

/// A geographic coordinate with latitude and longitude (WGS-84 degrees).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// No range checks happen here; use [`Coordinate::validate`] on values
    /// that come from outside the process.
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if both components are finite and within WGS-84 bounds.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns the coordinate unchanged if it is valid.
    pub fn validate(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "({}, {}) is not a finite WGS-84 latitude/longitude pair",
                self.latitude, self.longitude
            )))
        }
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
