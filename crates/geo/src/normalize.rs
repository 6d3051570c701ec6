//! Screen-space normalization.
//!
//! Maps a coordinate component onto a percentage of the display area using the
//! bounding box of a tour's artworks. The result says nothing about geographic
//! scale and must never feed a distance or trigger decision.

use crate::Coordinate;
use serde::{Deserialize, Serialize};

/// Lower bound of the display range, in percent.
pub const DISPLAY_MIN: f64 = 10.0;

/// Upper bound of the display range, in percent.
pub const DISPLAY_MAX: f64 = 90.0;

/// Value returned when the set has no spread.
pub const DISPLAY_MID: f64 = 50.0;

/// Linearly maps `value` into `[10, 90]` using the min and max of `set`.
///
/// Returns exactly `50` when the set is empty or all of its values are equal.
/// Values outside the set's range are clamped to the display bounds.
///
/// # Example
/// ```
/// use artwalk_geo::normalize;
///
/// let lats = [37.7749, 37.7755, 37.7765];
/// assert_eq!(normalize(37.7749, &lats), 10.0);
/// assert_eq!(normalize(37.7765, &lats), 90.0);
/// assert_eq!(normalize(37.7749, &[]), 50.0);
/// ```
pub fn normalize(value: f64, set: &[f64]) -> f64 {
    let Some((min, max)) = bounds(set) else {
        return DISPLAY_MID;
    };
    if max == min {
        return DISPLAY_MID;
    }

    let scaled = (value - min) / (max - min) * (DISPLAY_MAX - DISPLAY_MIN) + DISPLAY_MIN;
    if scaled.is_nan() {
        return DISPLAY_MID;
    }
    scaled.clamp(DISPLAY_MIN, DISPLAY_MAX)
}

/// Min and max of the finite values in `set`.
fn bounds(set: &[f64]) -> Option<(f64, f64)> {
    set.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

/// Placement of a point on the display, in percent of width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayPoint {
    /// Horizontal offset, derived from longitude
    pub left: f64,
    /// Vertical offset, derived from latitude
    pub top: f64,
}

impl DisplayPoint {
    /// Places `point` relative to the bounding box of `reference`.
    pub fn place(point: &Coordinate, reference: &[Coordinate]) -> Self {
        let lats: Vec<f64> = reference.iter().map(|c| c.latitude).collect();
        let lons: Vec<f64> = reference.iter().map(|c| c.longitude).collect();
        Self {
            left: normalize(point.longitude, &lons),
            top: normalize(point.latitude, &lats),
        }
    }

    /// The center of the display.
    pub fn center() -> Self {
        Self { left: DISPLAY_MID, top: DISPLAY_MID }
    }
}
