//! WASM bindings for the geo crate.
//!
//! These bindings let the browser client compute distances and pin placement
//! with the same code the proximity engine uses.

use crate::{Coordinate, DisplayPoint};
use wasm_bindgen::prelude::*;

/// Great-circle distance between two points, in meters.
#[wasm_bindgen]
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    crate::distance(lat1, lon1, lat2, lon2)
}

/// Maps `value` into the `[10, 90]` display range of `set`.
#[wasm_bindgen]
pub fn normalize(value: f64, set: &[f64]) -> f64 {
    crate::normalize(value, set)
}

/// Places a point relative to a flat `[lat, lon, lat, lon, ...]` reference list.
///
/// # Returns
/// A two-element array `[left, top]` in percent.
#[wasm_bindgen]
pub fn display_point(lat: f64, lon: f64, reference: &[f64]) -> Result<js_sys::Float64Array, JsValue> {
    if reference.len() % 2 != 0 {
        return Err(JsValue::from_str("reference must hold latitude/longitude pairs"));
    }
    let reference: Vec<Coordinate> = reference
        .chunks_exact(2)
        .map(|pair| Coordinate::new(pair[0], pair[1]))
        .collect();

    let point = DisplayPoint::place(&Coordinate::new(lat, lon), &reference);
    Ok(js_sys::Float64Array::from(&[point.left, point.top][..]))
}
