//! Nearest-artwork search.

use crate::model::Artwork;
use artwalk_geo::{Coordinate, haversine_distance_meters};

/// Closest artwork to a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    /// Index into the tour's artworks
    pub index: usize,
    /// Great-circle distance in meters
    pub distance_m: f64,
}

impl Nearest {
    /// True if the artwork is strictly inside `radius_m`.
    #[inline]
    pub fn within(&self, radius_m: f64) -> bool {
        self.distance_m < radius_m
    }
}

/// Finds the artwork closest to `position`.
///
/// Linear scan with a strict `<` comparison, so among equally distant
/// artworks the first in tour order wins. Returns `None` for an empty slice.
pub fn nearest_artwork(position: &Coordinate, artworks: &[Artwork]) -> Option<Nearest> {
    let mut best: Option<Nearest> = None;

    for (index, artwork) in artworks.iter().enumerate() {
        let distance_m = haversine_distance_meters(position, &artwork.coordinate());
        let is_better = match &best {
            Some(prev) => distance_m < prev.distance_m,
            None => true,
        };
        if is_better {
            best = Some(Nearest { index, distance_m });
        }
    }

    best
}

/// Distance from `position` to every artwork, in tour order.
pub fn distances(position: &Coordinate, artworks: &[Artwork]) -> Vec<(String, f64)> {
    artworks
        .iter()
        .map(|a| (a.id.clone(), haversine_distance_meters(position, &a.coordinate())))
        .collect()
}
