//! Tour, artwork and position records.
//!
//! Field names on the wire follow the catalog endpoint's JSON
//! (`lat`, `lon`, `story`), so a catalog response deserializes directly.

use crate::error::{Result, TourError};
use artwalk_geo::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Prefix of absolute asset paths in catalog data.
const ASSET_PREFIX: &str = "/assets/";

/// A geotagged piece of art along a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    /// Unique within its tour
    pub id: String,
    pub title: String,
    pub artist: String,
    pub year: i32,
    /// Image URI or path
    pub image: String,
    /// Latitude in WGS-84 degrees
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in WGS-84 degrees
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// Narrative text shown in the detail view
    #[serde(rename = "story")]
    pub narrative: String,
}

impl Artwork {
    /// Location of the artwork.
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Image reference as the static frontend serves it.
    ///
    /// Absolute `/assets/...` paths become relative `assets/...` paths; any
    /// other reference is returned unchanged.
    pub fn image_src(&self) -> &str {
        if self.image.starts_with(ASSET_PREFIX) {
            &self.image[1..]
        } else {
            &self.image
        }
    }

    /// Title with artist and year, e.g. `Echoes of the Bay (John Smith, 2019)`.
    pub fn caption(&self) -> String {
        format!("{} ({}, {})", self.title, self.artist, self.year)
    }
}

/// An ordered walk past a set of artworks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub artworks: Vec<Artwork>,
}

impl Tour {
    /// Checks that the tour can be walked.
    ///
    /// Fails with [`TourError::InvalidTour`] on an empty tour id, an empty or
    /// duplicate artwork id, or an artwork outside WGS-84 bounds. A tour with
    /// no artworks is valid.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(TourError::invalid_tour(&self.id, "tour id is empty"));
        }

        let mut seen = HashSet::with_capacity(self.artworks.len());
        for artwork in &self.artworks {
            if artwork.id.trim().is_empty() {
                return Err(TourError::invalid_tour(&self.id, "artwork with empty id"));
            }
            if !seen.insert(artwork.id.as_str()) {
                return Err(TourError::invalid_tour(
                    &self.id,
                    format!("duplicate artwork id '{}'", artwork.id),
                ));
            }
            if let Err(e) = artwork.coordinate().validate() {
                return Err(TourError::invalid_tour(
                    &self.id,
                    format!("artwork '{}': {}", artwork.id, e),
                ));
            }
        }

        Ok(())
    }

    /// Looks up an artwork by id.
    pub fn artwork(&self, id: &str) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    /// Position of an artwork in tour order.
    pub fn artwork_index(&self, id: &str) -> Option<usize> {
        self.artworks.iter().position(|a| a.id == id)
    }

    /// Locations of all artworks, in tour order.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.artworks.iter().map(Artwork::coordinate).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }
}

/// The user's last known position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub coordinate: Coordinate,
    /// When the position was last written
    pub updated_at: DateTime<Utc>,
}

impl Position {
    pub fn new(coordinate: Coordinate, updated_at: DateTime<Utc>) -> Self {
        Self { coordinate, updated_at }
    }

    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn artwork(id: &str, latitude: f64, longitude: f64) -> Artwork {
        Artwork {
            id: id.to_string(),
            title: format!("Title {id}"),
            artist: "Test Artist".to_string(),
            year: 2024,
            image: format!("/assets/{id}.jpg"),
            latitude,
            longitude,
            narrative: format!("Story of {id}"),
        }
    }

    pub fn tour(id: &str, artworks: Vec<Artwork>) -> Tour {
        Tour {
            id: id.to_string(),
            title: format!("Tour {id}"),
            description: "A test walk".to_string(),
            artworks,
        }
    }
}
