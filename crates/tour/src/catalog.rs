//! Tour catalog loading.
//!
//! The catalog is the read-only list of tours a client can start. It is read
//! once; tours are immutable afterwards.

use crate::error::{Result, TourError};
use crate::model::Tour;
use std::collections::HashSet;
use std::path::Path;

/// Tours shipped with the app.
const BUILTIN_CATALOG: &str = include_str!("../data/tours.json");

/// Source of tour definitions, e.g. a catalog service.
pub trait TourSource {
    /// Returns every tour the source knows about, in catalog order.
    fn list_tours(&self) -> Result<Vec<Tour>>;
}

/// In-memory tour catalog.
#[derive(Debug, Clone, Default)]
pub struct TourCatalog {
    tours: Vec<Tour>,
}

impl TourCatalog {
    /// Builds a catalog, rejecting duplicate tour ids.
    pub fn new(tours: Vec<Tour>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tours.len());
        for tour in &tours {
            if !seen.insert(tour.id.as_str()) {
                return Err(TourError::invalid_tour(&tour.id, "duplicate tour id in catalog"));
            }
        }
        Ok(Self { tours })
    }

    /// Parses a catalog from the JSON array served by the catalog endpoint.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tours: Vec<Tour> = serde_json::from_str(json)?;
        Self::new(tours)
    }

    /// Reads a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TourError::Catalog(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_json_str(&content).map_err(|e| match e {
            TourError::Json(e) => {
                TourError::Catalog(format!("Failed to parse catalog {}: {}", path.display(), e))
            }
            other => other,
        })?;

        tracing::debug!(path = %path.display(), tours = catalog.len(), "Loaded tour catalog");
        Ok(catalog)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Looks up a tour by id.
    pub fn find(&self, id: &str) -> Option<&Tour> {
        self.tours.iter().find(|t| t.id == id)
    }

    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}

impl TourSource for TourCatalog {
    fn list_tours(&self) -> Result<Vec<Tour>> {
        Ok(self.tours.clone())
    }
}
