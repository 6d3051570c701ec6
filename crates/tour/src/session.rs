//! Tour session state machine.
//!
//! A session starts with no tour. Selecting a tour makes it active for the
//! rest of the session; position updates then move the session between
//! "nothing triggered" and "triggered on one artwork" using the great-circle
//! distance to the nearest artwork.
//!
//! ```text
//! NoTour --select_tour--> TourActive --update_position (< radius)--> Triggered(a)
//!                           ^                                          |
//!                           +--- update_position (none in radius) -----+
//!                           +--- clear_trigger ------------------------+
//! ```
//!
//! Every operation validates first and mutates second: an `Err` leaves the
//! session untouched. All mutation goes through `&mut self`, so updates from
//! the location provider and UI calls are serialized by whoever owns the
//! session.

use crate::catalog::TourCatalog;
use crate::config::SessionConfig;
use crate::error::{Result, TourError};
use crate::event::SessionEvent;
use crate::model::{Artwork, Position, Tour};
use crate::proximity::{Nearest, nearest_artwork};
use artwalk_geo::{Coordinate, DisplayPoint};
use chrono::{DateTime, Utc};

/// Borrowed view of where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState<'a> {
    /// No tour selected yet
    NoTour,
    /// Tour running, nothing within range
    TourActive { tour: &'a Tour },
    /// Tour running and one artwork is triggered
    Triggered { tour: &'a Tour, artwork: &'a Artwork },
}

/// Holds the active tour, the user's position and the triggered artwork.
#[derive(Debug, Clone)]
pub struct TourSession {
    catalog: TourCatalog,
    config: SessionConfig,
    active_tour: Option<Tour>,
    user_position: Position,
    /// Index into `active_tour.artworks`
    triggered: Option<usize>,
}

impl TourSession {
    /// Creates a session over `catalog` with no tour selected.
    ///
    /// The user position starts at the configured fallback location.
    pub fn new(catalog: TourCatalog, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(catalog, config))
    }

    /// Creates a session with the default 30 m trigger radius.
    pub fn with_defaults(catalog: TourCatalog) -> Self {
        Self::from_parts(catalog, SessionConfig::default())
    }

    fn from_parts(catalog: TourCatalog, config: SessionConfig) -> Self {
        let user_position = Position::new(config.fallback_position(), Utc::now());
        Self {
            catalog,
            config,
            active_tour: None,
            user_position,
            triggered: None,
        }
    }

    /// Starts the tour with id `tour_id`.
    ///
    /// Only valid while no tour is active. Fails with
    /// [`TourError::InvalidTour`] if the id is not in the catalog or the tour
    /// does not validate.
    pub fn select_tour(&mut self, tour_id: &str) -> Result<SessionEvent> {
        if let Some(active) = &self.active_tour {
            tracing::warn!(active = %active.id, requested = %tour_id, "Tour already active");
            return Err(TourError::TourAlreadyActive(active.id.clone()));
        }

        let tour = self.catalog.find(tour_id).ok_or_else(|| {
            tracing::warn!(tour_id = %tour_id, "Tour not found");
            TourError::invalid_tour(tour_id, "not in catalog")
        })?;
        tour.validate()?;

        let event = SessionEvent::TourSelected {
            tour_id: tour.id.clone(),
            title: tour.title.clone(),
            artwork_count: tour.artworks.len(),
        };
        self.active_tour = Some(tour.clone());
        self.triggered = None;

        tracing::debug!(tour_id = %tour_id, artworks = self.artwork_count(), "Tour started");
        Ok(event)
    }

    /// Records a new user position and runs the proximity check.
    pub fn update_position(&mut self, latitude: f64, longitude: f64) -> Result<Option<SessionEvent>> {
        self.update_position_at(latitude, longitude, Utc::now())
    }

    /// Like [`update_position`](Self::update_position) with an explicit fix time.
    ///
    /// The position is recorded even when no tour is active; the proximity
    /// check only runs once one is.
    pub fn update_position_at(
        &mut self,
        latitude: f64,
        longitude: f64,
        at: DateTime<Utc>,
    ) -> Result<Option<SessionEvent>> {
        let coordinate = Coordinate::new(latitude, longitude);
        if !coordinate.is_valid() {
            tracing::warn!(latitude, longitude, "Rejected malformed position");
            return Err(TourError::MalformedPosition { latitude, longitude });
        }

        self.user_position = Position::new(coordinate, at);
        Ok(self.check_proximity())
    }

    /// Clears the triggered artwork on user request.
    ///
    /// Returns `None` when nothing was triggered.
    pub fn clear_trigger(&mut self) -> Option<SessionEvent> {
        let index = self.triggered.take()?;
        let artwork_id = self.active_tour.as_ref()?.artworks[index].id.clone();

        tracing::debug!(artwork_id = %artwork_id, "Trigger cleared by user");
        Some(SessionEvent::TriggerCleared { artwork_id })
    }

    /// Triggers an artwork on user request, e.g. a tap on its map pin.
    ///
    /// Always emits, even if the artwork is already triggered, and always
    /// asks for the full detail view.
    pub fn trigger_artwork(&mut self, artwork_id: &str) -> Result<SessionEvent> {
        let tour = self.active_tour.as_ref().ok_or(TourError::NoActiveTour)?;
        let index = tour.artwork_index(artwork_id).ok_or_else(|| TourError::UnknownArtwork {
            tour_id: tour.id.clone(),
            artwork_id: artwork_id.to_string(),
        })?;

        self.triggered = Some(index);
        tracing::debug!(artwork_id = %artwork_id, "Artwork opened by user");
        Ok(SessionEvent::ArtworkTriggered {
            artwork: tour.artworks[index].clone(),
            is_first_artwork: index == 0,
            open_detail: true,
        })
    }

    fn check_proximity(&mut self) -> Option<SessionEvent> {
        let tour = self.active_tour.as_ref()?;
        let position = self.user_position.coordinate;
        let nearest = nearest_artwork(&position, &tour.artworks);

        if let Some(Nearest { index, distance_m }) = nearest {
            tracing::debug!(
                latitude = position.latitude,
                longitude = position.longitude,
                nearest = %tour.artworks[index].id,
                distance_m,
                "Position updated"
            );
        }

        match nearest {
            Some(n) if n.within(self.config.trigger_radius_m) => {
                let closest = &tour.artworks[n.index];
                let already = self
                    .triggered
                    .is_some_and(|current| tour.artworks[current].id == closest.id);
                if already {
                    return None;
                }

                self.triggered = Some(n.index);
                tracing::debug!(
                    artwork_id = %closest.id,
                    distance_m = n.distance_m,
                    "Artwork in range"
                );
                Some(SessionEvent::ArtworkTriggered {
                    artwork: closest.clone(),
                    is_first_artwork: n.index == 0,
                    open_detail: n.index == 0,
                })
            }
            _ => {
                let index = self.triggered.take()?;
                let artwork_id = tour.artworks[index].id.clone();
                tracing::debug!(artwork_id = %artwork_id, "Left artwork range");
                Some(SessionEvent::TriggerCleared { artwork_id })
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState<'_> {
        match (&self.active_tour, self.triggered) {
            (None, _) => SessionState::NoTour,
            (Some(tour), None) => SessionState::TourActive { tour },
            (Some(tour), Some(index)) => SessionState::Triggered {
                tour,
                artwork: &tour.artworks[index],
            },
        }
    }

    pub fn active_tour(&self) -> Option<&Tour> {
        self.active_tour.as_ref()
    }

    pub fn user_position(&self) -> &Position {
        &self.user_position
    }

    pub fn triggered_artwork(&self) -> Option<&Artwork> {
        let tour = self.active_tour.as_ref()?;
        self.triggered.map(|index| &tour.artworks[index])
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TourCatalog {
        &self.catalog
    }

    /// Ends the session, handing the catalog back for the next one.
    pub fn into_catalog(self) -> TourCatalog {
        self.catalog
    }

    /// Nearest artwork of the active tour and its distance in meters.
    pub fn nearest(&self) -> Option<(&Artwork, f64)> {
        let tour = self.active_tour.as_ref()?;
        let n = nearest_artwork(&self.user_position.coordinate, &tour.artworks)?;
        Some((&tour.artworks[n.index], n.distance_m))
    }

    /// Where the map should center: the first artwork, else the user.
    pub fn map_center(&self) -> Coordinate {
        self.active_tour
            .as_ref()
            .and_then(|t| t.artworks.first())
            .map(Artwork::coordinate)
            .unwrap_or(self.user_position.coordinate)
    }

    /// Display placement of the user indicator over the tour's bounding box.
    pub fn user_display_point(&self) -> DisplayPoint {
        match &self.active_tour {
            Some(tour) => DisplayPoint::place(&self.user_position.coordinate, &tour.coordinates()),
            None => DisplayPoint::center(),
        }
    }

    /// Display placement of every pin of the active tour, in tour order.
    pub fn artwork_display_points(&self) -> Vec<(&Artwork, DisplayPoint)> {
        let Some(tour) = &self.active_tour else {
            return Vec::new();
        };
        let reference = tour.coordinates();
        tour.artworks
            .iter()
            .map(|a| (a, DisplayPoint::place(&a.coordinate(), &reference)))
            .collect()
    }

    fn artwork_count(&self) -> usize {
        self.active_tour.as_ref().map_or(0, |t| t.artworks.len())
    }
}
