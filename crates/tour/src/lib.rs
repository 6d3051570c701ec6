//! Tour catalog and proximity engine for ArtWalk.
//!
//! A [`TourSession`] holds the tour the user is walking, their last known
//! position and the artwork currently "triggered" by being within range.
//! Position updates come in from a location provider; the session answers
//! each one with at most one [`SessionEvent`] for the render layer.
//!
//! # Example
//!
//! ```
//! use artwalk_tour::{SessionEvent, TourCatalog, TourSession};
//!
//! let catalog = TourCatalog::builtin().unwrap();
//! let mut session = TourSession::with_defaults(catalog);
//! session.select_tour("mural-mile").unwrap();
//!
//! // Standing at "The Phoenix's Ascent"
//! let event = session.update_position(37.7749, -122.4194).unwrap();
//! assert!(matches!(
//!     event,
//!     Some(SessionEvent::ArtworkTriggered { is_first_artwork: true, open_detail: true, .. })
//! ));
//!
//! // Same spot again: no new event
//! assert!(session.update_position(37.7749, -122.4194).unwrap().is_none());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod proximity;
pub mod session;

pub use catalog::{TourCatalog, TourSource};
pub use config::{Config, ConfigSchema, SessionConfig};
pub use error::{Result, TourError, TourErrorCode};
pub use event::{EventSink, SessionEvent, TracingSink};
pub use model::{Artwork, Position, Tour};
pub use session::{SessionState, TourSession};
