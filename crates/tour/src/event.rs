//! Session events and render sinks.
//!
//! Events are the only way a [`TourSession`](crate::TourSession) talks to the
//! rendering side. A sink receives them one at a time, in order.

use crate::model::Artwork;
use serde::Serialize;

/// A state change the UI should render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A tour was selected and is now active
    TourSelected {
        tour_id: String,
        title: String,
        artwork_count: usize,
    },

    /// An artwork became the triggered one
    ArtworkTriggered {
        artwork: Artwork,
        /// True for the first artwork in tour order
        is_first_artwork: bool,
        /// Open the full detail view instead of the summary tray. Set for the
        /// first artwork and for every pin tap.
        open_detail: bool,
    },

    /// The previously triggered artwork is no longer active
    TriggerCleared { artwork_id: String },
}

impl SessionEvent {
    /// Short machine-readable name of the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionEvent::TourSelected { .. } => "tour_selected",
            SessionEvent::ArtworkTriggered { .. } => "artwork_triggered",
            SessionEvent::TriggerCleared { .. } => "trigger_cleared",
        }
    }

    /// True if the UI should open the full detail view.
    pub fn shows_full_detail(&self) -> bool {
        matches!(self, SessionEvent::ArtworkTriggered { open_detail: true, .. })
    }
}

/// Receiver of session events, e.g. a render adapter.
pub trait EventSink {
    fn handle(&mut self, event: &SessionEvent);

    /// Forwards the outcome of a session operation, if it produced an event.
    fn emit(&mut self, event: Option<&SessionEvent>) {
        if let Some(event) = event {
            self.handle(event);
        }
    }
}

impl EventSink for Vec<SessionEvent> {
    fn handle(&mut self, event: &SessionEvent) {
        self.push(event.clone());
    }
}

/// Sink that writes every event to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::TourSelected { tour_id, artwork_count, .. } => {
                tracing::info!(tour_id = %tour_id, artworks = artwork_count, "Tour selected");
            }
            SessionEvent::ArtworkTriggered { artwork, is_first_artwork, open_detail } => {
                tracing::info!(
                    artwork_id = %artwork.id,
                    title = %artwork.title,
                    first = is_first_artwork,
                    detail = open_detail,
                    "Artwork triggered"
                );
            }
            SessionEvent::TriggerCleared { artwork_id } => {
                tracing::info!(artwork_id = %artwork_id, "Trigger cleared");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::artwork;

    #[test]
    fn test_event_serialization() {
        let event = SessionEvent::ArtworkTriggered {
            artwork: artwork("art1", 37.7749, -122.4194),
            is_first_artwork: true,
            open_detail: true,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "artwork_triggered");
        assert_eq!(json["is_first_artwork"], true);
        assert_eq!(json["open_detail"], true);
        assert_eq!(json["artwork"]["id"], "art1");
        assert_eq!(event.kind(), "artwork_triggered");
    }

    #[test]
    fn test_shows_full_detail_follows_open_detail() {
        let first = SessionEvent::ArtworkTriggered {
            artwork: artwork("a", 0.0, 0.0),
            is_first_artwork: true,
            open_detail: true,
        };
        let later = SessionEvent::ArtworkTriggered {
            artwork: artwork("b", 0.0, 0.0),
            is_first_artwork: false,
            open_detail: false,
        };
        let tapped = SessionEvent::ArtworkTriggered {
            artwork: artwork("b", 0.0, 0.0),
            is_first_artwork: false,
            open_detail: true,
        };
        let cleared = SessionEvent::TriggerCleared { artwork_id: "a".into() };

        assert!(first.shows_full_detail());
        assert!(!later.shows_full_detail());
        assert!(tapped.shows_full_detail());
        assert!(!cleared.shows_full_detail());
    }

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<SessionEvent> = Vec::new();
        sink.handle(&SessionEvent::TriggerCleared { artwork_id: "a".into() });
        sink.handle(&SessionEvent::TriggerCleared { artwork_id: "b".into() });
        sink.emit(None);

        let kinds: Vec<&str> = sink.iter().map(SessionEvent::kind).collect();
        assert_eq!(kinds, vec!["trigger_cleared", "trigger_cleared"]);
        assert_eq!(sink[1], SessionEvent::TriggerCleared { artwork_id: "b".into() });
    }
}
