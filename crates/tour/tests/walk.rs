//! End-to-end walks through a tour session.

use artwalk_tour::{
    Artwork, EventSink, SessionEvent, SessionState, Tour, TourCatalog, TourErrorCode, TourSession,
};

fn artwork(id: &str, latitude: f64, longitude: f64) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: id.to_uppercase(),
        artist: "Someone".to_string(),
        year: 2020,
        image: format!("/assets/{id}.jpg"),
        latitude,
        longitude,
        narrative: String::new(),
    }
}

fn tour(id: &str, artworks: Vec<Artwork>) -> Tour {
    Tour {
        id: id.to_string(),
        title: id.to_string(),
        description: String::new(),
        artworks,
    }
}

fn started(tours: Vec<Tour>, id: &str) -> TourSession {
    let mut session = TourSession::with_defaults(TourCatalog::new(tours).unwrap());
    session.select_tour(id).unwrap();
    session
}

/// Feeds positions through the session and collects what a renderer would see.
fn walk(session: &mut TourSession, path: &[(f64, f64)]) -> Vec<SessionEvent> {
    let mut sink: Vec<SessionEvent> = Vec::new();
    for &(lat, lon) in path {
        let event = session.update_position(lat, lon).unwrap();
        sink.emit(event.as_ref());
    }
    sink
}

#[test]
fn first_artwork_triggers_with_full_detail() {
    let mut session = started(
        vec![tour(
            "t",
            vec![artwork("a1", 37.7749, -122.4194), artwork("a2", 37.7765, -122.4175)],
        )],
        "t",
    );

    let events = walk(&mut session, &[(37.7749, -122.4194)]);
    assert_eq!(
        events,
        vec![SessionEvent::ArtworkTriggered {
            artwork: artwork("a1", 37.7749, -122.4194),
            is_first_artwork: true,
            open_detail: true,
        }]
    );
    assert_eq!(session.triggered_artwork().map(|a| a.id.as_str()), Some("a1"));
}

#[test]
fn repeated_identical_updates_fire_once() {
    let mut session = started(vec![tour("t", vec![artwork("a1", 37.7749, -122.4194)])], "t");

    let events = walk(&mut session, &[(37.7749, -122.4194); 5]);
    assert_eq!(events.len(), 1);
}

#[test]
fn walking_away_clears_exactly_once() {
    let mut session = started(vec![tour("t", vec![artwork("a1", 37.7749, -122.4194)])], "t");

    let events = walk(
        &mut session,
        &[
            (37.7749, -122.4194),
            // ~110 m north, then further
            (37.7759, -122.4194),
            (37.7769, -122.4194),
        ],
    );
    let kinds: Vec<&str> = events.iter().map(SessionEvent::kind).collect();
    assert_eq!(kinds, vec!["artwork_triggered", "trigger_cleared"]);
}

#[test]
fn coming_back_retriggers_after_leaving() {
    let mut session = started(vec![tour("t", vec![artwork("a1", 37.7749, -122.4194)])], "t");

    let events = walk(
        &mut session,
        &[(37.7749, -122.4194), (37.7769, -122.4194), (37.7749, -122.4194)],
    );
    let kinds: Vec<&str> = events.iter().map(SessionEvent::kind).collect();
    assert_eq!(kinds, vec!["artwork_triggered", "trigger_cleared", "artwork_triggered"]);
}

#[test]
fn unknown_tour_is_rejected_without_side_effects() {
    let mut session = TourSession::with_defaults(TourCatalog::builtin().unwrap());
    session.update_position(37.0, -122.0).unwrap();
    let position = *session.user_position();

    let err = session.select_tour("does-not-exist").unwrap_err();
    assert_eq!(err.code(), TourErrorCode::InvalidTour);
    assert_eq!(session.state(), SessionState::NoTour);
    assert_eq!(*session.user_position(), position);
}

#[test]
fn empty_tour_never_triggers() {
    let mut session = started(vec![tour("empty", vec![])], "empty");

    let events = walk(
        &mut session,
        &[(0.0, 0.0), (37.7749, -122.4194), (90.0, 180.0), (-90.0, -180.0)],
    );
    assert!(events.is_empty());
    assert!(session.nearest().is_none());
}

#[test]
fn equidistant_artworks_resolve_to_tour_order() {
    let mut session = started(
        vec![tour(
            "t",
            vec![artwork("east", 0.0, 0.0001), artwork("west", 0.0, -0.0001)],
        )],
        "t",
    );

    let events = walk(&mut session, &[(0.0, 0.0)]);
    match events.as_slice() {
        [SessionEvent::ArtworkTriggered { artwork, is_first_artwork, .. }] => {
            assert_eq!(artwork.id, "east");
            assert!(is_first_artwork);
        }
        other => panic!("unexpected events {other:?}"),
    }
}

#[test]
fn builtin_mural_mile_walkthrough() {
    let mut session = TourSession::with_defaults(TourCatalog::builtin().unwrap());
    let ack = session.select_tour("mural-mile").unwrap();
    assert_eq!(ack.kind(), "tour_selected");

    let events = walk(
        &mut session,
        &[
            (37.7749, -122.4194), // The Phoenix's Ascent
            (37.7752, -122.4187), // between pins
            (37.7755, -122.4180), // Echoes of the Bay
            (37.7765, -122.4175), // Cybernetic Dreams
        ],
    );

    let triggered: Vec<(&str, bool)> = events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::ArtworkTriggered { artwork, open_detail, .. } => {
                Some((artwork.id.as_str(), *open_detail))
            }
            _ => None,
        })
        .collect();
    assert_eq!(triggered, vec![("art1", true), ("art2", false), ("art3", false)]);
    assert_eq!(
        session.triggered_artwork().map(Artwork::image_src),
        Some("assets/artwork3.jpg")
    );
}

#[test]
fn pin_tap_opens_full_detail_for_any_artwork() {
    let mut session = TourSession::with_defaults(TourCatalog::builtin().unwrap());
    session.select_tour("mural-mile").unwrap();

    let event = session.trigger_artwork("art2").unwrap();
    assert!(event.shows_full_detail());
    assert!(matches!(
        &event,
        SessionEvent::ArtworkTriggered { artwork, is_first_artwork: false, open_detail: true }
            if artwork.id == "art2"
    ));

    // Walking up to the same artwork afterwards stays quiet
    assert!(session.update_position(37.7755, -122.4180).unwrap().is_none());
    assert_eq!(session.triggered_artwork().map(|a| a.id.as_str()), Some("art2"));
}
