//! `artwalk walk`

use crate::track::{self, TrackPoint};
use anyhow::Result;
use artwalk_cli::output::{Status, format_count, format_distance};
use artwalk_cli::render::{RenderFormat, TerminalSink};
use artwalk_telemetry::WalkMetrics;
use artwalk_tour::{
    EventSink, SessionConfig, SessionEvent, TourCatalog, TourError, TourSession, TracingSink,
};
use chrono::Utc;
use std::path::Path;

pub fn run(
    catalog: TourCatalog,
    config: SessionConfig,
    tour_id: &str,
    track_path: &Path,
    format: RenderFormat,
    stats: bool,
) -> Result<()> {
    let points = track::load(track_path)?;
    tracing::debug!(path = %track_path.display(), fixes = points.len(), "Track loaded");
    let mut session = TourSession::new(catalog, config)?;
    let mut terminal = TerminalSink::stdout(format);
    let mut metrics = WalkMetrics::new();

    let ack = session.select_tour(tour_id)?;
    dispatch(&mut terminal, &mut metrics, Some(&ack));

    for (index, TrackPoint { lat, lon, timestamp }) in points.iter().enumerate() {
        let at = timestamp.unwrap_or_else(Utc::now);
        match session.update_position_at(*lat, *lon, at) {
            Ok(event) => {
                metrics.record_update(session.nearest().map(|(_, d)| d));
                dispatch(&mut terminal, &mut metrics, event.as_ref());
            }
            Err(e @ TourError::MalformedPosition { .. }) => {
                metrics.record_rejected();
                if format == RenderFormat::Text {
                    Status::warning(&format!("fix {} skipped: {}", index + 1, e));
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    terminal.finish()?;

    if stats {
        print_stats(&session, &metrics, format)?;
    }
    Ok(())
}

fn dispatch<W: std::io::Write>(
    terminal: &mut TerminalSink<W>,
    metrics: &mut WalkMetrics,
    event: Option<&SessionEvent>,
) {
    terminal.emit(event);
    metrics.emit(event);
    TracingSink.emit(event);
}

fn print_stats(session: &TourSession, metrics: &WalkMetrics, format: RenderFormat) -> Result<()> {
    if format == RenderFormat::Json {
        let mut stats = metrics.export_json();
        stats["type"] = serde_json::json!("walk_stats");
        stats["triggered_artwork"] = serde_json::json!(session.triggered_artwork().map(|a| &a.id));
        println!("{}", serde_json::to_string(&stats)?);
        return Ok(());
    }

    let distances = metrics.nearest_distance_stats();
    Status::header("Walk summary");
    println!(
        "{} ({} rejected)",
        format_count(metrics.position_updates as usize, "position update", "position updates"),
        metrics.rejected_updates
    );
    println!(
        "{}, {}",
        format_count(metrics.triggers as usize, "trigger", "triggers"),
        format_count(metrics.clears as usize, "clear", "clears")
    );
    if distances.count > 0 {
        println!(
            "nearest artwork: min {}, median {}, max {}",
            format_distance(distances.min),
            format_distance(distances.p50),
            format_distance(distances.max)
        );
    }
    match session.triggered_artwork() {
        Some(artwork) => println!("ended at {}", artwork.caption()),
        None => println!("ended away from any artwork"),
    }
    Ok(())
}
