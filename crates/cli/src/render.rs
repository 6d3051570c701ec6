//! Terminal render adapter for session events.

use artwalk_tour::{EventSink, SessionEvent};
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};

/// How events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

/// Writes each session event to a terminal or any other writer.
///
/// Sinks cannot fail, so the first write error is kept and later events are
/// dropped. [`finish`](Self::finish) reports it.
pub struct TerminalSink<W: Write> {
    out: W,
    format: RenderFormat,
    color: bool,
    error: Option<io::Error>,
}

impl TerminalSink<io::Stdout> {
    /// Sink writing text or JSON lines to stdout, colored when stdout is a terminal
    pub fn stdout(format: RenderFormat) -> Self {
        let out = io::stdout();
        let color = out.is_terminal();
        Self { out, format, color, error: None }
    }
}

impl<W: Write> TerminalSink<W> {
    /// Sink writing plain, uncolored output to `out`
    pub fn new(out: W, format: RenderFormat) -> Self {
        Self { out, format, color: false, error: None }
    }

    /// Flushes and returns the writer, or the first write error
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn text_line(&self, event: &SessionEvent) -> String {
        match event {
            SessionEvent::TourSelected { title, artwork_count, .. } => {
                format!("Started \"{}\" ({} artworks)", title, artwork_count)
            }
            SessionEvent::ArtworkTriggered { artwork, open_detail: true, .. } => {
                let story = if artwork.narrative.is_empty() {
                    String::new()
                } else {
                    format!("\n    {}", artwork.narrative)
                };
                format!(
                    "{} {}  [{}]{}",
                    self.paint_marker("★"),
                    artwork.caption(),
                    artwork.image_src(),
                    story
                )
            }
            SessionEvent::ArtworkTriggered { artwork, .. } => {
                format!("{} {}", self.paint_marker("●"), artwork.caption())
            }
            SessionEvent::TriggerCleared { artwork_id } => {
                format!("  left {}", artwork_id)
            }
        }
    }

    fn paint_marker(&self, marker: &str) -> String {
        if self.color {
            marker.magenta().bold().to_string()
        } else {
            marker.to_string()
        }
    }
}

impl<W: Write> EventSink for TerminalSink<W> {
    fn handle(&mut self, event: &SessionEvent) {
        if self.error.is_some() {
            return;
        }
        let line = match self.format {
            RenderFormat::Text => self.text_line(event),
            RenderFormat::Json => serde_json::to_string(event).unwrap_or_else(|e| {
                serde_json::json!({ "type": "render_error", "message": e.to_string() }).to_string()
            }),
        };
        if let Err(e) = writeln!(self.out, "{}", line) {
            self.error = Some(e);
        }
    }
}
