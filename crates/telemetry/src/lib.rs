//! Logging and walk metrics for ArtWalk tools
//!
//! - Structured logging with tracing
//! - Per-walk counters and nearest-distance statistics

use artwalk_tour::config::LoggingConfig;
use artwalk_tour::{EventSink, SessionEvent};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use uuid::Uuid;

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Initialize logging with the default configuration
pub fn init() -> anyhow::Result<()> {
    init_with_config(TelemetryConfig::default())
}

/// Initialize with custom configuration
///
/// `RUST_LOG` takes precedence over `config.log_level`.
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry
            .with(fmt::layer().json().with_target(config.show_target).with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(config.show_target)
                    .with_file(config.show_file)
                    .with_line_number(config.show_line_number)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub json: bool,
    pub show_target: bool,
    pub show_file: bool,
    pub show_line_number: bool,
}

impl TelemetryConfig {
    /// Raises the filter to `debug` for ArtWalk crates.
    pub fn verbose(mut self) -> Self {
        self.log_level = "artwalk=debug,artwalk_tour=debug,artwalk_telemetry=debug".to_string();
        self.show_target = true;
        self
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json: false,
            show_target: false,
            show_file: false,
            show_line_number: false,
        }
    }
}

impl From<&LoggingConfig> for TelemetryConfig {
    fn from(logging: &LoggingConfig) -> Self {
        Self {
            log_level: logging.level.clone(),
            json: logging.json,
            ..Self::default()
        }
    }
}

/// Counters for one walk through a tour
#[derive(Debug, Default, Clone)]
pub struct WalkMetrics {
    pub position_updates: u64,
    pub rejected_updates: u64,
    pub tours_selected: u64,
    pub triggers: u64,
    pub clears: u64,
    nearest_distances: Vec<f64>,
}

impl WalkMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted position update and the nearest artwork distance, if any
    pub fn record_update(&mut self, nearest_m: Option<f64>) {
        self.position_updates += 1;
        if let Some(d) = nearest_m {
            self.nearest_distances.push(d);
        }
    }

    /// Record a position update the session refused
    pub fn record_rejected(&mut self) {
        self.rejected_updates += 1;
    }

    /// Statistics over recorded nearest-artwork distances, in meters
    pub fn nearest_distance_stats(&self) -> HistogramStats {
        HistogramStats::from_values(&self.nearest_distances)
    }

    /// Export metrics as JSON
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::json!({
            "session_id": session_id(),
            "position_updates": self.position_updates,
            "rejected_updates": self.rejected_updates,
            "tours_selected": self.tours_selected,
            "triggers": self.triggers,
            "clears": self.clears,
            "nearest_distance_m": self.nearest_distance_stats(),
        })
    }
}

impl EventSink for WalkMetrics {
    fn handle(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::TourSelected { .. } => self.tours_selected += 1,
            SessionEvent::ArtworkTriggered { .. } => self.triggers += 1,
            SessionEvent::TriggerCleared { .. } => self.clears += 1,
        }
    }
}

/// Histogram statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub p50: f64,
    pub p95: f64,
}

impl HistogramStats {
    fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                count: 0,
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                p50: 0.0,
                p95: 0.0,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let sum: f64 = sorted.iter().sum();

        Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean: sum / count as f64,
            p50: percentile(&sorted, 50.0),
            p95: percentile(&sorted, 95.0),
        }
    }
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((p / 100.0) * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_metrics_counts_events() {
        let mut metrics = WalkMetrics::new();
        metrics.handle(&SessionEvent::TourSelected {
            tour_id: "t".into(),
            title: "T".into(),
            artwork_count: 0,
        });
        metrics.handle(&SessionEvent::TriggerCleared { artwork_id: "a".into() });
        metrics.emit(None);

        assert_eq!(metrics.tours_selected, 1);
        assert_eq!(metrics.clears, 1);
        assert_eq!(metrics.triggers, 0);
    }

    #[test]
    fn test_walk_metrics_updates() {
        let mut metrics = WalkMetrics::new();
        metrics.record_update(Some(12.0));
        metrics.record_update(None);
        metrics.record_rejected();

        assert_eq!(metrics.position_updates, 2);
        assert_eq!(metrics.rejected_updates, 1);
        assert_eq!(metrics.nearest_distance_stats().count, 1);

        let json = metrics.export_json();
        assert_eq!(json["position_updates"], 2);
        assert_eq!(json["nearest_distance_m"]["max"], 12.0);
    }

    #[test]
    fn test_histogram_stats() {
        let values = vec![10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let stats = HistogramStats::from_values(&values);

        assert_eq!(stats.count, 10);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 10.0);
        assert_eq!(stats.mean, 5.5);
    }

    #[test]
    fn test_empty_histogram() {
        let stats = HistogramStats::from_values(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.p95, 0.0);
    }

    #[test]
    fn test_config_from_logging() {
        let logging = LoggingConfig { level: "debug".into(), json: true };
        let config = TelemetryConfig::from(&logging);
        assert_eq!(config.log_level, "debug");
        assert!(config.json);
        assert!(config.verbose().show_target);
    }

    #[test]
    fn test_session_id() {
        let id = session_id();
        assert!(Uuid::parse_str(id).is_ok());
    }
}
