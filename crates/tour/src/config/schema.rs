//! Configuration schema definitions

use crate::error::{Result, TourError};
use artwalk_geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        self.session.validate()
    }
}

/// Proximity and position settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// An artwork triggers when the user is strictly closer than this, in meters
    #[serde(default = "default_trigger_radius")]
    pub trigger_radius_m: f64,

    /// Position used until the location provider reports one
    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,

    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,
}

impl SessionConfig {
    pub fn fallback_position(&self) -> Coordinate {
        Coordinate::new(self.fallback_latitude, self.fallback_longitude)
    }

    pub fn with_trigger_radius(mut self, meters: f64) -> Self {
        self.trigger_radius_m = meters;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.trigger_radius_m.is_finite() || self.trigger_radius_m <= 0.0 {
            return Err(TourError::Config(format!(
                "session.trigger_radius_m must be a positive number of meters, got {}",
                self.trigger_radius_m
            )));
        }
        self.fallback_position()
            .validate()
            .map_err(|e| TourError::Config(format!("session fallback position: {}", e)))?;
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            trigger_radius_m: default_trigger_radius(),
            fallback_latitude: default_fallback_latitude(),
            fallback_longitude: default_fallback_longitude(),
        }
    }
}

fn default_trigger_radius() -> f64 {
    30.0
}

fn default_fallback_latitude() -> f64 {
    37.7749
}

fn default_fallback_longitude() -> f64 {
    -122.4194
}

/// Where tours come from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON catalog file; the bundled catalog is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Logging output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
