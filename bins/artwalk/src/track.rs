//! GPS track files.
//!
//! Two formats are accepted:
//! - a JSON array of `{"lat": .., "lon": .., "timestamp": ..}` objects
//!   (`timestamp` optional, RFC 3339)
//! - plain text, one `lat,lon[,timestamp]` fix per line; blank lines and
//!   lines starting with `#` are ignored

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

/// One fix reported by the location provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

pub fn load(path: &Path) -> Result<Vec<TrackPoint>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read track file {}", path.display()))?;
    parse(&content).with_context(|| format!("Invalid track file {}", path.display()))
}

pub fn parse(content: &str) -> Result<Vec<TrackPoint>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).context("Track JSON must be an array of {lat, lon}");
    }

    let mut points = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        points.push(parse_line(line).with_context(|| format!("line {}", number + 1))?);
    }
    Ok(points)
}

fn parse_line(line: &str) -> Result<TrackPoint> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if !(2..=3).contains(&fields.len()) {
        bail!("expected `lat,lon[,timestamp]`, got `{}`", line);
    }

    let lat = fields[0]
        .parse::<f64>()
        .with_context(|| format!("bad latitude `{}`", fields[0]))?;
    let lon = fields[1]
        .parse::<f64>()
        .with_context(|| format!("bad longitude `{}`", fields[1]))?;
    let timestamp = match fields.get(2) {
        Some(raw) => Some(
            DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("bad timestamp `{}`", raw))?
                .with_timezone(&Utc),
        ),
        None => None,
    };

    Ok(TrackPoint { lat, lon, timestamp })
}
