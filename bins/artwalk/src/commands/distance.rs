//! `artwalk distance`

use anyhow::Result;
use artwalk_cli::output::format_distance;
use artwalk_cli::render::RenderFormat;
use artwalk_geo::Coordinate;

pub fn run(lat1: f64, lon1: f64, lat2: f64, lon2: f64, format: RenderFormat) -> Result<()> {
    let from = Coordinate::new(lat1, lon1).validate()?;
    let to = Coordinate::new(lat2, lon2).validate()?;
    let meters = artwalk_geo::haversine_distance_meters(&from, &to);

    match format {
        RenderFormat::Json => println!(
            "{}",
            serde_json::json!({ "from": from, "to": to, "distance_m": meters })
        ),
        RenderFormat::Text => println!("{} ({:.3} m)", format_distance(meters), meters),
    }
    Ok(())
}
