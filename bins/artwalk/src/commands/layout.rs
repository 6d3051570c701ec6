//! `artwalk layout`

use anyhow::Result;
use artwalk_cli::output::Status;
use artwalk_cli::render::RenderFormat;
use artwalk_tour::{Config, TourCatalog, TourSession};

pub fn run(catalog: TourCatalog, config: &Config, tour_id: &str, format: RenderFormat) -> Result<()> {
    let mut session = TourSession::new(catalog, config.schema.session.clone())?;
    session.select_tour(tour_id)?;

    let center = session.map_center();
    let pins = session.artwork_display_points();
    let user = session.user_display_point();

    if format == RenderFormat::Json {
        let pins: Vec<_> = pins
            .iter()
            .map(|(artwork, point)| {
                serde_json::json!({
                    "artwork_id": artwork.id,
                    "left": point.left,
                    "top": point.top,
                })
            })
            .collect();
        let out = serde_json::json!({
            "tour_id": tour_id,
            "map_center": center,
            "user": user,
            "pins": pins,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    Status::header(&format!("Layout of {}", tour_id));
    println!("map center   {}", center);
    for (index, (artwork, point)) in pins.iter().enumerate() {
        println!(
            "pin {:<2} {:>5.1}% left {:>5.1}% top  {}",
            index + 1,
            point.left,
            point.top,
            artwork.title
        );
    }
    println!("you    {:>5.1}% left {:>5.1}% top", user.left, user.top);
    Ok(())
}
