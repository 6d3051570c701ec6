//! `artwalk tours`

use anyhow::Result;
use artwalk_cli::output::{Status, format_count};
use artwalk_cli::render::RenderFormat;
use artwalk_tour::{TourCatalog, TourSource};

pub fn run(catalog: &TourCatalog, format: RenderFormat) -> Result<()> {
    let tours = catalog.list_tours()?;

    if format == RenderFormat::Json {
        println!("{}", serde_json::to_string_pretty(&tours)?);
        return Ok(());
    }

    if tours.is_empty() {
        Status::warning("The catalog has no tours");
        return Ok(());
    }

    Status::header(&format!("{} available", format_count(tours.len(), "tour", "tours")));
    for tour in &tours {
        println!();
        println!("{}  [{}]", tour.title, tour.id);
        println!("  {}", tour.description);
        println!("  {}", format_count(tour.artworks.len(), "artwork", "artworks"));
    }
    Ok(())
}
