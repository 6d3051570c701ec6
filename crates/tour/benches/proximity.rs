//! Benchmarks for the per-update proximity check.

use artwalk_geo::Coordinate;
use artwalk_tour::proximity::nearest_artwork;
use artwalk_tour::{Artwork, Tour, TourCatalog, TourSession};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn create_artworks(count: usize) -> Vec<Artwork> {
    (0..count)
        .map(|i| Artwork {
            id: format!("art{i}"),
            title: format!("Artwork {i}"),
            artist: "Bench".to_string(),
            year: 2024,
            image: String::new(),
            latitude: 37.77 + (i as f64 * 0.0003) % 0.01,
            longitude: -122.42 + (i as f64 * 0.0007) % 0.01,
            narrative: String::new(),
        })
        .collect()
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_artwork");
    let user = Coordinate::new(37.775, -122.418);

    for size in [3, 30, 300].iter() {
        let artworks = create_artworks(*size);
        group.bench_with_input(BenchmarkId::new("scan", size), size, |b, _| {
            b.iter(|| nearest_artwork(black_box(&user), black_box(&artworks)))
        });
    }

    group.finish();
}

fn bench_update_position(c: &mut Criterion) {
    let tour = Tour {
        id: "bench".to_string(),
        title: "Bench".to_string(),
        description: String::new(),
        artworks: create_artworks(30),
    };
    let mut session = TourSession::with_defaults(TourCatalog::new(vec![tour]).unwrap());
    session.select_tour("bench").unwrap();

    // Alternate between two fixes so some updates trigger and some clear
    let fixes = [(37.77, -122.42), (37.80, -122.40)];
    let mut i = 0usize;
    c.bench_function("update_position", |b| {
        b.iter(|| {
            let (lat, lon) = fixes[i % 2];
            i += 1;
            session.update_position(black_box(lat), black_box(lon)).unwrap()
        })
    });
}

criterion_group!(benches, bench_nearest, bench_update_position);
criterion_main!(benches);
