use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexview_core::Rect;
use hexview_paint::{path_data, polygon_path, PolygonSpec};

fn bench_polygon_path(c: &mut Criterion) {
    let bounds = Rect::new(0.0, 0.0, 120.0, 120.0);
    let hexagon = PolygonSpec::new(6, bounds, 2.0, 8.0).unwrap();
    let many = PolygonSpec::new(64, bounds, 2.0, 1.0).unwrap();

    c.bench_function("polygon_path hexagon", |b| {
        b.iter(|| polygon_path(black_box(&hexagon)))
    });
    c.bench_function("polygon_path 64 sides", |b| {
        b.iter(|| polygon_path(black_box(&many)))
    });

    let path = polygon_path(&hexagon);
    c.bench_function("path_data hexagon", |b| b.iter(|| path_data(black_box(&path))));
}

criterion_group!(benches, bench_polygon_path);
criterion_main!(benches);
