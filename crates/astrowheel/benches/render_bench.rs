use astrowheel::aspects::AspectCalculator;
use astrowheel::ephemeris::{Body, BodyPosition};
use astrowheel::rendering::{ChartSpecGenerator, RasterRenderer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn positions() -> Vec<BodyPosition> {
    Body::ALL
        .iter()
        .enumerate()
        .map(|(i, body)| BodyPosition::new(*body, (i as f64 * 4.0) % 24.0, 0.0))
        .collect()
}

fn bench_generate_spec(c: &mut Criterion) {
    let aspects = AspectCalculator::new().compute(&positions());
    let generator = ChartSpecGenerator::new();

    c.bench_function("generate_spec", |b| {
        b.iter(|| generator.generate(black_box(&aspects)))
    });
}

fn bench_render_png(c: &mut Criterion) {
    let aspects = AspectCalculator::new().compute(&positions());
    let spec = ChartSpecGenerator::new().generate(&aspects);
    // Falls back to geometry only when no system font is installed
    let renderer = RasterRenderer::from_font_path(None).unwrap_or_else(|_| RasterRenderer::without_font());

    let mut group = c.benchmark_group("render");
    group.sample_size(10);
    group.bench_function("render_png", |b| {
        b.iter(|| renderer.render_png(black_box(&spec)))
    });
    group.finish();
}

criterion_group!(benches, bench_generate_spec, bench_render_png);
criterion_main!(benches);
