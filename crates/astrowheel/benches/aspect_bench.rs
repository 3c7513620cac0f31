use astrowheel::aspects::AspectCalculator;
use astrowheel::ephemeris::{Body, BodyPosition};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_classify(c: &mut Criterion) {
    let calculator = AspectCalculator::new();

    c.bench_function("classify", |b| {
        b.iter(|| calculator.classify(black_box(100.0), black_box(218.5)))
    });
}

fn bench_compute_ten_bodies(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let positions: Vec<BodyPosition> = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, body)| BodyPosition::new(*body, (i as f64 * 2.1) % 24.0, 0.0))
        .collect();

    c.bench_function("compute_ten_bodies", |b| {
        b.iter(|| calculator.compute(black_box(&positions)))
    });
}

criterion_group!(benches, bench_classify, bench_compute_ten_bodies);
criterion_main!(benches);
