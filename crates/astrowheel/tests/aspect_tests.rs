use astrowheel::aspects::{AspectCalculator, AspectKind, AspectSettings};
use astrowheel::ephemeris::{Body, BodyPosition};
use std::collections::HashSet;

fn positions(ras: &[(Body, f64)]) -> Vec<BodyPosition> {
    ras.iter()
        .map(|(body, ra)| BodyPosition::new(*body, *ra, 0.0))
        .collect()
}

#[test]
fn test_theta_from_right_ascension() {
    let calculator = AspectCalculator::new();
    for (i, body) in Body::ALL.iter().enumerate() {
        let ra = i as f64 * 2.3;
        let angle = calculator.chart_angle(&BodyPosition::new(*body, ra, 12.0));
        let expected = (ra / 24.0) * 360.0;
        assert!(
            (angle.degrees() - expected).abs() <= 1e-9,
            "{}: {} vs {}",
            body,
            angle.degrees(),
            expected
        );
    }
}

#[test]
fn test_sun_moon_square() {
    let calculator = AspectCalculator::new();
    let chart = calculator.compute(&positions(&[(Body::Sun, 0.0), (Body::Moon, 6.0)]));

    assert_eq!(chart.angles.len(), 2);
    assert!(chart.angle_of("Sun").unwrap().degrees().abs() < 1e-9);
    assert!((chart.angle_of("Moon").unwrap().degrees() - 90.0).abs() < 1e-9);

    assert_eq!(chart.edges.len(), 1);
    let edge = &chart.edges[0];
    assert_eq!(edge.body_a, "Sun");
    assert_eq!(edge.body_b, "Moon");
    assert_eq!(edge.aspect_kind, AspectKind::Square);
}

#[test]
fn test_classification_is_symmetric() {
    let calculator = AspectCalculator::new();
    let mut deg = 0.0;
    while deg < 360.0 {
        for other in [0.0, 37.5, 90.0, 181.25, 300.0] {
            assert_eq!(
                calculator.classify(deg, other),
                calculator.classify(other, deg),
                "{} vs {}",
                deg,
                other
            );
        }
        deg += 0.75;
    }

    let forward = calculator.compute(&positions(&[(Body::Mars, 2.0), (Body::Venus, 10.0)]));
    let backward = calculator.compute(&positions(&[(Body::Venus, 10.0), (Body::Mars, 2.0)]));
    assert_eq!(forward.edges.len(), 1);
    assert_eq!(backward.edges.len(), 1);
    assert_eq!(forward.edges[0].aspect_kind, backward.edges[0].aspect_kind);
    assert!(backward.edges[0].connects("Mars", "Venus"));
}

#[test]
fn test_exact_angles_match() {
    let calculator = AspectCalculator::with_settings(AspectSettings { orb_degrees: 0.0 });
    assert_eq!(calculator.classify(10.0, 100.0), Some(AspectKind::Square));
    assert_eq!(calculator.classify(10.0, 130.0), Some(AspectKind::Trine));
    assert_eq!(calculator.classify(10.0, 70.0), Some(AspectKind::Sextile));
}

#[test]
fn test_orb_boundary_is_inclusive() {
    let calculator = AspectCalculator::new();
    assert_eq!(calculator.classify(0.0, 94.0), Some(AspectKind::Square));
    assert_eq!(calculator.classify(0.0, 86.0), Some(AspectKind::Square));
    assert_eq!(calculator.classify(0.0, 94.01), None);
    assert_eq!(calculator.classify(0.0, 85.99), None);

    assert_eq!(calculator.classify(0.0, 124.0), Some(AspectKind::Trine));
    assert_eq!(calculator.classify(0.0, 124.01), None);
    assert_eq!(calculator.classify(0.0, 56.0), Some(AspectKind::Sextile));
    assert_eq!(calculator.classify(0.0, 55.99), None);
}

#[test]
fn test_orb_boundary_through_right_ascension() {
    let calculator = AspectCalculator::new();
    // 94° of wheel angle
    let ra = 94.0 / 15.0;
    let chart = calculator.compute(&positions(&[(Body::Sun, 0.0), (Body::Jupiter, ra)]));
    assert_eq!(chart.edges.len(), 1);
    assert_eq!(chart.edges[0].aspect_kind, AspectKind::Square);

    let ra = 94.01 / 15.0;
    let chart = calculator.compute(&positions(&[(Body::Sun, 0.0), (Body::Jupiter, ra)]));
    assert!(chart.edges.is_empty());
}

#[test]
fn test_separation_past_180_is_not_folded() {
    let calculator = AspectCalculator::new();
    // 270° apart: a square on the folded circle, but not matched here
    let chart = calculator.compute(&positions(&[(Body::Sun, 0.0), (Body::Saturn, 18.0)]));
    assert!(chart.edges.is_empty());
    // 240° apart
    assert_eq!(calculator.classify(0.0, 240.0), None);
}

#[test]
fn test_at_most_one_edge_per_pair() {
    let calculator = AspectCalculator::with_settings(AspectSettings { orb_degrees: 20.0 });
    // With a wide orb the square and trine bands overlap around 105°;
    // the square is evaluated first.
    assert_eq!(calculator.classify(0.0, 105.0), Some(AspectKind::Square));
    assert_eq!(calculator.classify(0.0, 75.0), Some(AspectKind::Square));

    let table: Vec<BodyPosition> = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, body)| BodyPosition::new(*body, i as f64 * 1.7, 0.0))
        .collect();
    let chart = calculator.compute(&table);

    let mut seen = HashSet::new();
    for edge in &chart.edges {
        let key = if edge.body_a < edge.body_b {
            (edge.body_a.clone(), edge.body_b.clone())
        } else {
            (edge.body_b.clone(), edge.body_a.clone())
        };
        assert!(seen.insert(key), "pair reported twice: {:?}", edge);
    }
}

#[test]
fn test_compute_is_idempotent() {
    let calculator = AspectCalculator::new();
    let table: Vec<BodyPosition> = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, body)| BodyPosition::new(*body, (i as f64 * 4.1) % 24.0, -5.0))
        .collect();

    let first = calculator.compute(&table);
    let second = calculator.compute(&table);
    assert_eq!(first, second);
}

#[test]
fn test_coincident_bodies_produce_no_edges() {
    let calculator = AspectCalculator::new();
    let table: Vec<BodyPosition> = Body::ALL
        .iter()
        .map(|body| BodyPosition::new(*body, 0.0, 0.0))
        .collect();
    let chart = calculator.compute(&table);

    assert_eq!(chart.angles.len(), 10);
    assert!(chart.edges.is_empty());
}

#[test]
fn test_declination_does_not_affect_aspects() {
    let calculator = AspectCalculator::new();
    let flat = calculator.compute(&[
        BodyPosition::new(Body::Sun, 1.0, 0.0),
        BodyPosition::new(Body::Mercury, 9.0, 0.0),
    ]);
    let tilted = calculator.compute(&[
        BodyPosition::new(Body::Sun, 1.0, 23.4),
        BodyPosition::new(Body::Mercury, 9.0, -60.0),
    ]);
    assert_eq!(flat.edges, tilted.edges);
    assert_eq!(flat.edges[0].aspect_kind, AspectKind::Trine);
}
