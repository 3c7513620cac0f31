use crate::aspects::ChartAspects;
use crate::layout::{build_house_divider_items, build_static_zodiac_items, WheelGeometry};
use crate::rendering::glyphs::body_glyph;
use crate::rendering::primitives::{Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartMetadata, ChartSpec};
use crate::rendering::visual_config::VisualConfig;

/// ChartSpec generator - lays out the wheel as an ordered list of shapes.
///
/// Z-order: inner disc, house dividers, sign labels, aspect chords, body
/// glyphs with names, outer ring.
#[derive(Debug, Clone, Default)]
pub struct ChartSpecGenerator {
    visual_config: VisualConfig,
}

impl ChartSpecGenerator {
    /// Create a new generator with default configs
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    pub fn visual_config(&self) -> &VisualConfig {
        &self.visual_config
    }

    pub fn generate(&self, chart: &ChartAspects) -> ChartSpec {
        let vc = &self.visual_config;
        let mut spec = ChartSpec::new(vc.canvas_size, vc.wheel_radius());
        spec.background_color = vc.background_color;
        let geo = WheelGeometry::new(spec.center, spec.radius);

        spec.shapes.push(Shape::Circle {
            center: spec.center,
            radius: geo.radius * vc.inner_disc_radius,
            fill: Some(vc.inner_disc_color),
            stroke: None,
        });

        self.generate_house_dividers(&geo, &mut spec.shapes);
        self.generate_sign_labels(&geo, &mut spec.shapes);
        self.generate_aspect_lines(chart, &geo, &mut spec.shapes);
        self.generate_bodies(chart, &geo, &mut spec.shapes);

        spec.shapes.push(Shape::Circle {
            center: spec.center,
            radius: geo.radius * vc.ring_radius,
            fill: None,
            stroke: Some(Stroke {
                color: vc.ring_color,
                width: vc.ring_width,
                dash_array: None,
            }),
        });

        spec.metadata = ChartMetadata {
            bodies: chart.angles.iter().map(|a| a.name.clone()).collect(),
            aspect_count: chart.edges.len(),
        };
        spec
    }

    fn generate_house_dividers(&self, geo: &WheelGeometry, shapes: &mut Vec<Shape>) {
        let vc = &self.visual_config;
        for house in build_house_divider_items() {
            shapes.push(Shape::Line {
                from: geo.point(0.0, house.deg),
                to: geo.point(1.0, house.deg),
                stroke: Stroke {
                    color: vc.divider_color,
                    width: vc.divider_width,
                    dash_array: Some(vc.divider_dash.to_vec()),
                },
            });
        }
    }

    fn generate_sign_labels(&self, geo: &WheelGeometry, shapes: &mut Vec<Shape>) {
        let vc = &self.visual_config;
        for sign in build_static_zodiac_items() {
            shapes.push(Shape::Text {
                position: geo.point(vc.label_radius, sign.mid_deg()),
                content: sign.label.to_string(),
                size: vc.label_size,
                color: vc.label_color,
                anchor: TextAnchor::Middle,
            });
        }
    }

    fn generate_aspect_lines(
        &self,
        chart: &ChartAspects,
        geo: &WheelGeometry,
        shapes: &mut Vec<Shape>,
    ) {
        let vc = &self.visual_config;
        for edge in &chart.edges {
            let (Some(a), Some(b)) = (chart.angle_of(&edge.body_a), chart.angle_of(&edge.body_b))
            else {
                log::warn!(
                    "Skipping {} between {} and {}: body not on the wheel",
                    edge.aspect_kind,
                    edge.body_a,
                    edge.body_b
                );
                continue;
            };
            shapes.push(Shape::AspectLine {
                from: geo.point(vc.aspect_radius, a.degrees()),
                to: geo.point(vc.aspect_radius, b.degrees()),
                aspect: edge.aspect_kind,
                color: vc.aspect_color(edge.aspect_kind),
                width: vc.aspect_width,
            });
        }
    }

    fn generate_bodies(&self, chart: &ChartAspects, geo: &WheelGeometry, shapes: &mut Vec<Shape>) {
        let vc = &self.visual_config;
        for angle in &chart.angles {
            let deg = angle.degrees();
            shapes.push(Shape::BodyGlyph {
                center: geo.point(vc.glyph_radius, deg),
                body: angle.name.clone(),
                glyph: body_glyph(&angle.name).to_string(),
                size: vc.glyph_size,
                color: vc.glyph_color,
            });
            shapes.push(Shape::Text {
                position: geo.point(vc.name_radius, deg),
                content: angle.name.clone(),
                size: vc.name_size,
                color: vc.name_color,
                anchor: TextAnchor::Middle,
            });
        }
    }
}
