use crate::rendering::primitives::{Color, Point, Shape};
use serde::{Deserialize, Serialize};

/// What went into a chart, for inspection alongside the shapes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub bodies: Vec<String>,
    pub aspect_count: usize,
}

/// Chart specification - declarative description of chart to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: u32,
    pub height: u32,
    pub center: Point,
    /// Pixel length of wheel radius 1.0
    pub radius: f32,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
    pub metadata: ChartMetadata,
}

impl ChartSpec {
    /// Create an empty square chart spec
    pub fn new(size: u32, radius: f32) -> Self {
        let half = size as f32 / 2.0;
        Self {
            width: size,
            height: size,
            center: Point { x: half, y: half },
            radius,
            background_color: Color::BLACK,
            shapes: Vec::new(),
            metadata: ChartMetadata::default(),
        }
    }

    pub fn aspect_lines(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::AspectLine { .. }))
    }
}
