pub mod generator;
pub mod glyphs;
pub mod primitives;
pub mod raster;
pub mod spec;
pub mod visual_config;

pub use generator::ChartSpecGenerator;
pub use glyphs::{body_glyph, FALLBACK_GLYPH};
pub use primitives::{Color, Point, Shape, Stroke, TextAnchor};
pub use raster::{RasterRenderer, RenderError};
pub use spec::{ChartMetadata, ChartSpec};
pub use visual_config::VisualConfig;
