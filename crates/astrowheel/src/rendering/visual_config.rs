use crate::aspects::AspectKind;
use crate::rendering::primitives::Color;

/// Canvas size the pixel measurements below are tuned for.
const REFERENCE_CANVAS: f32 = 1400.0;

/// Visual styling configuration for chart elements.
///
/// Radii are fractions of the wheel radius; sizes and widths are pixels at
/// the reference canvas and scale with `canvas_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    pub canvas_size: u32,
    /// Wheel radius as a fraction of half the canvas
    pub wheel_fraction: f32,

    pub background_color: Color,
    pub inner_disc_color: Color,
    pub divider_color: Color,
    pub label_color: Color,
    pub glyph_color: Color,
    pub name_color: Color,
    pub ring_color: Color,

    pub inner_disc_radius: f32,
    pub label_radius: f32,
    pub glyph_radius: f32,
    pub name_radius: f32,
    pub aspect_radius: f32,
    pub ring_radius: f32,

    pub divider_width: f32,
    pub divider_dash: [f32; 2],
    pub aspect_width: f32,
    pub ring_width: f32,

    pub label_size: f32,
    pub glyph_size: f32,
    pub name_size: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            canvas_size: REFERENCE_CANVAS as u32,
            wheel_fraction: 0.775,

            background_color: Color::BLACK,
            inner_disc_color: Color::CHARCOAL,
            divider_color: Color::GRAY,
            label_color: Color::WHITE,
            glyph_color: Color::GOLD,
            name_color: Color::WHITE,
            ring_color: Color::GOLD,

            inner_disc_radius: 0.5,
            label_radius: 1.05,
            glyph_radius: 0.95,
            name_radius: 0.88,
            aspect_radius: 0.9,
            ring_radius: 1.0,

            divider_width: 1.4,
            divider_dash: [5.2, 2.2],
            aspect_width: 2.0,
            ring_width: 2.0,

            // 14pt, 32pt and 12pt at 100 dpi
            label_size: 19.4,
            glyph_size: 44.4,
            name_size: 16.7,
        }
    }
}

impl VisualConfig {
    /// Default styling scaled to a square canvas of `canvas_size` pixels
    pub fn for_canvas(canvas_size: u32) -> Self {
        let base = Self::default();
        let k = canvas_size as f32 / REFERENCE_CANVAS;
        Self {
            canvas_size,
            divider_width: (base.divider_width * k).max(1.0),
            divider_dash: [base.divider_dash[0] * k, base.divider_dash[1] * k],
            aspect_width: (base.aspect_width * k).max(1.0),
            ring_width: (base.ring_width * k).max(1.0),
            label_size: base.label_size * k,
            glyph_size: base.glyph_size * k,
            name_size: base.name_size * k,
            ..base
        }
    }

    /// Pixel length of wheel radius 1.0
    pub fn wheel_radius(&self) -> f32 {
        self.canvas_size as f32 / 2.0 * self.wheel_fraction
    }

    pub fn aspect_color(&self, kind: AspectKind) -> Color {
        match kind {
            AspectKind::Square => Color::RED,
            AspectKind::Trine => Color::BLUE,
            AspectKind::Sextile => Color::GREEN,
        }
    }
}
