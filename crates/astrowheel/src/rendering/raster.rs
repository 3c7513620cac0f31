use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;
use ab_glyph::{FontVec, PxScale};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_text_mut,
    text_size,
};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while producing the raster
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Could not allocate a {width}x{height} drawing surface: {message}")]
    SurfaceAllocation {
        width: u32,
        height: u32,
        message: String,
    },
    #[error("Failed to encode chart image: {0}")]
    Encode(String),
    #[error("Failed to load font {path}: {message}")]
    Font { path: String, message: String },
}

/// Searched when no font is configured
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\seguisym.ttf",
];

const MAX_SURFACE_SIDE: u32 = 16_384;

pub fn load_font(path: &Path) -> Result<FontVec, RenderError> {
    let font_err = |message: String| RenderError::Font {
        path: path.display().to_string(),
        message,
    };
    let bytes = fs::read(path).map_err(|e| font_err(e.to_string()))?;
    FontVec::try_from_vec(bytes).map_err(|e| font_err(e.to_string()))
}

/// First readable font among the usual system locations
pub fn find_system_font() -> Option<(PathBuf, FontVec)> {
    SYSTEM_FONT_PATHS.iter().find_map(|p| {
        let path = PathBuf::from(p);
        if !path.exists() {
            return None;
        }
        load_font(&path).ok().map(|font| (path, font))
    })
}

/// Drawing surface owned by one render call.
struct Surface {
    image: RgbaImage,
}

impl Surface {
    fn allocate(width: u32, height: u32, background: Color) -> Result<Self, RenderError> {
        let alloc_err = |message: &str| RenderError::SurfaceAllocation {
            width,
            height,
            message: message.to_string(),
        };
        if width == 0 || height == 0 {
            return Err(alloc_err("zero-sized surface"));
        }
        if width > MAX_SURFACE_SIDE || height > MAX_SURFACE_SIDE {
            return Err(alloc_err("surface exceeds the maximum side length"));
        }
        let pixels = width as usize * height as usize;
        let len = pixels
            .checked_mul(4)
            .ok_or_else(|| alloc_err("size overflow"))?;

        let mut buf: Vec<u8> = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|e| alloc_err(&e.to_string()))?;
        let px: Rgba<u8> = background.into();
        for _ in 0..pixels {
            buf.extend_from_slice(&px.0);
        }

        let image = RgbaImage::from_raw(width, height, buf)
            .ok_or_else(|| alloc_err("buffer does not match dimensions"))?;
        Ok(Self { image })
    }

    fn paint(&mut self, shape: &Shape, font: Option<&FontVec>) {
        match shape {
            Shape::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                if let Some(fill) = fill {
                    draw_filled_circle_mut(
                        &mut self.image,
                        to_pixel(*center),
                        radius.round() as i32,
                        Rgba::from(*fill),
                    );
                }
                if let Some(stroke) = stroke {
                    self.stroke_circle(*center, *radius, stroke);
                }
            }
            Shape::Line { from, to, stroke } => match &stroke.dash_array {
                Some(dashes) if dashes.len() >= 2 && dashes.iter().all(|d| *d > 0.0) => {
                    self.stroke_dashed(*from, *to, stroke.width, dashes, stroke.color)
                }
                _ => self.stroke_segment(*from, *to, stroke.width, stroke.color),
            },
            Shape::AspectLine {
                from,
                to,
                color,
                width,
                ..
            } => self.stroke_segment(*from, *to, *width, *color),
            Shape::Text {
                position,
                content,
                size,
                color,
                anchor,
            } => {
                if let Some(font) = font {
                    self.draw_text(font, content, *position, *size, *color, *anchor);
                }
            }
            Shape::BodyGlyph {
                center,
                glyph,
                size,
                color,
                ..
            } => {
                if let Some(font) = font {
                    self.draw_text(font, glyph, *center, *size, *color, TextAnchor::Middle);
                }
            }
        }
    }

    /// Solid segment of the given width, built from parallel 1px lines.
    fn stroke_segment(&mut self, from: Point, to: Point, width: f32, color: Color) {
        let px = Rgba::from(color);
        let len = from.distance(to);
        if len < f32::EPSILON {
            let (x, y) = to_pixel(from);
            if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
                self.image.put_pixel(x as u32, y as u32, px);
            }
            return;
        }
        let nx = -(to.y - from.y) / len;
        let ny = (to.x - from.x) / len;
        let steps = ((width - 1.0).max(0.0) / 0.5).round() as i32;
        for k in 0..=steps {
            let off = k as f32 * 0.5 - steps as f32 * 0.25;
            draw_line_segment_mut(
                &mut self.image,
                (from.x + nx * off, from.y + ny * off),
                (to.x + nx * off, to.y + ny * off),
                px,
            );
        }
    }

    fn stroke_dashed(&mut self, from: Point, to: Point, width: f32, dashes: &[f32], color: Color) {
        let len = from.distance(to);
        if len < f32::EPSILON {
            return;
        }
        let (ux, uy) = ((to.x - from.x) / len, (to.y - from.y) / len);
        let along = |t: f32| Point {
            x: from.x + ux * t,
            y: from.y + uy * t,
        };

        let mut t = 0.0;
        let mut i = 0;
        while t < len {
            let run = dashes[i % dashes.len()];
            // Even entries are drawn, odd entries are gaps.
            if i % 2 == 0 {
                let end = (t + run).min(len);
                self.stroke_segment(along(t), along(end), width, color);
            }
            t += run;
            i += 1;
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke) {
        let px = Rgba::from(stroke.color);
        let half = ((stroke.width - 1.0).max(0.0) / 2.0).ceil() as i32;
        let r = radius.round() as i32;
        for dr in -half..=half {
            if r + dr > 0 {
                draw_hollow_circle_mut(&mut self.image, to_pixel(center), r + dr, px);
            }
        }
    }

    fn draw_text(
        &mut self,
        font: &FontVec,
        text: &str,
        position: Point,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    ) {
        if text.is_empty() || size <= 0.0 {
            return;
        }
        let scale = PxScale::from(size);
        let (w, h) = text_size(scale, font, text);
        let x = match anchor {
            TextAnchor::Start => position.x,
            TextAnchor::Middle => position.x - w as f32 / 2.0,
            TextAnchor::End => position.x - w as f32,
        };
        let y = position.y - h as f32 / 2.0;
        draw_text_mut(
            &mut self.image,
            Rgba::from(color),
            x.round() as i32,
            y.round() as i32,
            scale,
            font,
            text,
        );
    }

    fn into_image(self) -> RgbaImage {
        self.image
    }
}

fn to_pixel(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

/// Paints a `ChartSpec` into an RGBA raster.
///
/// Text and glyph shapes need a font; without one they are skipped and only
/// the geometry is drawn.
pub struct RasterRenderer {
    font: Option<FontVec>,
}

impl RasterRenderer {
    pub fn new(font: Option<FontVec>) -> Self {
        Self { font }
    }

    /// Renderer without text
    pub fn without_font() -> Self {
        Self { font: None }
    }

    /// Load the configured font, or look for a system font when none is
    /// configured. A configured font that fails to load is an error.
    pub fn from_font_path(path: Option<&Path>) -> Result<Self, RenderError> {
        let font = match path {
            Some(p) => Some(load_font(p)?),
            None => match find_system_font() {
                Some((found, font)) => {
                    log::info!("Using font {}", found.display());
                    Some(font)
                }
                None => {
                    log::warn!("No font found; chart labels and glyphs will not be drawn");
                    None
                }
            },
        };
        Ok(Self { font })
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Paint every shape in order on a fresh surface.
    pub fn rasterize(&self, spec: &ChartSpec) -> Result<RgbaImage, RenderError> {
        let mut surface = Surface::allocate(spec.width, spec.height, spec.background_color)?;
        for shape in &spec.shapes {
            surface.paint(shape, self.font.as_ref());
        }
        Ok(surface.into_image())
    }

    pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        Ok(bytes)
    }

    pub fn render_png(&self, spec: &ChartSpec) -> Result<Vec<u8>, RenderError> {
        let image = self.rasterize(spec)?;
        Self::encode_png(&image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_surface_is_an_error() {
        let err = Surface::allocate(0, 10, Color::BLACK).err();
        assert!(matches!(err, Some(RenderError::SurfaceAllocation { width: 0, .. })));
    }

    #[test]
    fn oversized_surface_is_an_error() {
        assert!(Surface::allocate(MAX_SURFACE_SIDE + 1, 10, Color::BLACK).is_err());
    }

    #[test]
    fn surface_starts_with_background() {
        let surface = Surface::allocate(4, 3, Color::CHARCOAL).unwrap();
        let image = surface.into_image();
        assert_eq!(image.dimensions(), (4, 3));
        assert!(image.pixels().all(|p| *p == Rgba([0x1a, 0x1a, 0x1a, 255])));
    }

    #[test]
    fn dashed_line_leaves_gaps() {
        let mut surface = Surface::allocate(40, 5, Color::BLACK).unwrap();
        surface.stroke_dashed(
            Point { x: 0.0, y: 2.0 },
            Point { x: 39.0, y: 2.0 },
            1.0,
            &[4.0, 4.0],
            Color::WHITE,
        );
        let image = surface.into_image();
        let row: Vec<bool> = (0..40)
            .map(|x| *image.get_pixel(x, 2) == Rgba([255, 255, 255, 255]))
            .collect();
        assert!(row[1]);
        assert!(!row[6]);
        assert!(row[9]);
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let err = RasterRenderer::from_font_path(Some(Path::new("/no/such/font.ttf")));
        assert!(matches!(err, Err(RenderError::Font { .. })));
    }
}
