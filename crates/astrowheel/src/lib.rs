pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod layout;
pub mod rendering;
pub mod request;

pub use chart::{ChartContext, RenderedChart};
pub use error::ChartError;
pub use request::ChartRequest;

use aspects::AspectCalculator;
use chrono::{DateTime, Utc};
use ephemeris::{BodyPosition, EphemerisError, EphemerisProvider, GeoLocation};
use rendering::{ChartSpecGenerator, RasterRenderer, RenderError};

/// Positions of the ten bodies for an observer at an instant.
pub fn resolve_positions<P: EphemerisProvider + ?Sized>(
    provider: &P,
    observer: &GeoLocation,
    instant: DateTime<Utc>,
) -> Result<Vec<BodyPosition>, EphemerisError> {
    provider.resolve_positions(observer, instant)
}

/// Render a wheel with the default 4° orb and default `VisualConfig`.
///
/// Loaded `WheelSettings` are not consulted; use `ChartContext::render_chart`
/// to render with a configured orb and canvas.
pub fn render_chart(
    positions: &[BodyPosition],
    renderer: &RasterRenderer,
) -> Result<Vec<u8>, RenderError> {
    let aspects = AspectCalculator::new().compute(positions);
    let spec = ChartSpecGenerator::new().generate(&aspects);
    renderer.render_png(&spec)
}
