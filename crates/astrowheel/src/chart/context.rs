use crate::aspects::{AspectCalculator, AspectSettings, ChartAspects};
use crate::ephemeris::{
    BodyPosition, EphemerisError, EphemerisProvider, GeoLocation, SwissEphemerisAdapter,
};
use crate::error::ChartError;
use crate::rendering::{ChartSpec, ChartSpecGenerator, RasterRenderer, RenderError, VisualConfig};
use crate::request::ChartRequest;
use astrowheel_config::WheelSettings;
use chrono::{DateTime, Utc};

/// Result of a full chart request
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub instant: DateTime<Utc>,
    pub positions: Vec<BodyPosition>,
    pub aspects: ChartAspects,
    pub spec: ChartSpec,
    pub png: Vec<u8>,
}

/// Everything a request needs, built once at startup and shared read-only.
///
/// Holds no mutable state, so one context can serve requests from many
/// threads at once; each render allocates its own surface.
pub struct ChartContext<E: EphemerisProvider> {
    observer: GeoLocation,
    ephemeris: E,
    calculator: AspectCalculator,
    generator: ChartSpecGenerator,
    renderer: RasterRenderer,
}

impl<E: EphemerisProvider> ChartContext<E> {
    pub fn new(
        observer: GeoLocation,
        ephemeris: E,
        calculator: AspectCalculator,
        generator: ChartSpecGenerator,
        renderer: RasterRenderer,
    ) -> Self {
        Self {
            observer,
            ephemeris,
            calculator,
            generator,
            renderer,
        }
    }

    /// Build from loaded settings with the given ephemeris provider.
    pub fn from_settings(settings: &WheelSettings, ephemeris: E) -> Result<Self, RenderError> {
        let renderer = RasterRenderer::from_font_path(settings.render.font_path.as_deref())?;
        Ok(Self::new(
            GeoLocation {
                lat: settings.observer.latitude_deg,
                lon: settings.observer.longitude_deg,
            },
            ephemeris,
            AspectCalculator::with_settings(AspectSettings {
                orb_degrees: settings.orb_degrees,
            }),
            ChartSpecGenerator::with_config(VisualConfig::for_canvas(settings.render.canvas_size)),
            renderer,
        ))
    }

    pub fn observer(&self) -> &GeoLocation {
        &self.observer
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn resolve_positions(
        &self,
        instant: DateTime<Utc>,
    ) -> Result<Vec<BodyPosition>, EphemerisError> {
        self.ephemeris.resolve_positions(&self.observer, instant)
    }

    pub fn compute_aspects(&self, positions: &[BodyPosition]) -> ChartAspects {
        self.calculator.compute(positions)
    }

    /// Angles, aspects and the laid-out shapes, without rasterizing
    pub fn layout(&self, positions: &[BodyPosition]) -> (ChartAspects, ChartSpec) {
        let aspects = self.compute_aspects(positions);
        let spec = self.generator.generate(&aspects);
        (aspects, spec)
    }

    /// Render positions to PNG bytes
    pub fn render_chart(&self, positions: &[BodyPosition]) -> Result<Vec<u8>, RenderError> {
        let (_, spec) = self.layout(positions);
        self.renderer.render_png(&spec)
    }

    /// Full pipeline: request -> instant -> positions -> aspects -> PNG
    pub fn chart_for(
        &self,
        request: &ChartRequest,
        now: DateTime<Utc>,
    ) -> Result<RenderedChart, ChartError> {
        let instant = request.instant(now)?;
        let positions = self.resolve_positions(instant)?;
        let (aspects, spec) = self.layout(&positions);
        let png = self.renderer.render_png(&spec)?;
        log::info!(
            "Rendered chart for {}: {} bodies, {} aspects, {} bytes",
            instant,
            positions.len(),
            aspects.edges.len(),
            png.len()
        );
        Ok(RenderedChart {
            instant,
            positions,
            aspects,
            spec,
            png,
        })
    }
}

impl ChartContext<SwissEphemerisAdapter> {
    /// Context backed by the Swiss Ephemeris data named in the settings.
    pub fn with_swiss_ephemeris(settings: &WheelSettings) -> Result<Self, ChartError> {
        let adapter = SwissEphemerisAdapter::new(
            settings.ephemeris.path.clone(),
            settings.ephemeris.valid_from..=settings.ephemeris.valid_until,
        )?;
        Ok(Self::from_settings(settings, adapter)?)
    }
}
