use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Tel Aviv, the observer used when nothing else is configured.
pub const DEFAULT_LATITUDE: f64 = 32.0853;
pub const DEFAULT_LONGITUDE: f64 = 34.7818;

pub const DEFAULT_ORB_DEGREES: f64 = 4.0;
pub const DEFAULT_CANVAS_SIZE: u32 = 1400;

/// Observer location in degrees (north and east positive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverSettings {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisDataSettings {
    /// Directory holding the Swiss Ephemeris data files. `None` defers to
    /// `SWISS_EPHEMERIS_PATH` and then the system default.
    pub path: Option<PathBuf>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub canvas_size: u32,
    pub font_path: Option<PathBuf>,
}

/// Fully resolved, validated settings. Built once at startup and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSettings {
    pub observer: ObserverSettings,
    pub ephemeris: EphemerisDataSettings,
    pub orb_degrees: f64,
    pub render: RenderSettings,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            observer: ObserverSettings {
                latitude_deg: DEFAULT_LATITUDE,
                longitude_deg: DEFAULT_LONGITUDE,
            },
            ephemeris: EphemerisDataSettings {
                path: None,
                valid_from: default_valid_from(),
                valid_until: default_valid_until(),
            },
            orb_degrees: DEFAULT_ORB_DEGREES,
            render: RenderSettings {
                canvas_size: DEFAULT_CANVAS_SIZE,
                font_path: None,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ObserverToml {
    #[serde(default = "default_latitude")]
    latitude: f64,
    #[serde(default = "default_longitude")]
    longitude: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default)]
    valid_from: Option<DateTime<Utc>>,
    #[serde(default)]
    valid_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AspectsToml {
    #[serde(default)]
    orb_degrees: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RenderToml {
    #[serde(default)]
    canvas_size: Option<u32>,
    #[serde(default)]
    font_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    observer: Option<ObserverToml>,
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
    #[serde(default)]
    aspects: Option<AspectsToml>,
    #[serde(default)]
    render: Option<RenderToml>,
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

// DE421 coverage.
fn default_valid_from() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn default_valid_until() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2050, 12, 31, 23, 59, 59)
        .single()
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Try the usual relative locations for `configs/wheel.toml`.
pub fn read_wheel_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/wheel.toml", "../../configs/wheel.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("Loaded wheel config from {}", p);
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load wheel.toml from {:?}", paths);
}

/// Parse and validate settings from TOML text. Absent sections fall back to
/// the built-in defaults.
pub fn parse_wheel_settings(text: &str) -> anyhow::Result<WheelSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse wheel.toml: {e}"))?;
    let defaults = WheelSettings::default();

    let observer = root
        .observer
        .map(|o| ObserverSettings {
            latitude_deg: o.latitude,
            longitude_deg: o.longitude,
        })
        .unwrap_or(defaults.observer);

    let eph = root.ephemeris.unwrap_or_default();
    let ephemeris = EphemerisDataSettings {
        path: eph.path,
        valid_from: eph.valid_from.unwrap_or(defaults.ephemeris.valid_from),
        valid_until: eph.valid_until.unwrap_or(defaults.ephemeris.valid_until),
    };

    let orb_degrees = root
        .aspects
        .and_then(|a| a.orb_degrees)
        .unwrap_or(defaults.orb_degrees);

    let render = root.render.unwrap_or_default();
    let render = RenderSettings {
        canvas_size: render.canvas_size.unwrap_or(defaults.render.canvas_size),
        font_path: render.font_path,
    };

    let settings = WheelSettings {
        observer,
        ephemeris,
        orb_degrees,
        render,
    };
    validate_wheel_settings(&settings)?;
    Ok(settings)
}

pub fn validate_wheel_settings(settings: &WheelSettings) -> anyhow::Result<()> {
    let ObserverSettings {
        latitude_deg,
        longitude_deg,
    } = settings.observer;
    if !(-90.0..=90.0).contains(&latitude_deg) {
        anyhow::bail!("observer.latitude must be within [-90, 90], got {latitude_deg}");
    }
    if !(-180.0..=180.0).contains(&longitude_deg) {
        anyhow::bail!("observer.longitude must be within [-180, 180], got {longitude_deg}");
    }
    if settings.ephemeris.valid_from >= settings.ephemeris.valid_until {
        anyhow::bail!(
            "ephemeris.valid_from ({}) must precede ephemeris.valid_until ({})",
            settings.ephemeris.valid_from,
            settings.ephemeris.valid_until
        );
    }
    if !settings.orb_degrees.is_finite() || settings.orb_degrees < 0.0 {
        anyhow::bail!("aspects.orb_degrees must be a non-negative number");
    }
    // Orb bands around 60/90/120 stay disjoint below 15 degrees.
    if settings.orb_degrees >= 15.0 {
        anyhow::bail!(
            "aspects.orb_degrees must be below 15 so aspect bands do not overlap, got {}",
            settings.orb_degrees
        );
    }
    if settings.render.canvas_size < 64 {
        anyhow::bail!(
            "render.canvas_size must be at least 64 pixels, got {}",
            settings.render.canvas_size
        );
    }
    if let Some(font) = &settings.render.font_path {
        if !font.exists() {
            anyhow::bail!("render.font_path does not exist: {}", font.display());
        }
    }
    Ok(())
}

/// Load settings from an explicit file, or from the default locations, or
/// fall back to the built-in defaults when no file is found.
pub fn load_wheel_settings(path: Option<&Path>) -> anyhow::Result<WheelSettings> {
    let text = match path {
        Some(p) => fs::read_to_string(p)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", p.display()))?,
        None => match read_wheel_toml_text() {
            Ok(text) => text,
            Err(e) => {
                log::info!("{e}; using built-in defaults");
                return Ok(WheelSettings::default());
            }
        },
    };
    parse_wheel_settings(&text)
}
