use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{normalize_hours, Body, BodyPosition, GeoLocation};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::env;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::Mutex;
use swisseph::swe::{calc_ut, julday};

/// FLG_SWIEPH: read the Swiss Ephemeris data files.
const FLG_SWIEPH: u32 = 2;
/// FLG_EQUATORIAL: return right ascension / declination instead of ecliptic
/// longitude / latitude.
const FLG_EQUATORIAL: u32 = 2048;

/// Swiss Ephemeris body codes
const SWE_BODY_IDS: &[(Body, u32)] = &[
    (Body::Sun, 0),
    (Body::Moon, 1),
    (Body::Mercury, 2),
    (Body::Venus, 3),
    (Body::Mars, 4),
    (Body::Jupiter, 5),
    (Body::Saturn, 6),
    (Body::Uranus, 7),
    (Body::Neptune, 8),
    (Body::Pluto, 9),
];

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Swiss Ephemeris adapter implementation. Positions are geocentric.
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    window: RangeInclusive<DateTime<Utc>>,
    // The C library keeps global state between calls.
    calc_lock: Mutex<()>,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Resolution order: explicit path, `SWISS_EPHEMERIS_PATH`, then
    /// `/usr/local/share/swisseph`. Fails if the directory does not exist.
    pub fn new(
        ephemeris_path: Option<PathBuf>,
        window: RangeInclusive<DateTime<Utc>>,
    ) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.is_dir() {
            return Err(EphemerisError::DatasetUnavailable {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        // The library falls back to SE_EPHE_PATH when no path was set
        // through the API. Set once, before any lookup.
        env::set_var("SE_EPHE_PATH", &path);
        log::info!("Swiss Ephemeris data directory: {}", path.display());

        Ok(Self {
            ephemeris_path: path,
            window,
            calc_lock: Mutex::new(()),
        })
    }

    pub fn ephemeris_path(&self) -> &PathBuf {
        &self.ephemeris_path
    }

    /// Calculate the apparent equatorial position of a single body
    pub fn calc_body_position(
        &self,
        body: Body,
        instant: DateTime<Utc>,
    ) -> Result<BodyPosition, EphemerisError> {
        let body_code = SWE_BODY_IDS
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, code)| *code)
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body: body.name().to_string(),
                instant,
                message: "No Swiss Ephemeris code for body".to_string(),
            })?;

        let jd = datetime_to_julian_day(instant);
        let result = {
            let _guard = self.calc_lock.lock().unwrap_or_else(|e| e.into_inner());
            calc_ut(jd, body_code, FLG_SWIEPH | FLG_EQUATORIAL)
        }
        .map_err(|e| EphemerisError::CalculationFailed {
            body: body.name().to_string(),
            instant,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;

        let out = result.out;
        let right_ascension_deg = out[0];
        let declination = out[1];
        if !right_ascension_deg.is_finite() || !declination.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body: body.name().to_string(),
                instant,
                message: "Non-finite coordinates returned".to_string(),
            });
        }

        Ok(BodyPosition::new(
            body,
            normalize_hours(right_ascension_deg / 15.0),
            declination,
        ))
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn valid_range(&self) -> RangeInclusive<DateTime<Utc>> {
        self.window.clone()
    }

    // Geocentric apparent positions; the observer is only logged. The
    // parallax this skips is under a pixel except for the Moon.
    fn resolve_positions(
        &self,
        observer: &GeoLocation,
        instant: DateTime<Utc>,
    ) -> Result<Vec<BodyPosition>, EphemerisError> {
        self.check_range(instant)?;
        log::debug!(
            "Resolving {} bodies at {} for observer ({:.4}, {:.4})",
            Body::ALL.len(),
            instant,
            observer.lat,
            observer.lon
        );
        Body::ALL
            .iter()
            .map(|body| self.calc_body_position(*body, instant))
            .collect()
    }
}

/// Convert UTC datetime to Julian Day
fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal =
        dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;

    // GREG_CAL = 1
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, 1)
}
