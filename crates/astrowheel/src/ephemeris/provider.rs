use crate::ephemeris::types::{normalize_hours, Body, BodyPosition, GeoLocation};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Errors that can occur while resolving body positions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Instant {instant} is outside the ephemeris window {start} .. {end}")]
    InputRange {
        instant: DateTime<Utc>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("Ephemeris dataset unavailable at {path}: {message}")]
    DatasetUnavailable { path: String, message: String },
    #[error("Failed to calculate position for {body} at {instant}: {message}")]
    CalculationFailed {
        body: String,
        instant: DateTime<Utc>,
        message: String,
    },
    #[error("Invalid position table: {0}")]
    InvalidTable(String),
}

/// Source of apparent positions for the fixed body set.
///
/// Implementations are loaded once and then only read, so a single provider
/// can serve concurrent requests.
pub trait EphemerisProvider: Send + Sync {
    /// Instants this provider can answer for (inclusive).
    fn valid_range(&self) -> RangeInclusive<DateTime<Utc>>;

    /// Positions for every body in `Body::ALL`, in that order.
    ///
    /// Providers may ignore `observer`: `SwissEphemerisAdapter` returns
    /// geocentric positions, which for the Moon can differ from the
    /// observer's topocentric view by up to about 1° of right ascension.
    fn resolve_positions(
        &self,
        observer: &GeoLocation,
        instant: DateTime<Utc>,
    ) -> Result<Vec<BodyPosition>, EphemerisError>;

    fn check_range(&self, instant: DateTime<Utc>) -> Result<(), EphemerisError> {
        let range = self.valid_range();
        if range.contains(&instant) {
            Ok(())
        } else {
            Err(EphemerisError::InputRange {
                instant,
                start: *range.start(),
                end: *range.end(),
            })
        }
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn valid_range(&self) -> RangeInclusive<DateTime<Utc>> {
        (**self).valid_range()
    }

    fn resolve_positions(
        &self,
        observer: &GeoLocation,
        instant: DateTime<Utc>,
    ) -> Result<Vec<BodyPosition>, EphemerisError> {
        (**self).resolve_positions(observer, instant)
    }
}

/// Provider backed by a precomputed table: the same positions for every
/// instant inside its window. Used for offline rendering and in tests.
#[derive(Debug, Clone)]
pub struct FixedEphemeris {
    positions: HashMap<Body, (f64, f64)>,
    window: RangeInclusive<DateTime<Utc>>,
}

impl FixedEphemeris {
    pub fn new(table: &[BodyPosition], window: RangeInclusive<DateTime<Utc>>) -> Result<Self, EphemerisError> {
        let mut positions = HashMap::new();
        for entry in table {
            let body = entry.body().ok_or_else(|| {
                EphemerisError::InvalidTable(format!("unknown body '{}'", entry.name))
            })?;
            if !entry.right_ascension_hours.is_finite() || !entry.declination_degrees.is_finite() {
                return Err(EphemerisError::InvalidTable(format!(
                    "non-finite coordinates for {}",
                    body
                )));
            }
            if !(-90.0..=90.0).contains(&entry.declination_degrees) {
                return Err(EphemerisError::InvalidTable(format!(
                    "declination {} out of range for {}",
                    entry.declination_degrees, body
                )));
            }
            if positions
                .insert(
                    body,
                    (
                        normalize_hours(entry.right_ascension_hours),
                        entry.declination_degrees,
                    ),
                )
                .is_some()
            {
                return Err(EphemerisError::InvalidTable(format!(
                    "duplicate entry for {}",
                    body
                )));
            }
        }
        Ok(Self { positions, window })
    }

    /// Parse a JSON array of `BodyPosition` records.
    pub fn from_json(json: &str, window: RangeInclusive<DateTime<Utc>>) -> Result<Self, EphemerisError> {
        let table: Vec<BodyPosition> = serde_json::from_str(json)
            .map_err(|e| EphemerisError::InvalidTable(e.to_string()))?;
        Self::new(&table, window)
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn valid_range(&self) -> RangeInclusive<DateTime<Utc>> {
        self.window.clone()
    }

    fn resolve_positions(
        &self,
        _observer: &GeoLocation,
        instant: DateTime<Utc>,
    ) -> Result<Vec<BodyPosition>, EphemerisError> {
        self.check_range(instant)?;
        Body::ALL
            .iter()
            .map(|body| {
                self.positions
                    .get(body)
                    .map(|(ra, dec)| BodyPosition::new(*body, *ra, *dec))
                    .ok_or_else(|| EphemerisError::CalculationFailed {
                        body: body.name().to_string(),
                        instant,
                        message: "no entry in position table".to_string(),
                    })
            })
            .collect()
    }
}
