use crate::error::ChartError;
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Observation instant as sent by a caller. Every field is optional; unless
/// all five are present the chart is drawn for "now".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

impl ChartRequest {
    pub fn now() -> Self {
        Self::default()
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            year: Some(instant.year()),
            month: Some(instant.month()),
            day: Some(instant.day()),
            hour: Some(instant.hour()),
            minute: Some(instant.minute()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        serde_json::from_str(json).map_err(|e| ChartError::InvalidRequest(e.to_string()))
    }

    /// Resolve to a UTC instant at minute resolution, using `now` when any
    /// field is missing.
    pub fn instant(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, ChartError> {
        let (year, month, day, hour, minute) =
            match (self.year, self.month, self.day, self.hour, self.minute) {
                (Some(y), Some(mo), Some(d), Some(h), Some(mi)) => (y, mo, d, h, mi),
                _ => (now.year(), now.month(), now.day(), now.hour(), now.minute()),
            };

        Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .ok_or_else(|| {
                ChartError::InvalidRequest(format!(
                    "{:04}-{:02}-{:02} {:02}:{:02} is not a valid UTC date and time",
                    year, month, day, hour, minute
                ))
            })
    }
}
