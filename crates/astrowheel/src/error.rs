use crate::ephemeris::EphemerisError;
use crate::rendering::RenderError;
use thiserror::Error;

/// Everything a chart request can fail with
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid chart request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ChartError {
    /// True when the instant was outside the ephemeris window
    pub fn is_input_range(&self) -> bool {
        matches!(self, ChartError::Ephemeris(EphemerisError::InputRange { .. }))
    }
}
