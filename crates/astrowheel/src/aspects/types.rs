use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// Aspect kinds drawn on the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Square,
    Trine,
    Sextile,
}

impl AspectKind {
    /// Evaluation order; the first kind within orb wins.
    pub const PRIORITY: [AspectKind; 3] = [AspectKind::Square, AspectKind::Trine, AspectKind::Sextile];

    /// Exact angle in degrees
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Sextile => 60.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Sextile => "sextile",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a body on the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAngle {
    pub name: String,
    /// [0, 2π)
    pub theta_radians: f64,
}

impl ChartAngle {
    pub fn degrees(&self) -> f64 {
        self.theta_radians.to_degrees()
    }
}

/// Hours of right ascension to wheel radians, [0, 2π).
pub fn hours_to_theta(right_ascension_hours: f64) -> f64 {
    let theta = (right_ascension_hours / 24.0) * TAU;
    let theta = theta.rem_euclid(TAU);
    if theta >= TAU {
        0.0
    } else {
        theta
    }
}

/// An aspect between two distinct bodies. The pair is unordered; `body_a`
/// is the one that came first in the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectEdge {
    pub body_a: String,
    pub body_b: String,
    pub aspect_kind: AspectKind,
}

impl AspectEdge {
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.body_a == a && self.body_b == b) || (self.body_a == b && self.body_b == a)
    }
}

/// Settings for aspect calculations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectSettings {
    /// Inclusive tolerance around each aspect angle, in degrees
    pub orb_degrees: f64,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self { orb_degrees: 4.0 }
    }
}

/// Output of the aspect engine for one request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartAspects {
    /// One per body, input order
    pub angles: Vec<ChartAngle>,
    pub edges: Vec<AspectEdge>,
}

impl ChartAspects {
    pub fn angle_of(&self, name: &str) -> Option<&ChartAngle> {
        self.angles.iter().find(|a| a.name == name)
    }

    pub fn edge_between(&self, a: &str, b: &str) -> Option<&AspectEdge> {
        self.edges.iter().find(|e| e.connects(a, b))
    }
}
