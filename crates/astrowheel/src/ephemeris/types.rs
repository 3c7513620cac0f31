use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// The fixed set of bodies placed on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Body table: identifier, glyph. Order is the resolution and layering order.
const BODY_TABLE: &[(Body, &str, &str)] = &[
    (Body::Sun, "Sun", "☉"),
    (Body::Moon, "Moon", "☽"),
    (Body::Mercury, "Mercury", "☿"),
    (Body::Venus, "Venus", "♀"),
    (Body::Mars, "Mars", "♂"),
    (Body::Jupiter, "Jupiter", "♃"),
    (Body::Saturn, "Saturn", "♄"),
    (Body::Uranus, "Uranus", "♅"),
    (Body::Neptune, "Neptune", "♆"),
    (Body::Pluto, "Pluto", "♇"),
];

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    fn entry(self) -> &'static (Body, &'static str, &'static str) {
        // BODY_TABLE is in declaration order.
        &BODY_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn glyph(self) -> &'static str {
        self.entry().2
    }

    /// Case-insensitive lookup by identifier.
    pub fn from_name(name: &str) -> Option<Body> {
        BODY_TABLE
            .iter()
            .find(|(_, id, _)| id.eq_ignore_ascii_case(name.trim()))
            .map(|(body, _, _)| *body)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apparent equatorial position of one body at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Body identifier, normally one of `Body::name()`
    pub name: String,
    /// Right ascension in hours, [0, 24)
    pub right_ascension_hours: f64,
    /// Declination in degrees, [-90, 90]. Not used by the chart geometry.
    pub declination_degrees: f64,
}

impl BodyPosition {
    pub fn new(body: Body, right_ascension_hours: f64, declination_degrees: f64) -> Self {
        Self {
            name: body.name().to_string(),
            right_ascension_hours,
            declination_degrees,
        }
    }

    pub fn body(&self) -> Option<Body> {
        Body::from_name(&self.name)
    }
}

/// Wrap an hour angle into [0, 24).
pub fn normalize_hours(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(24.0);
    if wrapped >= 24.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_declaration_order() {
        for body in Body::ALL {
            assert_eq!(body.entry().0, body);
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Body::from_name("sun"), Some(Body::Sun));
        assert_eq!(Body::from_name(" PLUTO "), Some(Body::Pluto));
        assert_eq!(Body::from_name("Chiron"), None);
    }

    #[test]
    fn normalize_hours_wraps() {
        assert_eq!(normalize_hours(25.5), 1.5);
        assert_eq!(normalize_hours(-1.0), 23.0);
        assert_eq!(normalize_hours(0.0), 0.0);
        assert!(normalize_hours(-1e-18) < 24.0);
    }
}
