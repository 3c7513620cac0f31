use crate::ephemeris::Body;

/// Drawn for any name outside the fixed body table.
pub const FALLBACK_GLYPH: &str = "?";

/// Symbol for a body name, `?` when the name is not a known body.
pub fn body_glyph(name: &str) -> &'static str {
    Body::from_name(name).map_or(FALLBACK_GLYPH, Body::glyph)
}
