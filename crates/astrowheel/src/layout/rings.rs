/// Zodiac signs in wheel order
const SIGNS: &[&str] = &[
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// Number of equal sectors on the wheel
pub const SECTOR_COUNT: usize = 12;
pub const SECTOR_DEGREES: f64 = 360.0 / SECTOR_COUNT as f64;

/// Sign ring item
#[derive(Debug, Clone, PartialEq)]
pub struct SignRingItem {
    pub label: &'static str,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl SignRingItem {
    /// Angle where the label sits
    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }
}

/// House divider: a radial line at the start of each sector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseRingItem {
    pub deg: f64,
}

/// Build static zodiac items (12 signs)
pub fn build_static_zodiac_items() -> Vec<SignRingItem> {
    SIGNS
        .iter()
        .enumerate()
        .map(|(i, label)| SignRingItem {
            label,
            start_deg: i as f64 * SECTOR_DEGREES,
            end_deg: (i + 1) as f64 * SECTOR_DEGREES,
        })
        .collect()
}

/// Build the 12 equal house dividers, starting at angle 0
pub fn build_house_divider_items() -> Vec<HouseRingItem> {
    (0..SECTOR_COUNT)
        .map(|i| HouseRingItem {
            deg: i as f64 * SECTOR_DEGREES,
        })
        .collect()
}
