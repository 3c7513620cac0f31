pub mod polar;
pub mod rings;

pub use polar::WheelGeometry;
pub use rings::{build_house_divider_items, build_static_zodiac_items};
