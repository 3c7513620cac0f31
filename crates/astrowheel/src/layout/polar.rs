use crate::rendering::primitives::Point;

/// Rotation that puts wheel angle 0 at chart-West (screen left).
pub const WEST_SHIFT_DEGREES: f32 = 180.0;

/// Polar to canvas coordinates. Angles grow counter-clockwise on screen,
/// so the y term is flipped for a y-down raster.
pub fn get_point_position(
    cx: f32,
    cy: f32,
    radius: f32,
    angle_degrees: f32,
    shift_degrees: f32,
) -> Point {
    let angle_rad = (shift_degrees + angle_degrees).to_radians();
    Point {
        x: cx + radius * angle_rad.cos(),
        y: cy - radius * angle_rad.sin(),
    }
}

/// Maps wheel coordinates (radius fraction, angle) onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub center: Point,
    /// Pixels per unit of wheel radius
    pub radius: f32,
}

impl WheelGeometry {
    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn point(&self, fraction: f32, angle_degrees: f64) -> Point {
        get_point_position(
            self.center.x,
            self.center.y,
            self.radius * fraction,
            angle_degrees as f32,
            WEST_SHIFT_DEGREES,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, x: f32, y: f32) -> bool {
        (a.x - x).abs() < 1e-3 && (a.y - y).abs() < 1e-3
    }

    #[test]
    fn zero_points_west() {
        let geo = WheelGeometry::new(Point { x: 100.0, y: 100.0 }, 50.0);
        assert!(close(geo.point(1.0, 0.0), 50.0, 100.0));
    }

    #[test]
    fn quarter_turn_points_down() {
        let geo = WheelGeometry::new(Point { x: 100.0, y: 100.0 }, 50.0);
        assert!(close(geo.point(1.0, 90.0), 100.0, 150.0));
        assert!(close(geo.point(1.0, 180.0), 150.0, 100.0));
        assert!(close(geo.point(1.0, 270.0), 100.0, 50.0));
    }
}
