use crate::aspects::types::{
    hours_to_theta, AspectEdge, AspectKind, AspectSettings, ChartAngle, ChartAspects,
};
use crate::ephemeris::types::BodyPosition;

/// Slack for float noise from the hours -> radians -> degrees round trip.
const ANGLE_EPSILON: f64 = 1e-9;

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    settings: AspectSettings,
}

impl AspectCalculator {
    /// Create a calculator with the default 4° orb
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AspectSettings {
        &self.settings
    }

    /// Wheel angle for one body. Declination is ignored.
    pub fn chart_angle(&self, position: &BodyPosition) -> ChartAngle {
        ChartAngle {
            name: position.name.clone(),
            theta_radians: hours_to_theta(position.right_ascension_hours),
        }
    }

    pub fn chart_angles(&self, positions: &[BodyPosition]) -> Vec<ChartAngle> {
        positions.iter().map(|p| self.chart_angle(p)).collect()
    }

    /// Classify the separation between two wheel angles given in degrees.
    ///
    /// The separation is `|a - b| mod 360` without folding into [0, 180],
    /// and candidates are tried in `AspectKind::PRIORITY` order.
    pub fn classify(&self, theta_a_deg: f64, theta_b_deg: f64) -> Option<AspectKind> {
        let diff = (theta_a_deg - theta_b_deg).abs() % 360.0;
        AspectKind::PRIORITY
            .into_iter()
            .find(|kind| (diff - kind.angle()).abs() <= self.settings.orb_degrees + ANGLE_EPSILON)
    }

    /// Compute wheel angles and aspect edges for a request.
    ///
    /// Each unordered pair is evaluated once, earlier body first, and yields at
    /// most one edge.
    pub fn compute(&self, positions: &[BodyPosition]) -> ChartAspects {
        let angles = self.chart_angles(positions);

        let mut edges = Vec::new();
        for i in 0..angles.len() {
            for j in (i + 1)..angles.len() {
                let a = &angles[i];
                let b = &angles[j];
                if let Some(aspect_kind) = self.classify(a.degrees(), b.degrees()) {
                    edges.push(AspectEdge {
                        body_a: a.name.clone(),
                        body_b: b.name.clone(),
                        aspect_kind,
                    });
                }
            }
        }

        log::debug!(
            "Aspect engine: {} bodies, {} aspects (orb {}°)",
            angles.len(),
            edges.len(),
            self.settings.orb_degrees
        );

        ChartAspects { angles, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separation_is_not_folded() {
        let calc = AspectCalculator::new();
        // 270° apart is not a square under the unfolded rule.
        assert_eq!(calc.classify(10.0, 280.0), None);
        assert_eq!(calc.classify(280.0, 10.0), None);
    }

    #[test]
    fn zero_orb_still_matches_exact() {
        let calc = AspectCalculator::with_settings(AspectSettings { orb_degrees: 0.0 });
        assert_eq!(calc.classify(0.0, 120.0), Some(AspectKind::Trine));
        assert_eq!(calc.classify(0.0, 120.5), None);
    }
}
