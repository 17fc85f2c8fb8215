//! Plot-ready planform geometry.

use fin_core::units::in_metres;

use crate::FinModel;

/// Closed planform polygon and center-of-pressure marker in metres.
///
/// Points are `(radial, longitudinal)` with the radial axis measured from the
/// body centerline and the longitudinal axis pointing forward, so the fin
/// extends to negative longitudinal values behind the root leading edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanformOutline {
    pub corners: [(f64, f64); 5],
    pub center_of_pressure: (f64, f64),
}

impl PlanformOutline {
    /// Axis-aligned bounds of the polygon and marker: `(x_min, x_max, y_min, y_max)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let points = self
            .corners
            .iter()
            .copied()
            .chain(std::iter::once(self.center_of_pressure));
        points.fold(
            (
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
            ),
            |(x0, x1, y0, y1), (x, y)| (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
        )
    }
}

impl FinModel {
    pub fn planform_outline(&self) -> PlanformOutline {
        let cfg = &self.config;
        let rt = in_metres(cfg.tube_radius());
        let cr = in_metres(cfg.root_chord());
        let ct = in_metres(cfg.tip_chord());
        let b = in_metres(cfg.span());
        let xt = in_metres(self.tip_sweep_length());

        PlanformOutline {
            corners: [
                (rt, 0.0),
                (rt, -cr),
                (rt + b, -xt - ct),
                (rt + b, -xt),
                (rt, 0.0),
            ],
            center_of_pressure: (
                in_metres(self.spanwise_center_of_pressure()),
                -in_metres(self.chordwise_center_of_pressure()),
            ),
        }
    }
}
