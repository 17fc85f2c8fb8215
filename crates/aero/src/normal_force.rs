use fin_core::units::{Area, Ratio, in_radians, scalar};

use crate::FinModel;
use crate::error::{FinError, FinResult};

impl FinModel {
    /// Subsonic normal-force-coefficient slope (per radian, per unit reference area)
    /// with body interference and Prandtl-Glauert compressibility correction.
    ///
    /// Mach 1 and above are rejected rather than producing an imaginary beta.
    pub fn normal_force_coefficient_slope(&self, mach: f64) -> FinResult<f64> {
        if !mach.is_finite() || mach < 0.0 {
            return Err(FinError::InputDomain(format!(
                "Mach number must be finite and non-negative (got {mach})"
            )));
        }
        if mach >= 1.0 {
            return Err(FinError::FlowRegime { mach });
        }

        let cfg = &self.config;
        let beta = (1.0 - mach * mach).sqrt();
        let k = self.body_interference_factor();
        let ar = self.aspect_ratio();
        let cos_sweep = in_radians(cfg.mid_chord_sweep()).cos();

        let rt = cfg.tube_radius();
        let rt_sq: Area = rt * rt;
        let planform_over_ref: Ratio = (self.chord_sum() * cfg.span()) / rt_sq;

        let numerator = ar * scalar(planform_over_ref);
        let denominator = 2.0 + (4.0 + ar / cos_sweep).sqrt();

        Ok((1.0 / beta) * k * numerator / denominator)
    }
}
