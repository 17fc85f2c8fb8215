//! Geometric primitives that depend on the configuration alone.

use std::f64::consts::PI;

use fin_core::units::{Area, Length, Ratio, in_radians, scalar};

use crate::FinModel;

impl FinModel {
    /// Body-tube cross-section, the reference area for the force coefficients.
    pub fn reference_area(&self) -> Area {
        let rt = self.config.tube_radius();
        rt * rt * PI
    }

    /// Trapezoidal planform area of the exposed fin.
    pub fn planform_area(&self) -> Area {
        (self.chord_sum() * self.config.span()) * 0.5
    }

    /// 2·b / (c_r + c_t).
    pub fn aspect_ratio(&self) -> f64 {
        let ar: Ratio = self.config.span() * 2.0 / self.chord_sum();
        scalar(ar)
    }

    /// (b + r_t) / r_t.
    pub fn tau(&self) -> f64 {
        let rt = self.config.tube_radius();
        let tau: Ratio = (self.config.span() + rt) / rt;
        scalar(tau)
    }

    /// Lift amplification of the fin due to the adjacent body tube.
    pub fn body_interference_factor(&self) -> f64 {
        1.0 + 1.0 / self.tau()
    }

    /// Longitudinal offset of the tip leading edge behind the root leading edge.
    ///
    /// Negative when the tip leading edge sits ahead of the root leading edge.
    pub fn tip_sweep_length(&self) -> Length {
        let cfg = &self.config;
        let sweep_tan = in_radians(cfg.mid_chord_sweep()).tan();
        cfg.root_chord() * 0.5 + cfg.span() * sweep_tan - cfg.tip_chord() * 0.5
    }

    pub(crate) fn chord_sum(&self) -> Length {
        self.config.root_chord() + self.config.tip_chord()
    }

    /// (c_r + 2·c_t) / (c_r + c_t), the taper weighting shared by both
    /// center-of-pressure coordinates.
    pub(crate) fn taper_weight(&self) -> f64 {
        let cfg = &self.config;
        let w: Ratio = (cfg.root_chord() + cfg.tip_chord() * 2.0) / self.chord_sum();
        scalar(w)
    }
}
