use fin_core::units::{Length, Ratio, scalar};

use crate::FinModel;

impl FinModel {
    /// Distance from the body axis to the fin's aerodynamic center.
    pub fn spanwise_center_of_pressure(&self) -> Length {
        let cfg = &self.config;
        cfg.tube_radius() + cfg.span() * (self.taper_weight() / 3.0)
    }

    /// Distance of the aerodynamic center aft of the root leading edge.
    ///
    /// Only used for reporting and plotting; the load formulas take their
    /// moment arm from the spanwise coordinate.
    pub fn chordwise_center_of_pressure(&self) -> Length {
        let cfg = &self.config;
        let cr = cfg.root_chord();
        let ct = cfg.tip_chord();
        let sum = self.chord_sum();
        let taper_term: Ratio = (cr * ct) / (sum * sum);
        let mean_term = sum - sum * scalar(taper_term);
        self.tip_sweep_length() * (self.taper_weight() / 3.0) + mean_term / 6.0
    }
}
