//! Immutable fin geometry.

use std::f64::consts::FRAC_PI_2;

use fin_core::constants::SONIC_SPEED_M_S;
use fin_core::units::{
    Angle, Length, Velocity, in_metres, in_metres_per_second, in_radians, metres_per_second,
};

use crate::error::{FinError, FinResult};

/// Planform and body dimensions of a single fin.
///
/// Values are validated on construction and never change afterwards; the
/// `with_*` methods build a fresh, re-validated configuration.
///
/// The mid-chord sweep must lie in `[0, π/2)`: forward (negative) sweep is
/// rejected with [`FinError::Configuration`]. A tip leading edge ahead of the
/// root leading edge is still possible when the tip chord is long enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinConfiguration {
    root_chord: Length,
    tip_chord: Length,
    span: Length,
    tube_radius: Length,
    mid_chord_sweep: Angle,
    sonic_speed: Velocity,
}

impl FinConfiguration {
    /// Build a configuration using the reference speed of sound.
    pub fn new(
        root_chord: Length,
        tip_chord: Length,
        span: Length,
        tube_radius: Length,
        mid_chord_sweep: Angle,
    ) -> FinResult<Self> {
        Self {
            root_chord,
            tip_chord,
            span,
            tube_radius,
            mid_chord_sweep,
            sonic_speed: metres_per_second(SONIC_SPEED_M_S),
        }
        .validated()
    }

    pub fn root_chord(&self) -> Length {
        self.root_chord
    }

    pub fn tip_chord(&self) -> Length {
        self.tip_chord
    }

    pub fn span(&self) -> Length {
        self.span
    }

    pub fn tube_radius(&self) -> Length {
        self.tube_radius
    }

    pub fn mid_chord_sweep(&self) -> Angle {
        self.mid_chord_sweep
    }

    pub fn sonic_speed(&self) -> Velocity {
        self.sonic_speed
    }

    pub fn with_root_chord(self, root_chord: Length) -> FinResult<Self> {
        Self { root_chord, ..self }.validated()
    }

    pub fn with_tip_chord(self, tip_chord: Length) -> FinResult<Self> {
        Self { tip_chord, ..self }.validated()
    }

    pub fn with_span(self, span: Length) -> FinResult<Self> {
        Self { span, ..self }.validated()
    }

    pub fn with_tube_radius(self, tube_radius: Length) -> FinResult<Self> {
        Self {
            tube_radius,
            ..self
        }
        .validated()
    }

    pub fn with_mid_chord_sweep(self, mid_chord_sweep: Angle) -> FinResult<Self> {
        Self {
            mid_chord_sweep,
            ..self
        }
        .validated()
    }

    /// Replace the reference speed of sound. It stays fixed for every
    /// evaluation made with the resulting configuration.
    pub fn with_sonic_speed(self, sonic_speed: Velocity) -> FinResult<Self> {
        Self {
            sonic_speed,
            ..self
        }
        .validated()
    }

    fn validated(self) -> FinResult<Self> {
        let cr = in_metres(self.root_chord);
        let ct = in_metres(self.tip_chord);
        let b = in_metres(self.span);
        let rt = in_metres(self.tube_radius);
        let sweep = in_radians(self.mid_chord_sweep);
        let a = in_metres_per_second(self.sonic_speed);

        for (label, value) in [
            ("root chord", cr),
            ("tip chord", ct),
            ("span", b),
            ("tube radius", rt),
            ("mid-chord sweep", sweep),
            ("sonic speed", a),
        ] {
            if !value.is_finite() {
                return Err(FinError::Configuration(format!("{label} must be finite")));
            }
        }

        if cr <= 0.0 {
            return Err(FinError::Configuration(format!(
                "root chord must be positive (got {cr} m)"
            )));
        }
        if ct < 0.0 {
            return Err(FinError::Configuration(format!(
                "tip chord must not be negative (got {ct} m)"
            )));
        }
        if cr + ct <= 0.0 {
            return Err(FinError::Configuration(
                "root and tip chord must sum to a positive length".to_string(),
            ));
        }
        if b <= 0.0 {
            return Err(FinError::Configuration(format!(
                "span must be positive (got {b} m)"
            )));
        }
        if rt <= 0.0 {
            return Err(FinError::Configuration(format!(
                "tube radius must be positive (got {rt} m)"
            )));
        }
        if !(0.0..FRAC_PI_2).contains(&sweep) {
            return Err(FinError::Configuration(format!(
                "mid-chord sweep must lie in [0, pi/2) rad (got {sweep} rad)"
            )));
        }
        if a <= 0.0 {
            return Err(FinError::Configuration(format!(
                "sonic speed must be positive (got {a} m/s)"
            )));
        }

        Ok(self)
    }
}
