//! Constants and dimensioned quantity helpers shared across the fin loads workspace.

/// Reference values expressed in SI units.
pub mod constants {
    /// Speed of sound assumed for every flow evaluation (m/s).
    pub const SONIC_SPEED_M_S: f64 = 340.0;
    /// Lateral gust used for design-load evaluations (m/s).
    pub const DEFAULT_GUST_SPEED_M_S: f64 = 9.0;
    /// Sea-level air density (kg/m³).
    pub const SEA_LEVEL_DENSITY_KG_M3: f64 = 1.225;
    /// Millimetres per metre.
    pub const MM_PER_M: f64 = 1_000.0;
}

/// Quantity types and unit conversion helpers.
///
/// The model works with `uom` SI quantities throughout; raw `f64` magnitudes
/// only appear at the edges (configuration files, reports, plots).
pub mod units {
    pub use uom::si::f64::{
        Angle, Area, Force, Length, MassDensity, Pressure, Ratio, Torque, Velocity,
    };

    use uom::si::angle::{degree, radian};
    use uom::si::area::square_meter;
    use uom::si::force::newton;
    use uom::si::length::{meter, millimeter};
    use uom::si::mass_density::kilogram_per_cubic_meter;
    use uom::si::pressure::pascal;
    use uom::si::ratio::ratio;
    use uom::si::torque::newton_meter;
    use uom::si::velocity::meter_per_second;

    use crate::constants::MM_PER_M;

    #[inline]
    pub fn metres(v: f64) -> Length {
        Length::new::<meter>(v)
    }

    #[inline]
    pub fn millimetres(v: f64) -> Length {
        Length::new::<millimeter>(v)
    }

    #[inline]
    pub fn radians(v: f64) -> Angle {
        Angle::new::<radian>(v)
    }

    #[inline]
    pub fn degrees(v: f64) -> Angle {
        Angle::new::<degree>(v)
    }

    #[inline]
    pub fn metres_per_second(v: f64) -> Velocity {
        Velocity::new::<meter_per_second>(v)
    }

    #[inline]
    pub fn kilograms_per_cubic_metre(v: f64) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(v)
    }

    #[inline]
    pub fn newtons(v: f64) -> Force {
        Force::new::<newton>(v)
    }

    #[inline]
    pub fn newton_metres(v: f64) -> Torque {
        Torque::new::<newton_meter>(v)
    }

    /// Magnitude of a length in metres.
    #[inline]
    pub fn in_metres(v: Length) -> f64 {
        v.get::<meter>()
    }

    /// Magnitude of a length in millimetres.
    #[inline]
    pub fn in_millimetres(v: Length) -> f64 {
        v.get::<millimeter>()
    }

    #[inline]
    pub fn in_radians(v: Angle) -> f64 {
        v.get::<radian>()
    }

    #[inline]
    pub fn in_degrees(v: Angle) -> f64 {
        v.get::<degree>()
    }

    #[inline]
    pub fn in_square_metres(v: Area) -> f64 {
        v.get::<square_meter>()
    }

    #[inline]
    pub fn in_metres_per_second(v: Velocity) -> f64 {
        v.get::<meter_per_second>()
    }

    #[inline]
    pub fn in_kilograms_per_cubic_metre(v: MassDensity) -> f64 {
        v.get::<kilogram_per_cubic_meter>()
    }

    #[inline]
    pub fn in_pascals(v: Pressure) -> f64 {
        v.get::<pascal>()
    }

    #[inline]
    pub fn in_newtons(v: Force) -> f64 {
        v.get::<newton>()
    }

    #[inline]
    pub fn in_newton_metres(v: Torque) -> f64 {
        v.get::<newton_meter>()
    }

    /// Bending moments are quoted in N·mm on fin drawings.
    #[inline]
    pub fn in_newton_millimetres(v: Torque) -> f64 {
        v.get::<newton_meter>() * MM_PER_M
    }

    /// Value of a dimensionless quantity.
    #[inline]
    pub fn scalar(v: Ratio) -> f64 {
        v.get::<ratio>()
    }
}
