//! Flight condition supplied to the load formulas.

use fin_core::constants::{DEFAULT_GUST_SPEED_M_S, SEA_LEVEL_DENSITY_KG_M3};
use fin_core::units::{
    MassDensity, Velocity, in_kilograms_per_cubic_metre, in_metres_per_second,
    kilograms_per_cubic_metre, metres_per_second,
};

use crate::error::{FinError, FinResult};

/// Forward airspeed, lateral gust and air density for a single load evaluation.
///
/// Gust and density default to [`DEFAULT_GUST_SPEED_M_S`] and
/// [`SEA_LEVEL_DENSITY_KG_M3`]; they are ordinary fields so callers can see
/// exactly which assumptions a report used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightCondition {
    pub airspeed: Velocity,
    pub gust_speed: Velocity,
    pub air_density: MassDensity,
}

impl FlightCondition {
    /// Condition at `airspeed` with the default gust and sea-level density.
    pub fn new(airspeed: Velocity) -> Self {
        Self {
            airspeed,
            gust_speed: metres_per_second(DEFAULT_GUST_SPEED_M_S),
            air_density: kilograms_per_cubic_metre(SEA_LEVEL_DENSITY_KG_M3),
        }
    }

    pub fn with_gust(self, gust_speed: Velocity) -> Self {
        Self { gust_speed, ..self }
    }

    pub fn with_density(self, air_density: MassDensity) -> Self {
        Self {
            air_density,
            ..self
        }
    }
}

pub(crate) fn check_airspeed(airspeed: Velocity) -> FinResult<f64> {
    let v = in_metres_per_second(airspeed);
    if !v.is_finite() || v <= 0.0 {
        return Err(FinError::InputDomain(format!(
            "airspeed must be positive and finite (got {v} m/s)"
        )));
    }
    Ok(v)
}

pub(crate) fn check_density(density: MassDensity) -> FinResult<f64> {
    let rho = in_kilograms_per_cubic_metre(density);
    if !rho.is_finite() || rho <= 0.0 {
        return Err(FinError::InputDomain(format!(
            "air density must be positive and finite (got {rho} kg/m³)"
        )));
    }
    Ok(rho)
}

pub(crate) fn check_gust(gust: Velocity) -> FinResult<f64> {
    let g = in_metres_per_second(gust);
    if !g.is_finite() {
        return Err(FinError::InputDomain(
            "gust speed must be finite".to_string(),
        ));
    }
    Ok(g)
}
