//! Independent load evaluations over a range of airspeeds.

use fin_core::units::{MassDensity, Velocity, in_metres_per_second, metres_per_second};

use crate::FinModel;
use crate::error::{FinError, FinResult};
use crate::flight::FlightCondition;
use crate::loads::LoadReport;

/// One point of an airspeed sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSample {
    pub airspeed_m_s: f64,
    pub report: LoadReport,
}

/// Evaluate `steps` evenly spaced airspeeds from `start` to `stop` inclusive.
///
/// Each point is a separate evaluation. The first airspeed that falls outside
/// the subsonic regime aborts the sweep with its error.
pub fn airspeed_sweep(
    model: &FinModel,
    start: Velocity,
    stop: Velocity,
    steps: usize,
    gust_speed: Velocity,
    air_density: MassDensity,
) -> FinResult<Vec<SweepSample>> {
    let v0 = in_metres_per_second(start);
    let v1 = in_metres_per_second(stop);
    if steps == 0 {
        return Err(FinError::InputDomain(
            "sweep needs at least one step".to_string(),
        ));
    }
    if !(v0.is_finite() && v1.is_finite()) || v0 <= 0.0 || v1 < v0 {
        return Err(FinError::InputDomain(format!(
            "sweep range must satisfy 0 < start <= stop (got {v0}..{v1} m/s)"
        )));
    }

    let dv = if steps > 1 {
        (v1 - v0) / (steps - 1) as f64
    } else {
        0.0
    };

    (0..steps)
        .map(|i| {
            let v = v0 + dv * i as f64;
            let condition = FlightCondition::new(metres_per_second(v))
                .with_gust(gust_speed)
                .with_density(air_density);
            Ok(SweepSample {
                airspeed_m_s: v,
                report: model.evaluate(&condition)?,
            })
        })
        .collect()
}
