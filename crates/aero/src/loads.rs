//! Gust-induced loads on the fin.

use serde::Serialize;

use fin_core::units::{
    Angle, Force, Length, MassDensity, Pressure, Ratio, Torque, Velocity, in_metres, in_newtons,
    in_newton_metres, in_newton_millimetres, in_pascals, in_radians, newton_metres, newtons, radians,
    scalar,
};

use crate::FinModel;
use crate::error::FinResult;
use crate::flight::{FlightCondition, check_airspeed, check_density, check_gust};

impl FinModel {
    /// ½·ρ·V².
    pub fn dynamic_pressure(&self, airspeed: Velocity, density: MassDensity) -> FinResult<Pressure> {
        check_airspeed(airspeed)?;
        check_density(density)?;
        Ok(density * airspeed * airspeed * 0.5)
    }

    /// Angle of attack induced by a lateral gust on top of the forward airspeed.
    pub fn angle_of_attack(&self, airspeed: Velocity, gust: Velocity) -> FinResult<Angle> {
        let v = check_airspeed(airspeed)?;
        let g = check_gust(gust)?;
        Ok(radians((g / v).atan()))
    }

    pub fn mach_number(&self, airspeed: Velocity) -> FinResult<f64> {
        check_airspeed(airspeed)?;
        let mach: Ratio = airspeed / self.config.sonic_speed();
        Ok(scalar(mach))
    }

    /// Incremental normal force from the gust angle of attack. The fin is
    /// symmetric, so there is no lift at zero incidence.
    pub fn lift_force(&self, condition: &FlightCondition) -> FinResult<Force> {
        let q = self.dynamic_pressure(condition.airspeed, condition.air_density)?;
        let alpha = self.angle_of_attack(condition.airspeed, condition.gust_speed)?;
        let cna = self.normal_force_coefficient_slope(self.mach_number(condition.airspeed)?)?;
        Ok(q * self.reference_area() * (cna * in_radians(alpha)))
    }

    /// Moment about the root-chord attachment line at the tube surface.
    pub fn root_bending_moment(&self, condition: &FlightCondition) -> FinResult<Torque> {
        let lift = self.lift_force(condition)?;
        Ok(self.moment_from_lift(lift))
    }

    /// Tip point load producing the same root bending moment.
    pub fn equivalent_tip_load(&self, condition: &FlightCondition) -> FinResult<Force> {
        let moment = self.root_bending_moment(condition)?;
        Ok(self.tip_load_from_moment(moment))
    }

    /// Evaluate every flow-dependent quantity for one condition.
    pub fn evaluate(&self, condition: &FlightCondition) -> FinResult<LoadReport> {
        let mach = self.mach_number(condition.airspeed)?;
        let dynamic_pressure = self.dynamic_pressure(condition.airspeed, condition.air_density)?;
        let angle_of_attack = self.angle_of_attack(condition.airspeed, condition.gust_speed)?;
        let cn_alpha = self.normal_force_coefficient_slope(mach)?;
        let lift = self.lift_force(condition)?;
        let moment = self.moment_from_lift(lift);
        let tip_load = self.tip_load_from_moment(moment);

        Ok(LoadReport {
            mach,
            dynamic_pressure_pa: in_pascals(dynamic_pressure),
            angle_of_attack_rad: in_radians(angle_of_attack),
            cn_alpha,
            lift_force_n: in_newtons(lift),
            root_bending_moment_n_m: in_newton_metres(moment),
            root_bending_moment_n_mm: in_newton_millimetres(moment),
            equivalent_tip_load_n: in_newtons(tip_load),
        })
    }

    /// Span of the exposed fin between the tube surface and the center of pressure.
    pub fn moment_arm(&self) -> Length {
        self.spanwise_center_of_pressure() - self.config.tube_radius()
    }

    // uom types torque with an angle kind, so the product is built from magnitudes.
    fn moment_from_lift(&self, lift: Force) -> Torque {
        newton_metres(in_newtons(lift) * in_metres(self.moment_arm()))
    }

    fn tip_load_from_moment(&self, moment: Torque) -> Force {
        newtons(in_newton_metres(moment) / in_metres(self.config.span()))
    }
}

/// Flow-dependent quantities for one flight condition, in SI magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadReport {
    pub mach: f64,
    pub dynamic_pressure_pa: f64,
    pub angle_of_attack_rad: f64,
    pub cn_alpha: f64,
    pub lift_force_n: f64,
    pub root_bending_moment_n_m: f64,
    pub root_bending_moment_n_mm: f64,
    pub equivalent_tip_load_n: f64,
}
