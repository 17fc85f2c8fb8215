//! Closed-form (Barrowman-style) aerodynamics and structural loads for a single rocket fin.
//!
//! [`FinModel`] evaluates derived quantities over an immutable
//! [`FinConfiguration`]. Nothing is cached: every accessor recomputes from the
//! configuration and its explicit inputs, so the model can be shared freely
//! between threads.
//!
//! The force coefficients are referenced to the body-tube cross-section and
//! describe one fin. For three- or four-fin layouts the usual approach is to
//! multiply by a constant fin-count factor outside this crate.

pub mod configuration;
pub mod error;
pub mod flight;
pub mod loads;
pub mod planform;
pub mod sweep;

mod center_of_pressure;
mod geometry;
mod normal_force;

pub use configuration::FinConfiguration;
pub use error::{FinError, FinResult};
pub use flight::FlightCondition;
pub use loads::LoadReport;
pub use planform::PlanformOutline;

/// Evaluator for the fin's geometric, aerodynamic and load quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinModel {
    config: FinConfiguration,
}

impl FinModel {
    pub fn new(config: FinConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FinConfiguration {
        &self.config
    }
}

impl From<FinConfiguration> for FinModel {
    fn from(config: FinConfiguration) -> Self {
        Self::new(config)
    }
}
