use thiserror::Error;

/// Failures raised by the fin model at the offending call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinError {
    #[error("invalid fin configuration: {0}")]
    Configuration(String),
    #[error("Mach {mach:.3} is outside the subsonic regime (Mach must be below 1)")]
    FlowRegime { mach: f64 },
    #[error("input out of domain: {0}")]
    InputDomain(String),
}

pub type FinResult<T> = Result<T, FinError>;
