//! Fin loads calculator.
//!
//! The closed-form fin model lives in `fin_aero`; this crate ties it to the
//! catalog files, the exporters and the planform renderer so the binaries
//! (and any other front-end) share one entry point.

pub mod catalog;
pub mod render;

pub use fin_aero as aero;
pub use fin_config as config;
pub use fin_core::{constants, units};
pub use fin_export as export;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
