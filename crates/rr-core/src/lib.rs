//! rr-core: stable foundation for ringrep.
//!
//! Contains:
//! - kinds (the closed set of nonlinear-dynamics analysis kinds)
//! - params (opaque typed parameter values and ordered parameter bags)

pub mod kinds;
pub mod params;

// Re-exports: nice ergonomics for downstream crates
pub use kinds::AnalysisKind;
pub use params::{ParamValue, Params};
