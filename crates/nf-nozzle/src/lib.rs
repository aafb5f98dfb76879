//! nf-nozzle: quasi-1D converging-diverging nozzle flow.
//!
//! Provides:
//! - Section-law geometry with throat detection ([`AreaProfile`])
//! - Regime thresholds for an area ratio ([`RegimeThresholds`])
//! - Exit Mach solvers for confined and pressure-adapted flow
//! - The [`Nozzle`] aggregate solving per-station Mach and pressure fields,
//!   including shock placement in the diverging section
//!
//! The model is steady, quasi-1D, inviscid, perfect gas. The gas travels as
//! an explicit [`nf_core::GasProperties`] value through every call.
//!
//! # Example
//!
//! ```
//! use nf_core::GasProperties;
//! use nf_nozzle::exit_mach_confined;
//!
//! // Shock in the diverging section
//! let ms = exit_mach_confined(2.636, 1.5, GasProperties::air()).unwrap();
//! assert!((ms - 0.32586574).abs() < 1e-8);
//! ```

pub mod error;
pub mod exit;
pub mod geometry;
pub mod nozzle;
pub mod regime;

// Re-exports for ergonomics
pub use error::{NozzleError, NozzleResult};
pub use exit::{exit_mach_adapted, exit_mach_confined};
pub use geometry::AreaProfile;
pub use nozzle::{FlowField, Nozzle};
pub use regime::{
    FlowRegime, RegimeThresholds, npr_choked_subsonic, npr_choked_supersonic, npr_shock_at_exit,
};
