//! nf-relations: compressible-flow relations for nozzleflow.
//!
//! Provides:
//! - Isentropic total/static relations and their closed-form inverses
//! - Area-Mach (Sigma) relation with subsonic and supersonic inverse branches
//! - Normal-shock relations and their inverses, plus the oblique
//!   pressure-matching construction for free jets
//! - A bracketed scalar Newton root finder backing the iterative inverses
//! - A deprecated naming shim for the historical API
//!
//! Everything is a pure function of its arguments. The perfect-gas
//! specific-heat ratio travels in an explicit [`GasProperties`] value; there
//! is no process-wide gas setting. Each relation has scalar and `_slice`
//! (element-wise) forms; slice forms stop at the first out-of-domain element.
//!
//! # Example
//!
//! ```
//! use nf_core::GasProperties;
//! use nf_relations::{isentropic, massflow};
//!
//! let gas = GasProperties::air();
//! let m = massflow::mach_sup_from_sigma(2.0, gas).unwrap();
//! let npr = isentropic::pt_ps(m, gas).unwrap();
//! assert!(m > 2.1 && m < 2.3);
//! assert!(npr > 1.0);
//! ```

pub mod error;
pub mod isentropic;
pub mod legacy;
pub mod massflow;
pub mod shock;
pub mod solve;

// Re-exports for ergonomics
pub use error::{RelationError, RelationResult};
pub use solve::{RootConfig, RootResult, solve_bracketed};

// The gas carrier is part of this crate's signatures; re-export it so
// callers do not need a direct nf-core dependency for the common case.
pub use nf_core::GasProperties;
