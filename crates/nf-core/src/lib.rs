//! nf-core: stable foundation for nozzleflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers + nearest-index search)
//! - gas (perfect-gas properties, explicit specific-heat ratio)
//! - error (shared error types)

pub mod error;
pub mod gas;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{NfError, NfResult};
pub use gas::GasProperties;
pub use numeric::*;
pub use units::*;
