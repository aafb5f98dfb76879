//! Nozzle solver errors.

use nf_core::NfError;
use nf_relations::RelationError;
use thiserror::Error;

/// Result type for nozzle operations.
pub type NozzleResult<T> = Result<T, NozzleError>;

/// Errors that can occur while defining a nozzle or solving its flow field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NozzleError {
    /// Input outside the physical domain (area ratio <= 1, NPR <= 1,
    /// degenerate section law).
    #[error("Out of domain: {what}")]
    Domain { what: &'static str },

    /// An underlying flow relation failed.
    #[error(transparent)]
    Relation(#[from] RelationError),

    /// A numeric guard in the foundation crate tripped.
    #[error(transparent)]
    Core(#[from] NfError),

    /// A field accessor was called before any successful `set_npr`.
    #[error("Flow field not computed yet; call set_npr first")]
    FieldNotComputed,
}
