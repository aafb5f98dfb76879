//! Relation evaluation errors.

use nf_core::NfError;
use thiserror::Error;

/// Result type for relation evaluations.
pub type RelationResult<T> = Result<T, RelationError>;

/// Errors that can occur while evaluating compressible-flow relations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelationError {
    /// Argument outside the mathematical domain of the relation
    /// (e.g. pressure ratio below 1, Mach below the branch range).
    #[error("Out of domain: {what}")]
    Domain { what: &'static str },

    /// Non-physical intermediate value (NaN, infinity, negative pressure).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// An iterative inverse failed to converge.
    #[error("Convergence failed for {what}")]
    ConvergenceFailed { what: &'static str },
}

impl From<RelationError> for NfError {
    fn from(err: RelationError) -> Self {
        match err {
            RelationError::Domain { what } => NfError::InvalidArg { what },
            RelationError::NonPhysical { what } => NfError::Invariant { what },
            RelationError::ConvergenceFailed { what } => NfError::Invariant { what },
        }
    }
}
