//! Perfect-gas properties.
//!
//! The specific-heat ratio is carried explicitly through every relation call.
//! There is no ambient "current gas" setting: two computations with different
//! gases can never observe each other's state.

use crate::{NfError, Real};

/// Calorically perfect gas, described by its specific-heat ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GasProperties {
    gamma: Real,
}

impl GasProperties {
    /// Gas with the given specific-heat ratio. Must be finite and > 1.
    pub fn new(gamma: Real) -> Result<Self, NfError> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(NfError::InvalidArg {
                what: "specific-heat ratio must be finite and > 1",
            });
        }
        Ok(Self { gamma })
    }

    /// Diatomic air, gamma = 1.4.
    pub fn air() -> Self {
        Self { gamma: 1.4 }
    }

    #[inline]
    pub fn gamma(&self) -> Real {
        self.gamma
    }

    /// gamma - 1, the exponent group that shows up everywhere.
    #[inline]
    pub fn gm1(&self) -> Real {
        self.gamma - 1.0
    }

    /// gamma + 1.
    #[inline]
    pub fn gp1(&self) -> Real {
        self.gamma + 1.0
    }
}

impl Default for GasProperties {
    fn default() -> Self {
        Self::air()
    }
}
