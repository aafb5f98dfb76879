//! Mass-flow and area-Mach relations.
//!
//! `sigma` is the area over sonic-throat-area function A/A*. It is not
//! monotonic: it falls to a minimum of 1 at M=1 and rises on both sides, so
//! its inverse comes in a subsonic and a supersonic branch.

use crate::error::{RelationError, RelationResult};
use crate::isentropic;
use crate::solve::{RootConfig, solve_bracketed};
use nf_core::{GasProperties, Real};

// Arguments this close below 1 are treated as the sonic throat itself;
// they show up when a rescaled area ratio lands a hair under 1.
const SIGMA_CLAMP: Real = 1e-9;

/// Area ratio A/A* at the given Mach number (> 0).
pub fn sigma(mach: Real, gas: GasProperties) -> RelationResult<Real> {
    if !mach.is_finite() || mach <= 0.0 {
        return Err(RelationError::Domain {
            what: "Mach number must be finite and > 0",
        });
    }
    let tt = isentropic::tt_ts(mach, gas)?;
    Ok((2.0 / gas.gp1() * tt).powf(0.5 * gas.gp1() / gas.gm1()) / mach)
}

/// d(sigma)/dM, used by the Newton inverses.
fn sigma_derivative(mach: Real, gas: GasProperties) -> Real {
    let tt = 1.0 + 0.5 * gas.gm1() * mach * mach;
    let s = (2.0 / gas.gp1() * tt).powf(0.5 * gas.gp1() / gas.gm1()) / mach;
    s * (0.5 * gas.gp1() * mach / tt - 1.0 / mach)
}

fn checked_sigma_arg(s: Real) -> RelationResult<Real> {
    if !s.is_finite() {
        return Err(RelationError::Domain {
            what: "area ratio must be finite",
        });
    }
    if s < 1.0 - SIGMA_CLAMP {
        return Err(RelationError::Domain {
            what: "area ratio must be >= 1",
        });
    }
    Ok(s.max(1.0))
}

/// Subsonic-branch Mach number such that `sigma(M) == s`, for `s >= 1`.
pub fn mach_sub_from_sigma(s: Real, gas: GasProperties) -> RelationResult<Real> {
    let s = checked_sigma_arg(s)?;
    if s == 1.0 {
        return Ok(1.0);
    }
    // sigma is strictly decreasing on (0, 1]
    let lo = (1e-8_f64).min(0.5 / s);
    let result = solve_bracketed(
        |m| sigma(m, gas).unwrap_or(Real::NAN) - s,
        |m| sigma_derivative(m, gas),
        lo,
        1.0,
        "subsonic area-Mach inverse",
        &RootConfig::default(),
    )?;
    Ok(result.x)
}

/// Supersonic-branch Mach number such that `sigma(M) == s`, for `s >= 1`.
pub fn mach_sup_from_sigma(s: Real, gas: GasProperties) -> RelationResult<Real> {
    let s = checked_sigma_arg(s)?;
    if s == 1.0 {
        return Ok(1.0);
    }
    // sigma is strictly increasing on [1, inf); double until bracketed
    let mut hi = 2.0;
    let mut steps = 0;
    while sigma(hi, gas)? < s {
        hi *= 2.0;
        steps += 1;
        if steps > 60 {
            return Err(RelationError::ConvergenceFailed {
                what: "supersonic area-Mach bracket",
            });
        }
    }
    let result = solve_bracketed(
        |m| sigma(m, gas).unwrap_or(Real::NAN) - s,
        |m| sigma_derivative(m, gas),
        1.0,
        hi,
        "supersonic area-Mach inverse",
        &RootConfig::default(),
    )?;
    Ok(result.x)
}

/// Corrected mass flow per unit area, `mdot * sqrt(r Tt) / (A Pt)`, for a gas
/// with specific constant `r_gas` (J/(kg K)).
pub fn weight_mass_flow(mach: Real, r_gas: Real, gas: GasProperties) -> RelationResult<Real> {
    if !r_gas.is_finite() || r_gas <= 0.0 {
        return Err(RelationError::Domain {
            what: "gas constant must be > 0",
        });
    }
    let tt = isentropic::tt_ts(mach, gas)?;
    Ok((gas.gamma() / r_gas).sqrt() * mach * tt.powf(-0.5 * gas.gp1() / gas.gm1()))
}

pub fn sigma_slice(machs: &[Real], gas: GasProperties) -> RelationResult<Vec<Real>> {
    machs.iter().map(|&m| sigma(m, gas)).collect()
}

pub fn mach_sub_from_sigma_slice(sigmas: &[Real], gas: GasProperties) -> RelationResult<Vec<Real>> {
    sigmas.iter().map(|&s| mach_sub_from_sigma(s, gas)).collect()
}

pub fn mach_sup_from_sigma_slice(sigmas: &[Real], gas: GasProperties) -> RelationResult<Vec<Real>> {
    sigmas.iter().map(|&s| mach_sup_from_sigma(s, gas)).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn supersonic_inverse_round_trips(m in 1.01_f64..8.0, gamma in 1.05_f64..2.0) {
            let gas = GasProperties::new(gamma).unwrap();
            let s = sigma(m, gas).unwrap();
            let back = mach_sup_from_sigma(s, gas).unwrap();
            prop_assert!((back - m).abs() < 1e-6);
        }

        #[test]
        fn subsonic_inverse_round_trips(m in 0.02_f64..0.99, gamma in 1.05_f64..2.0) {
            let gas = GasProperties::new(gamma).unwrap();
            let s = sigma(m, gas).unwrap();
            let back = mach_sub_from_sigma(s, gas).unwrap();
            prop_assert!((back - m).abs() < 1e-6);
        }
    }
}
