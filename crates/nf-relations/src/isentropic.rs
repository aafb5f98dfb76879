//! Isentropic total/static relations for a calorically perfect gas.
//!
//! Ratios are total over static throughout, so they are >= 1 and monotonic in
//! Mach; both inverses are closed form.

use crate::error::{RelationError, RelationResult};
use nf_core::{GasProperties, Real};

/// Total over static temperature ratio Tt/Ts at the given Mach number.
pub fn tt_ts(mach: Real, gas: GasProperties) -> RelationResult<Real> {
    if !mach.is_finite() || mach < 0.0 {
        return Err(RelationError::Domain {
            what: "Mach number must be finite and >= 0",
        });
    }
    Ok(1.0 + 0.5 * gas.gm1() * mach * mach)
}

/// Total over static pressure ratio Pt/Ps at the given Mach number.
pub fn pt_ps(mach: Real, gas: GasProperties) -> RelationResult<Real> {
    Ok(tt_ts(mach, gas)?.powf(gas.gamma() / gas.gm1()))
}

/// Mach number from a total over static temperature ratio (>= 1).
pub fn mach_from_tt_ts(ratio: Real, gas: GasProperties) -> RelationResult<Real> {
    if !ratio.is_finite() || ratio < 1.0 {
        return Err(RelationError::Domain {
            what: "total/static temperature ratio must be >= 1",
        });
    }
    Ok(((ratio - 1.0) * 2.0 / gas.gm1()).sqrt())
}

/// Mach number from a total over static pressure ratio (>= 1).
pub fn mach_from_pt_ps(ratio: Real, gas: GasProperties) -> RelationResult<Real> {
    if !ratio.is_finite() || ratio < 1.0 {
        return Err(RelationError::Domain {
            what: "total/static pressure ratio must be >= 1",
        });
    }
    mach_from_tt_ts(ratio.powf(gas.gm1() / gas.gamma()), gas)
}

/// Flow velocity from Mach number and total temperature, for a gas with
/// specific constant `r_gas` (J/(kg K)).
pub fn velocity_mach_tt(
    mach: Real,
    tt: Real,
    r_gas: Real,
    gas: GasProperties,
) -> RelationResult<Real> {
    if !tt.is_finite() || tt <= 0.0 || !r_gas.is_finite() || r_gas <= 0.0 {
        return Err(RelationError::Domain {
            what: "total temperature and gas constant must be > 0",
        });
    }
    let ts = tt / tt_ts(mach, gas)?;
    Ok(mach * (gas.gamma() * r_gas * ts).sqrt())
}

pub fn tt_ts_slice(machs: &[Real], gas: GasProperties) -> RelationResult<Vec<Real>> {
    machs.iter().map(|&m| tt_ts(m, gas)).collect()
}

pub fn pt_ps_slice(machs: &[Real], gas: GasProperties) -> RelationResult<Vec<Real>> {
    machs.iter().map(|&m| pt_ps(m, gas)).collect()
}

pub fn mach_from_tt_ts_slice(ratios: &[Real], gas: GasProperties) -> RelationResult<Vec<Real>> {
    ratios.iter().map(|&r| mach_from_tt_ts(r, gas)).collect()
}

pub fn mach_from_pt_ps_slice(ratios: &[Real], gas: GasProperties) -> RelationResult<Vec<Real>> {
    ratios.iter().map(|&r| mach_from_pt_ps(r, gas)).collect()
}
