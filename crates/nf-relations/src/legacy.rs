//! Legacy naming shim.
//!
//! Earlier releases exposed the relations under their historical
//! ratio-centric names (`pt_ps_mach`, `mach_sigma`, `downstream_mn`, ...).
//! These wrappers forward to the current API and carry no logic. New code
//! should call the modern functions directly.

use crate::error::RelationResult;
use crate::{isentropic, massflow, shock};
use nf_core::{GasProperties, Real};

#[deprecated(note = "use isentropic::tt_ts")]
pub fn tt_ts_mach(mach: Real, gas: GasProperties) -> RelationResult<Real> {
    isentropic::tt_ts(mach, gas)
}

#[deprecated(note = "use isentropic::pt_ps")]
pub fn pt_ps_mach(mach: Real, gas: GasProperties) -> RelationResult<Real> {
    isentropic::pt_ps(mach, gas)
}

#[deprecated(note = "use isentropic::mach_from_tt_ts")]
pub fn mach_tt_ts(ratio: Real, gas: GasProperties) -> RelationResult<Real> {
    isentropic::mach_from_tt_ts(ratio, gas)
}

#[deprecated(note = "use isentropic::mach_from_pt_ps")]
pub fn mach_pt_ps(ratio: Real, gas: GasProperties) -> RelationResult<Real> {
    isentropic::mach_from_pt_ps(ratio, gas)
}

#[deprecated(note = "use isentropic::velocity_mach_tt")]
pub fn velocity_mach_ti(
    mach: Real,
    ti: Real,
    r_gas: Real,
    gas: GasProperties,
) -> RelationResult<Real> {
    isentropic::velocity_mach_tt(mach, ti, r_gas, gas)
}

#[deprecated(note = "use massflow::sigma")]
pub fn sigma_mach(mach: Real, gas: GasProperties) -> RelationResult<Real> {
    massflow::sigma(mach, gas)
}

#[deprecated(note = "use massflow::mach_sub_from_sigma or massflow::mach_sup_from_sigma")]
pub fn mach_sigma(s: Real, supersonic: bool, gas: GasProperties) -> RelationResult<Real> {
    if supersonic {
        massflow::mach_sup_from_sigma(s, gas)
    } else {
        massflow::mach_sub_from_sigma(s, gas)
    }
}

#[deprecated(note = "use massflow::weight_mass_flow")]
pub fn weight_mass_flow(mach: Real, r_gas: Real, gas: GasProperties) -> RelationResult<Real> {
    massflow::weight_mass_flow(mach, r_gas, gas)
}

#[deprecated(note = "use shock::downstream_mach")]
pub fn downstream_mn(mn: Real, gas: GasProperties) -> RelationResult<Real> {
    shock::downstream_mach(mn, gas)
}

#[deprecated(note = "use shock::pi_ratio")]
pub fn pi_ratio_mach(mach: Real, gas: GasProperties) -> RelationResult<Real> {
    shock::pi_ratio(mach, gas)
}

#[deprecated(note = "use shock::upstream_mach_from_pi_ratio")]
pub fn mn_pi_ratio(ratio: Real, gas: GasProperties) -> RelationResult<Real> {
    shock::upstream_mach_from_pi_ratio(ratio, gas)
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;

    #[test]
    fn shim_forwards_unchanged() {
        let gas = GasProperties::air();
        assert_eq!(
            pt_ps_mach(1.5, gas).unwrap(),
            isentropic::pt_ps(1.5, gas).unwrap()
        );
        assert_eq!(
            mach_sigma(2.0, true, gas).unwrap(),
            massflow::mach_sup_from_sigma(2.0, gas).unwrap()
        );
        assert_eq!(
            mach_sigma(2.0, false, gas).unwrap(),
            massflow::mach_sub_from_sigma(2.0, gas).unwrap()
        );
        assert_eq!(
            downstream_mn(2.0, gas).unwrap(),
            shock::downstream_mach(2.0, gas).unwrap()
        );
    }
}
