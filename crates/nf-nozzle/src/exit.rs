//! Exit Mach number solvers.
//!
//! Two variants share the regime thresholds: the confined solver stops at the
//! nozzle exit plane, the adapted solver follows the jet until its static
//! pressure matches the reference (shock or continued expansion past the
//! exit). Both reuse the same closed-form solution when the shock stands
//! inside the diverging section.

use crate::error::{NozzleError, NozzleResult};
use crate::regime::{FlowRegime, RegimeThresholds};
use nf_core::{GasProperties, Real};
use nf_relations::{isentropic, shock};

fn checked_npr(npr: Real) -> NozzleResult<Real> {
    if !npr.is_finite() || npr <= 1.0 {
        return Err(NozzleError::Domain {
            what: "nozzle pressure ratio must be > 1",
        });
    }
    Ok(npr)
}

/// Subsonic exit Mach with a shock in the diverging section: closed-form
/// root of the choked mass-flow relation written in terms of NPR.
pub(crate) fn shock_branch_exit_mach(as_ac: Real, npr: Real, gas: GasProperties) -> Real {
    let gmu = gas.gm1();
    let k = npr / as_ac / (0.5 * gas.gp1()).powf(0.5 * gas.gp1() / gmu);
    (((1.0 + 2.0 * gmu * k * k).sqrt() - 1.0) / gmu).sqrt()
}

pub(crate) fn confined_from_thresholds(
    th: &RegimeThresholds,
    as_ac: Real,
    npr: Real,
    gas: GasProperties,
) -> NozzleResult<Real> {
    if npr < th.npr0 {
        // Not choked: the exit pressure ratio fixes the Mach directly
        Ok(isentropic::mach_from_pt_ps(npr, gas)?)
    } else if npr > th.npr_sw {
        Ok(th.mach_sup)
    } else {
        Ok(shock_branch_exit_mach(as_ac, npr, gas))
    }
}

/// Mach number at the exit plane of a confined nozzle with exit over throat
/// ratio `as_ac`, operated at `npr`.
pub fn exit_mach_confined(as_ac: Real, npr: Real, gas: GasProperties) -> NozzleResult<Real> {
    let npr = checked_npr(npr)?;
    let th = RegimeThresholds::from_area_ratio(as_ac, gas)?;
    confined_from_thresholds(&th, as_ac, npr, gas)
}

/// Mach number of the pressure-adapted jet: the flow is followed past the
/// exit plane until its static pressure matches the reference pressure.
pub fn exit_mach_adapted(as_ac: Real, npr: Real, gas: GasProperties) -> NozzleResult<Real> {
    let npr = checked_npr(npr)?;
    let th = RegimeThresholds::from_area_ratio(as_ac, gas)?;
    match th.classify(npr)? {
        FlowRegime::Unchoked | FlowRegime::UnderexpandedJet => {
            // Unconstrained by the walls in both cases: invert the
            // total/static ratio, not the area relation
            Ok(isentropic::mach_from_pt_ps(npr, gas)?)
        }
        FlowRegime::OverexpandedJet => {
            // Shock system in the jet recompresses from the isentropic exit
            // pressure to the reference pressure
            Ok(shock::downstream_mach_from_ps_ratio(
                th.mach_sup,
                th.npr1 / npr,
                gas,
            )?)
        }
        FlowRegime::ShockInNozzle => Ok(shock_branch_exit_mach(as_ac, npr, gas)),
    }
}
