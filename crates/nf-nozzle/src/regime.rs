//! Flow-regime thresholds of a converging-diverging nozzle.
//!
//! For a given exit over throat area ratio, three NPR values split the
//! operating range: below `npr0` the nozzle never chokes, between `npr0` and
//! `npr_sw` a normal shock stands in the diverging section, between `npr_sw`
//! and `npr1` the shock has moved out into the jet, and above `npr1` the jet
//! is under-expanded. The thresholds depend on geometry and gas only, never
//! on the operating NPR.

use crate::error::{NozzleError, NozzleResult};
use nf_core::{GasProperties, Real};
use nf_relations::{isentropic, massflow, shock};
use serde::{Deserialize, Serialize};

/// Critical NPR boundaries for one area ratio, with the associated exit Mach
/// numbers. Invariant: `npr0 < npr_sw < npr1` for any area ratio > 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeThresholds {
    /// Choked-but-subsonic limit: NPR of the fully subsonic solution with a
    /// sonic throat.
    pub npr0: Real,
    /// Shock exactly at the exit plane.
    pub npr_sw: Real,
    /// Fully isentropic supersonic expansion.
    pub npr1: Real,
    /// Subsonic exit Mach of the choked-subsonic solution.
    pub mach_sub: Real,
    /// Exit Mach just behind an exit-plane shock.
    pub mach_sh: Real,
    /// Supersonic exit Mach of the isentropic solution.
    pub mach_sup: Real,
}

/// Operating regime of a confined nozzle flow at a given NPR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// Throat never reaches Mach 1; subsonic everywhere.
    Unchoked,
    /// Normal shock inside the diverging section.
    ShockInNozzle,
    /// Choked and shock-free in the nozzle; shock system in the jet.
    OverexpandedJet,
    /// Choked and shock-free; expansion continues past the exit.
    UnderexpandedJet,
}

impl RegimeThresholds {
    /// Compute the thresholds for an exit over throat area ratio (> 1).
    pub fn from_area_ratio(as_ac: Real, gas: GasProperties) -> NozzleResult<Self> {
        if !as_ac.is_finite() || as_ac <= 1.0 {
            return Err(NozzleError::Domain {
                what: "exit over throat area ratio must be > 1",
            });
        }
        let mach_sub = massflow::mach_sub_from_sigma(as_ac, gas)?;
        let npr0 = isentropic::pt_ps(mach_sub, gas)?;
        let mach_sup = massflow::mach_sup_from_sigma(as_ac, gas)?;
        let mach_sh = shock::downstream_mach(mach_sup, gas)?;
        let npr_sw = isentropic::pt_ps(mach_sh, gas)? / shock::pi_ratio(mach_sup, gas)?;
        let npr1 = isentropic::pt_ps(mach_sup, gas)?;
        Ok(Self {
            npr0,
            npr_sw,
            npr1,
            mach_sub,
            mach_sh,
            mach_sup,
        })
    }

    /// Element-wise form of [`Self::from_area_ratio`].
    pub fn from_area_ratio_slice(
        as_ac: &[Real],
        gas: GasProperties,
    ) -> NozzleResult<Vec<Self>> {
        as_ac
            .iter()
            .map(|&a| Self::from_area_ratio(a, gas))
            .collect()
    }

    /// Which regime an NPR (> 1) falls in.
    ///
    /// Boundaries go with the higher-NPR side except `npr0` itself, which
    /// already carries a sonic throat: `npr == npr0` classifies as
    /// `ShockInNozzle`, matching the branch selection of the exit-Mach
    /// solvers and the field solver.
    pub fn classify(&self, npr: Real) -> NozzleResult<FlowRegime> {
        if !npr.is_finite() || npr <= 1.0 {
            return Err(NozzleError::Domain {
                what: "nozzle pressure ratio must be > 1",
            });
        }
        Ok(if npr < self.npr0 {
            FlowRegime::Unchoked
        } else if npr <= self.npr_sw {
            FlowRegime::ShockInNozzle
        } else if npr <= self.npr1 {
            FlowRegime::OverexpandedJet
        } else {
            FlowRegime::UnderexpandedJet
        })
    }
}

/// NPR giving a choked but fully subsonic nozzle (sonic throat, subsonic
/// diffusion to the exit).
pub fn npr_choked_subsonic(as_ac: Real, gas: GasProperties) -> NozzleResult<Real> {
    Ok(RegimeThresholds::from_area_ratio(as_ac, gas)?.npr0)
}

/// NPR giving a choked, shock-free supersonic nozzle.
pub fn npr_choked_supersonic(as_ac: Real, gas: GasProperties) -> NozzleResult<Real> {
    Ok(RegimeThresholds::from_area_ratio(as_ac, gas)?.npr1)
}

/// NPR putting a normal shock exactly at the exit plane.
pub fn npr_shock_at_exit(as_ac: Real, gas: GasProperties) -> NozzleResult<Real> {
    Ok(RegimeThresholds::from_area_ratio(as_ac, gas)?.npr_sw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_ordered() {
        let gas = GasProperties::air();
        for &as_ac in &[1.05, 1.5, 2.0, 2.636, 5.0, 20.0] {
            let th = RegimeThresholds::from_area_ratio(as_ac, gas).unwrap();
            assert!(
                1.0 < th.npr0 && th.npr0 < th.npr_sw && th.npr_sw < th.npr1,
                "AsAc={as_ac}: {th:?}"
            );
        }
    }

    #[test]
    fn mach_numbers_bracket_sonic() {
        let gas = GasProperties::air();
        let th = RegimeThresholds::from_area_ratio(2.0, gas).unwrap();
        assert!(th.mach_sub < 1.0);
        assert!(th.mach_sh < 1.0);
        assert!(th.mach_sup > 1.0);
    }

    #[test]
    fn threshold_mach_numbers_recover_area_ratio() {
        // sigma(mach_from_pt_ps([npr0, npr1])) == [AsAc, AsAc]
        let gas = GasProperties::air();
        let as_ac = 2.0;
        let th = RegimeThresholds::from_area_ratio(as_ac, gas).unwrap();
        let machs =
            isentropic::mach_from_pt_ps_slice(&[th.npr0, th.npr1], gas).unwrap();
        let sigmas = massflow::sigma_slice(&machs, gas).unwrap();
        for s in sigmas {
            assert!((s - as_ac).abs() < 1e-8, "got {s}");
        }
    }

    #[test]
    fn degenerate_ratio_rejected() {
        let gas = GasProperties::air();
        assert!(RegimeThresholds::from_area_ratio(1.0, gas).is_err());
        assert!(RegimeThresholds::from_area_ratio(0.5, gas).is_err());
        assert!(RegimeThresholds::from_area_ratio(Real::NAN, gas).is_err());
    }

    #[test]
    fn classification_boundaries() {
        let gas = GasProperties::air();
        let th = RegimeThresholds::from_area_ratio(2.0, gas).unwrap();
        assert_eq!(th.classify(th.npr0 * 0.999).unwrap(), FlowRegime::Unchoked);
        assert_eq!(th.classify(th.npr0).unwrap(), FlowRegime::ShockInNozzle);
        assert_eq!(th.classify(th.npr_sw).unwrap(), FlowRegime::ShockInNozzle);
        assert_eq!(
            th.classify(0.5 * (th.npr_sw + th.npr1)).unwrap(),
            FlowRegime::OverexpandedJet
        );
        assert_eq!(
            th.classify(th.npr1 * 1.5).unwrap(),
            FlowRegime::UnderexpandedJet
        );
        assert!(th.classify(1.0).is_err());
    }

    #[test]
    fn slice_form_matches_scalar() {
        let gas = GasProperties::air();
        let ratios = [1.5, 2.0, 4.0];
        let all = RegimeThresholds::from_area_ratio_slice(&ratios, gas).unwrap();
        for (i, &r) in ratios.iter().enumerate() {
            assert_eq!(all[i], RegimeThresholds::from_area_ratio(r, gas).unwrap());
        }
    }
}
