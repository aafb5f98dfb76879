//! Nozzle aggregate: geometry + gas + per-station flow field.

use crate::error::{NozzleError, NozzleResult};
use crate::exit;
use crate::geometry::AreaProfile;
use crate::regime::{FlowRegime, RegimeThresholds};
use nf_core::{GasProperties, Real, nearest_index};
use nf_relations::{isentropic, massflow, shock};
use serde::{Deserialize, Serialize};

/// Per-station solution for one NPR. Pressures are normalized by the inlet
/// total pressure (times the nozzle's static-pressure scale), so `ptot` is 1
/// everywhere upstream of a shock and steps down to the loss factor behind
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowField {
    /// Mach number at each station.
    pub mach: Vec<Real>,
    /// Static pressure at each station.
    pub ps: Vec<Real>,
    /// Total pressure at each station.
    pub ptot: Vec<Real>,
    /// First station downstream of the shock, when one stands in the
    /// diverging section. Placement picks the station whose supersonic Mach
    /// is nearest the shock's upstream Mach, so it is only as accurate as
    /// the station spacing.
    pub shock_index: Option<usize>,
}

/// A converging-diverging nozzle with its operating state.
///
/// Thresholds are computed once at construction; [`Nozzle::set_npr`] solves
/// the per-station field for one NPR at a time (no history is kept).
///
/// # Example
///
/// ```
/// use nf_core::GasProperties;
/// use nf_nozzle::{AreaProfile, Nozzle};
///
/// let x: Vec<f64> = (0..51).map(|i| i as f64 / 50.0).collect();
/// let a = x.iter().map(|&xi| 1.0 + 3.0 * (xi - 0.3_f64).powi(2)).collect();
/// let profile = AreaProfile::from_sections(x, a).unwrap();
/// let mut nozzle = Nozzle::new(profile, GasProperties::air()).unwrap();
/// nozzle.set_npr(1.2).unwrap();
/// assert!(nozzle.mach().unwrap().iter().all(|&m| m > 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct Nozzle {
    profile: AreaProfile,
    gas: GasProperties,
    thresholds: RegimeThresholds,
    ref_rt_tot: Real,
    scale_ps: Real,
    field: Option<FlowField>,
}

impl Nozzle {
    /// Nozzle over the given profile. Thresholds for the profile's exit over
    /// throat ratio are computed here, once.
    pub fn new(profile: AreaProfile, gas: GasProperties) -> NozzleResult<Self> {
        let thresholds = RegimeThresholds::from_area_ratio(profile.as_ac(), gas)?;
        Ok(Self {
            profile,
            gas,
            thresholds,
            ref_rt_tot: 1.0,
            scale_ps: 1.0,
            field: None,
        })
    }

    /// Set the reference `r * Ttot` product (J/kg) used by the velocity
    /// accessor. Defaults to 1.
    pub fn with_ref_rt_tot(mut self, ref_rt_tot: Real) -> NozzleResult<Self> {
        if !ref_rt_tot.is_finite() || ref_rt_tot <= 0.0 {
            return Err(NozzleError::Domain {
                what: "reference r*Ttot must be > 0",
            });
        }
        self.ref_rt_tot = ref_rt_tot;
        Ok(self)
    }

    /// Scale applied to static and total pressures (default 1: pressures are
    /// fractions of the inlet total pressure).
    pub fn with_scale_ps(mut self, scale_ps: Real) -> NozzleResult<Self> {
        if !scale_ps.is_finite() || scale_ps <= 0.0 {
            return Err(NozzleError::Domain {
                what: "static pressure scale must be > 0",
            });
        }
        self.scale_ps = scale_ps;
        Ok(self)
    }

    pub fn profile(&self) -> &AreaProfile {
        &self.profile
    }

    pub fn gas(&self) -> GasProperties {
        self.gas
    }

    pub fn thresholds(&self) -> &RegimeThresholds {
        &self.thresholds
    }

    /// Solve the per-station field for the given NPR (> 1), replacing any
    /// previous solution. On error the previous field is left untouched.
    pub fn set_npr(&mut self, npr: Real) -> NozzleResult<()> {
        let regime = self.thresholds.classify(npr)?;
        let gas = self.gas;
        let ax = self.profile.ax_ac();
        let as_ac = self.profile.as_ac();
        let it = self.profile.throat_index();
        let n = ax.len();

        let mut ptot = vec![1.0; n];
        let mut mach = Vec::with_capacity(n);
        let mut shock_index = None;

        if regime == FlowRegime::Unchoked {
            // Subsonic everywhere: the exit Mach implied by the NPR fixes an
            // effective (virtual) throat; rescale every station ratio to it
            let ms = isentropic::mach_from_pt_ps(npr, gas)?;
            let sigma_ms = massflow::sigma(ms, gas)?;
            for &a in ax {
                mach.push(massflow::mach_sub_from_sigma(a / as_ac * sigma_ms, gas)?);
            }
            tracing::debug!(npr, exit_mach = ms, "unchoked subsonic field");
        } else {
            // Choked: sonic throat, supersonic candidate in the diverging part
            for (i, &a) in ax.iter().enumerate() {
                mach.push(if i <= it {
                    massflow::mach_sub_from_sigma(a, gas)?
                } else {
                    massflow::mach_sup_from_sigma(a, gas)?
                });
            }
            if regime == FlowRegime::ShockInNozzle {
                let ms = exit::shock_branch_exit_mach(as_ac, npr, gas);
                // min() guards the vanishing-shock boundary, where rounding
                // can push the loss factor past 1
                let pt_loss = (isentropic::pt_ps(ms, gas)? / npr).min(1.0);
                let m_shock = shock::upstream_mach_from_pi_ratio(pt_loss, gas)?;
                // Nearest supersonic station stands in for the exact shock
                // position
                let ish = it
                    + 1
                    + nearest_index(&mach[it + 1..], m_shock).ok_or(NozzleError::Domain {
                        what: "no diverging station to place the shock at",
                    })?;
                let sigma_ms = massflow::sigma(ms, gas)?;
                for i in ish..n {
                    // Rescaled ratio can land a hair inside sonic; floor it
                    let s = (ax[i] * sigma_ms / as_ac).max(1.0);
                    mach[i] = massflow::mach_sub_from_sigma(s, gas)?;
                    ptot[i] = pt_loss;
                }
                shock_index = Some(ish);
                tracing::debug!(
                    npr,
                    exit_mach = ms,
                    shock_mach = m_shock,
                    shock_station = ish,
                    "shock in diverging section"
                );
            } else {
                tracing::debug!(npr, ?regime, "choked shock-free field");
            }
        }

        let mut ps = Vec::with_capacity(n);
        for (i, &m) in mach.iter().enumerate() {
            ptot[i] *= self.scale_ps;
            ps.push(ptot[i] / isentropic::pt_ps(m, gas)?);
        }

        self.field = Some(FlowField {
            mach,
            ps,
            ptot,
            shock_index,
        });
        Ok(())
    }

    fn field(&self) -> NozzleResult<&FlowField> {
        self.field.as_ref().ok_or(NozzleError::FieldNotComputed)
    }

    /// Per-station Mach numbers of the last solved field.
    pub fn mach(&self) -> NozzleResult<&[Real]> {
        Ok(&self.field()?.mach)
    }

    /// Per-station static pressures of the last solved field.
    pub fn ps(&self) -> NozzleResult<&[Real]> {
        Ok(&self.field()?.ps)
    }

    /// Per-station total pressures of the last solved field.
    pub fn ptot(&self) -> NozzleResult<&[Real]> {
        Ok(&self.field()?.ptot)
    }

    /// Shock station of the last solved field, if one stands in the
    /// diverging section.
    pub fn shock_index(&self) -> NozzleResult<Option<usize>> {
        Ok(self.field()?.shock_index)
    }

    /// Per-station velocities (m/s) from the reference `r * Ttot`.
    pub fn velocity(&self) -> NozzleResult<Vec<Real>> {
        let gas = self.gas;
        let mach = &self.field()?.mach;
        let mut v = Vec::with_capacity(mach.len());
        for &m in mach {
            let tt = isentropic::tt_ts(m, gas)?;
            v.push(m * (gas.gamma() * self.ref_rt_tot / tt).sqrt());
        }
        Ok(v)
    }

    /// The last solved field, consumed.
    pub fn into_field(self) -> NozzleResult<FlowField> {
        self.field.ok_or(NozzleError::FieldNotComputed)
    }
}
