//! Normal-shock relations, plus the oblique construction needed to follow a
//! jet through a pressure-matching shock.
//!
//! Upstream Mach numbers below 1 are outside the domain: a shock cannot stand
//! in subsonic flow.

use crate::error::{RelationError, RelationResult};
use crate::solve::{RootConfig, solve_bracketed};
use nf_core::{GasProperties, Real};

fn checked_upstream(m1: Real) -> RelationResult<Real> {
    if !m1.is_finite() || m1 < 1.0 {
        return Err(RelationError::Domain {
            what: "upstream Mach number must be >= 1",
        });
    }
    Ok(m1)
}

/// Mach number downstream of a normal shock with upstream Mach `m1`.
pub fn downstream_mach(m1: Real, gas: GasProperties) -> RelationResult<Real> {
    let m1 = checked_upstream(m1)?;
    let m1s = m1 * m1;
    Ok(((1.0 + 0.5 * gas.gm1() * m1s) / (gas.gamma() * m1s - 0.5 * gas.gm1())).sqrt())
}

/// Static pressure jump p2/p1 across a normal shock.
pub fn ps_ratio(m1: Real, gas: GasProperties) -> RelationResult<Real> {
    let m1 = checked_upstream(m1)?;
    Ok(1.0 + 2.0 * gas.gamma() / gas.gp1() * (m1 * m1 - 1.0))
}

/// Total pressure ratio Pt2/Pt1 across a normal shock (<= 1).
pub fn pi_ratio(m1: Real, gas: GasProperties) -> RelationResult<Real> {
    let m1 = checked_upstream(m1)?;
    let m1s = m1 * m1;
    let tt = 1.0 + 0.5 * gas.gm1() * m1s;
    let dynamic = (0.5 * gas.gp1() * m1s / tt).powf(gas.gamma() / gas.gm1());
    let static_ = (gas.gp1() / (2.0 * gas.gamma() * m1s - gas.gm1())).powf(1.0 / gas.gm1());
    Ok(dynamic * static_)
}

/// d(pi_ratio)/dM, used by the Newton inverse.
fn pi_ratio_derivative(m1: Real, gas: GasProperties) -> Real {
    let m1s = m1 * m1;
    let tt = 1.0 + 0.5 * gas.gm1() * m1s;
    let pi = {
        let dynamic = (0.5 * gas.gp1() * m1s / tt).powf(gas.gamma() / gas.gm1());
        let static_ = (gas.gp1() / (2.0 * gas.gamma() * m1s - gas.gm1())).powf(1.0 / gas.gm1());
        dynamic * static_
    };
    let dlog = gas.gamma() / gas.gm1() * (2.0 / m1 - gas.gm1() * m1 / tt)
        - 4.0 * gas.gamma() * m1 / (gas.gm1() * (2.0 * gas.gamma() * m1s - gas.gm1()));
    pi * dlog
}

/// Upstream Mach number of a normal shock with the given static pressure
/// jump p2/p1 (>= 1). Closed form.
pub fn upstream_mach_from_ps_ratio(ratio: Real, gas: GasProperties) -> RelationResult<Real> {
    if !ratio.is_finite() || ratio < 1.0 {
        return Err(RelationError::Domain {
            what: "static pressure jump across a shock must be >= 1",
        });
    }
    Ok((1.0 + (ratio - 1.0) * gas.gp1() / (2.0 * gas.gamma())).sqrt())
}

/// Upstream Mach number of a normal shock with the given total pressure
/// ratio Pt2/Pt1 (in (0, 1]). Iterative inverse of `pi_ratio`.
pub fn upstream_mach_from_pi_ratio(ratio: Real, gas: GasProperties) -> RelationResult<Real> {
    // A vanishing loss computed as pt_ratio/npr can overshoot 1 by rounding
    if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 + 1e-9 {
        return Err(RelationError::Domain {
            what: "total pressure ratio across a shock must be in (0, 1]",
        });
    }
    if ratio >= 1.0 {
        return Ok(1.0);
    }
    // pi_ratio is strictly decreasing on [1, inf); double until bracketed
    let mut hi = 2.0;
    let mut steps = 0;
    while pi_ratio(hi, gas)? > ratio {
        hi *= 2.0;
        steps += 1;
        if steps > 60 {
            return Err(RelationError::ConvergenceFailed {
                what: "shock total-pressure bracket",
            });
        }
    }
    let result = solve_bracketed(
        |m| pi_ratio(m, gas).unwrap_or(Real::NAN) - ratio,
        |m| pi_ratio_derivative(m, gas),
        1.0,
        hi,
        "shock total-pressure inverse",
        &RootConfig::default(),
    )?;
    Ok(result.x)
}

/// Mach number downstream of the (generally oblique) shock that raises the
/// static pressure of a stream at Mach `m1` by `ratio`.
///
/// The pressure jump fixes the shock-normal upstream Mach, hence the wave
/// angle; the flow deflection then follows, and the downstream Mach comes
/// from the normal component behind the wave.
pub fn downstream_mach_from_ps_ratio(
    m1: Real,
    ratio: Real,
    gas: GasProperties,
) -> RelationResult<Real> {
    let m1 = checked_upstream(m1)?;
    let mn1 = upstream_mach_from_ps_ratio(ratio, gas)?;
    if mn1 > m1 * (1.0 + 1e-12) {
        return Err(RelationError::Domain {
            what: "pressure jump exceeds the normal-shock limit at this Mach",
        });
    }
    let mn1 = mn1.min(m1);
    let wave = (mn1 / m1).asin();
    let mn2 = downstream_mach(mn1, gas)?;
    // theta-beta-M deflection; zero for a Mach wave (mn1 = 1) and for a
    // normal shock (wave = pi/2)
    let deflection = (2.0 * (mn1 * mn1 - 1.0)
        / (wave.tan() * (m1 * m1 * (gas.gamma() + (2.0 * wave).cos()) + 2.0)))
        .atan();
    let m2 = mn2 / (wave - deflection).sin();
    if !m2.is_finite() || m2 <= 0.0 {
        return Err(RelationError::NonPhysical {
            what: "downstream Mach behind pressure-matching shock",
        });
    }
    Ok(m2)
}

pub fn downstream_mach_slice(m1s: &[Real], gas: GasProperties) -> RelationResult<Vec<Real>> {
    m1s.iter().map(|&m| downstream_mach(m, gas)).collect()
}

pub fn ps_ratio_slice(m1s: &[Real], gas: GasProperties) -> RelationResult<Vec<Real>> {
    m1s.iter().map(|&m| ps_ratio(m, gas)).collect()
}

pub fn pi_ratio_slice(m1s: &[Real], gas: GasProperties) -> RelationResult<Vec<Real>> {
    m1s.iter().map(|&m| pi_ratio(m, gas)).collect()
}
