//! Bracketed scalar root finder.
//!
//! Newton iteration safeguarded by a sign-change bracket: a step that leaves
//! the bracket, or a vanishing derivative, falls back to bisection. All the
//! iterative inverses in this crate (area-Mach, shock total-pressure) go
//! through here.

use crate::error::{RelationError, RelationResult};
use nf_core::Real;

/// Root solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct RootConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the residual
    pub abs_tol: Real,
    /// Relative tolerance on the bracket width
    pub rel_tol: Real,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            abs_tol: 1e-12,
            rel_tol: 1e-14,
        }
    }
}

/// Root solver result.
#[derive(Debug, Clone, Copy)]
pub struct RootResult {
    /// Solution
    pub x: Real,
    /// Final residual
    pub residual: Real,
    /// Number of iterations
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Find the root of `f` in `[lo, hi]`, where `f(lo)` and `f(hi)` have
/// opposite signs. `df` is the analytic derivative of `f`.
pub fn solve_bracketed<F, D>(
    f: F,
    df: D,
    lo: Real,
    hi: Real,
    what: &'static str,
    config: &RootConfig,
) -> RelationResult<RootResult>
where
    F: Fn(Real) -> Real,
    D: Fn(Real) -> Real,
{
    let mut a = lo;
    let mut b = hi;
    let mut fa = f(a);
    let fb = f(b);

    if !fa.is_finite() || !fb.is_finite() {
        return Err(RelationError::NonPhysical { what });
    }

    // Exact hit on an endpoint
    if fa == 0.0 {
        return Ok(RootResult {
            x: a,
            residual: 0.0,
            iterations: 0,
            converged: true,
        });
    }
    if fb == 0.0 {
        return Ok(RootResult {
            x: b,
            residual: 0.0,
            iterations: 0,
            converged: true,
        });
    }
    if fa.signum() == fb.signum() {
        return Err(RelationError::ConvergenceFailed { what });
    }

    let mut x = 0.5 * (a + b);
    for iter in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(RelationError::NonPhysical { what });
        }
        if fx.abs() < config.abs_tol {
            return Ok(RootResult {
                x,
                residual: fx,
                iterations: iter,
                converged: true,
            });
        }

        // Shrink the bracket around the sign change
        if fx.signum() == fa.signum() {
            a = x;
            fa = fx;
        } else {
            b = x;
        }

        // Newton step, bisection when it misbehaves
        let dfx = df(x);
        let x_newton = x - fx / dfx;
        let x_next = if dfx != 0.0 && x_newton > a && x_newton < b {
            x_newton
        } else {
            0.5 * (a + b)
        };

        // Step below resolution: as converged as the arithmetic allows
        if (x_next - x).abs() <= config.rel_tol * x.abs().max(1.0) {
            return Ok(RootResult {
                x: x_next,
                residual: fx,
                iterations: iter,
                converged: true,
            });
        }
        x = x_next;
    }

    Err(RelationError::ConvergenceFailed { what })
}
