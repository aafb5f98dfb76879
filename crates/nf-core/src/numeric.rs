use crate::NfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, NfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(NfError::NonFinite { what, value: v })
    }
}

/// Index of the element of `values` closest to `target`, or `None` for an
/// empty slice. Ties resolve to the earliest index.
///
/// Used to place a shock at the station whose Mach number best matches the
/// computed upstream value; the answer is only as accurate as the station
/// spacing.
pub fn nearest_index(values: &[Real], target: Real) -> Option<usize> {
    let mut best: Option<(usize, Real)> = None;
    for (i, &v) in values.iter().enumerate() {
        let d = (v - target).abs();
        match best {
            Some((_, bd)) if bd <= d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn nearest_index_basic() {
        let v = [0.5, 1.0, 1.8, 2.4];
        assert_eq!(nearest_index(&v, 1.9), Some(2));
        assert_eq!(nearest_index(&v, 0.0), Some(0));
        assert_eq!(nearest_index(&v, 10.0), Some(3));
        assert_eq!(nearest_index(&[], 1.0), None);
    }

    #[test]
    fn nearest_index_tie_takes_first() {
        let v = [1.0, 3.0];
        assert_eq!(nearest_index(&v, 2.0), Some(0));
    }
}
