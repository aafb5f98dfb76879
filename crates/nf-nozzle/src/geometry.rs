//! Nozzle section law.

use crate::error::{NozzleError, NozzleResult};
use nf_core::units::{Area, Length};
use nf_core::{Real, ensure_finite};
use serde::{Deserialize, Serialize};
use uom::si::area::square_meter;
use uom::si::length::meter;

/// Ordered cross-sectional areas along the nozzle axis, with the throat
/// (minimum area) strictly between inlet and exit.
///
/// All downstream computation works on area ratios: `ax_ac` is each station's
/// area over the throat area and `as_ac` is the exit over throat ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaProfile {
    x: Vec<Real>,
    ax_ac: Vec<Real>,
    as_ac: Real,
    throat: usize,
}

impl AreaProfile {
    /// Build a profile from raw station coordinates and section areas
    /// (any consistent units; only ratios are retained).
    pub fn from_sections(x: Vec<Real>, sections: Vec<Real>) -> NozzleResult<Self> {
        if sections.len() < 3 {
            return Err(NozzleError::Domain {
                what: "a section law needs at least 3 stations",
            });
        }
        if x.len() != sections.len() {
            return Err(NozzleError::Domain {
                what: "coordinate and section arrays must have the same length",
            });
        }
        for &v in &x {
            ensure_finite(v, "station coordinate")?;
        }
        if sections.iter().any(|&a| !a.is_finite() || a <= 0.0) {
            return Err(NozzleError::Domain {
                what: "stations must have finite positive areas",
            });
        }

        let throat = sections
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        if throat == 0 || throat == sections.len() - 1 {
            return Err(NozzleError::Domain {
                what: "the throat must be strictly between inlet and exit",
            });
        }

        let a_throat = sections[throat];
        let as_ac = sections[sections.len() - 1] / a_throat;
        if as_ac <= 1.0 {
            return Err(NozzleError::Domain {
                what: "exit over throat area ratio must be > 1",
            });
        }
        let ax_ac = sections.iter().map(|&a| a / a_throat).collect();

        Ok(Self {
            x,
            ax_ac,
            as_ac,
            throat,
        })
    }

    /// Build a profile from dimensioned station coordinates and areas.
    pub fn from_areas(x: &[Length], sections: &[Area]) -> NozzleResult<Self> {
        Self::from_sections(
            x.iter().map(|l| l.get::<meter>()).collect(),
            sections.iter().map(|a| a.get::<square_meter>()).collect(),
        )
    }

    /// Override the exit over throat ratio, rescaling every station ratio to
    /// match. Ratios below the geometric one push throat stations out of the
    /// sonic domain and will surface as domain errors at solve time.
    pub fn with_forced_ratio(mut self, as_ac: Real) -> NozzleResult<Self> {
        if !as_ac.is_finite() || as_ac <= 1.0 {
            return Err(NozzleError::Domain {
                what: "forced exit over throat area ratio must be > 1",
            });
        }
        let scale = as_ac / self.as_ac;
        for a in &mut self.ax_ac {
            *a *= scale;
        }
        self.as_ac = as_ac;
        Ok(self)
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.ax_ac.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ax_ac.is_empty()
    }

    /// Exit area over throat area.
    pub fn as_ac(&self) -> Real {
        self.as_ac
    }

    /// Per-station area over throat area; equals 1 at the throat station.
    pub fn ax_ac(&self) -> &[Real] {
        &self.ax_ac
    }

    /// Index of the minimum-area station.
    pub fn throat_index(&self) -> usize {
        self.throat
    }

    /// Station coordinates, as given.
    pub fn x(&self) -> &[Real] {
        &self.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_core::units::{m, m2};

    fn parabolic_sections(n: usize) -> (Vec<Real>, Vec<Real>) {
        // Converging-diverging law: A(x) = 1 + 3 (x - 0.4)^2 on [0, 1]
        let x: Vec<Real> = (0..n).map(|i| i as Real / (n - 1) as Real).collect();
        let a = x.iter().map(|&xi| 1.0 + 3.0 * (xi - 0.4).powi(2)).collect();
        (x, a)
    }

    #[test]
    fn throat_and_ratios() {
        let (x, a) = parabolic_sections(21);
        let p = AreaProfile::from_sections(x, a).unwrap();
        let it = p.throat_index();
        assert!(it > 0 && it < p.len() - 1);
        assert!((p.ax_ac()[it] - 1.0).abs() < 1e-12);
        assert!(p.as_ac() > 1.0);
        assert!((p.ax_ac()[p.len() - 1] - p.as_ac()).abs() < 1e-12);
    }

    #[test]
    fn monotone_law_rejected() {
        // Purely converging: throat would sit at the exit
        let x = vec![0.0, 0.5, 1.0];
        let a = vec![3.0, 2.0, 1.0];
        assert!(matches!(
            AreaProfile::from_sections(x, a),
            Err(NozzleError::Domain { .. })
        ));
    }

    #[test]
    fn too_short_rejected() {
        assert!(AreaProfile::from_sections(vec![0.0, 1.0], vec![2.0, 1.0]).is_err());
    }

    #[test]
    fn mismatched_lengths_rejected() {
        assert!(AreaProfile::from_sections(vec![0.0, 0.5, 1.0], vec![2.0, 1.0]).is_err());
    }

    #[test]
    fn nonpositive_area_rejected() {
        assert!(AreaProfile::from_sections(vec![0.0, 0.5, 1.0], vec![2.0, 0.0, 2.0]).is_err());
        assert!(
            AreaProfile::from_sections(vec![0.0, 0.5, 1.0], vec![2.0, Real::NAN, 2.0]).is_err()
        );
    }

    #[test]
    fn nonfinite_coordinate_rejected() {
        let err = AreaProfile::from_sections(vec![0.0, Real::NAN, 1.0], vec![2.0, 1.0, 2.0])
            .unwrap_err();
        assert!(matches!(err, NozzleError::Core(_)), "got {err:?}");
    }

    #[test]
    fn forced_ratio_rescales() {
        let (x, a) = parabolic_sections(11);
        let p = AreaProfile::from_sections(x, a)
            .unwrap()
            .with_forced_ratio(3.0)
            .unwrap();
        assert_eq!(p.as_ac(), 3.0);
        assert!((p.ax_ac()[p.len() - 1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn dimensioned_constructor() {
        let x = [m(0.0), m(0.5), m(1.0)];
        let a = [m2(0.02), m2(0.01), m2(0.025)];
        let p = AreaProfile::from_areas(&x, &a).unwrap();
        assert_eq!(p.throat_index(), 1);
        assert!((p.as_ac() - 2.5).abs() < 1e-12);
    }
}
