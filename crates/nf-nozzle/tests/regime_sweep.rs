//! Integration: one nozzle swept through every operating regime.

use nf_core::{GasProperties, Tolerances, nearly_equal};
use nf_nozzle::{AreaProfile, FlowRegime, Nozzle, exit_mach_confined};

fn cd_profile(n: usize) -> AreaProfile {
    let x: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
    let a = x
        .iter()
        .map(|&xi| 1.0 + 5.0 * (xi - 0.35).powi(2))
        .collect();
    AreaProfile::from_sections(x, a).unwrap()
}

#[test]
fn sweep_through_all_regimes() {
    let gas = GasProperties::air();
    let mut nozzle = Nozzle::new(cd_profile(101), gas).unwrap();
    let th = *nozzle.thresholds();
    let it = nozzle.profile().throat_index();

    let cases = [
        (1.0 + 0.4 * (th.npr0 - 1.0), FlowRegime::Unchoked),
        (0.5 * (th.npr0 + th.npr_sw), FlowRegime::ShockInNozzle),
        (0.5 * (th.npr_sw + th.npr1), FlowRegime::OverexpandedJet),
        (2.0 * th.npr1, FlowRegime::UnderexpandedJet),
    ];

    for (npr, expected) in cases {
        assert_eq!(th.classify(npr).unwrap(), expected, "NPR={npr}");
        nozzle.set_npr(npr).unwrap();

        let mach = nozzle.mach().unwrap();
        let ps = nozzle.ps().unwrap();
        let ptot = nozzle.ptot().unwrap();
        assert_eq!(mach.len(), nozzle.profile().len());
        assert_eq!(ps.len(), mach.len());
        assert_eq!(ptot.len(), mach.len());

        // No loss at or upstream of the throat, no recovery anywhere
        assert_eq!(ptot[it], 1.0, "NPR={npr}");
        for w in ptot.windows(2) {
            assert!(w[1] <= w[0] + 1e-15, "NPR={npr}");
        }

        // Static never exceeds total
        for (p, pt) in ps.iter().zip(ptot) {
            assert!(p <= pt);
            assert!(*p > 0.0);
        }

        // A shock station exists exactly in the shock-in-nozzle regime
        assert_eq!(
            nozzle.shock_index().unwrap().is_some(),
            expected == FlowRegime::ShockInNozzle,
            "NPR={npr}"
        );
    }
}

#[test]
fn field_exit_agrees_with_scalar_solver() {
    let gas = GasProperties::air();
    let mut nozzle = Nozzle::new(cd_profile(401), gas).unwrap();
    let th = *nozzle.thresholds();
    let as_ac = nozzle.profile().as_ac();
    let tol = Tolerances {
        abs: 1e-9,
        rel: 1e-6,
    };

    for npr in [
        1.0 + 0.5 * (th.npr0 - 1.0),
        th.npr0,
        0.3 * th.npr0 + 0.7 * th.npr_sw,
        th.npr_sw * 1.5,
        th.npr1 * 1.5,
    ] {
        nozzle.set_npr(npr).unwrap();
        let field_exit = *nozzle.mach().unwrap().last().unwrap();
        let scalar = exit_mach_confined(as_ac, npr, gas).unwrap();
        assert!(
            nearly_equal(field_exit, scalar, tol),
            "NPR={npr}: field {field_exit} vs scalar {scalar}"
        );
    }
}

#[test]
fn shock_walks_downstream_with_npr() {
    let gas = GasProperties::air();
    let mut nozzle = Nozzle::new(cd_profile(201), gas).unwrap();
    let th = *nozzle.thresholds();

    let mut prev = None;
    for i in 1..=8 {
        let npr = th.npr0 + (th.npr_sw - th.npr0) * i as f64 / 9.0;
        nozzle.set_npr(npr).unwrap();
        let ish = nozzle.shock_index().unwrap().expect("shock expected");
        if let Some(p) = prev {
            assert!(ish >= p, "NPR={npr}: shock moved upstream ({ish} < {p})");
        }
        prev = Some(ish);
    }
}

#[test]
fn refinement_tightens_shock_position() {
    // Station-spacing approximation: refining the grid must keep the shock
    // location (as a coordinate) stable to within the coarse spacing
    let gas = GasProperties::air();
    let npr_of = |n: usize| {
        let mut nz = Nozzle::new(cd_profile(n), gas).unwrap();
        let th = *nz.thresholds();
        let npr = 0.5 * (th.npr0 + th.npr_sw);
        nz.set_npr(npr).unwrap();
        let ish = nz.shock_index().unwrap().unwrap();
        nz.profile().x()[ish]
    };
    let coarse = npr_of(51);
    let fine = npr_of(801);
    assert!(
        (coarse - fine).abs() <= 1.5 / 50.0,
        "coarse {coarse} vs fine {fine}"
    );
}

#[test]
fn gas_is_threaded_not_ambient() {
    // Two nozzles with different gases solved interleaved must not affect
    // each other
    let air = GasProperties::air();
    let hot = GasProperties::new(1.3).unwrap();

    let mut a = Nozzle::new(cd_profile(101), air).unwrap();
    let mut b = Nozzle::new(cd_profile(101), hot).unwrap();
    assert_ne!(a.thresholds().npr1, b.thresholds().npr1);

    a.set_npr(1.4).unwrap();
    b.set_npr(1.4).unwrap();
    let ma_first = a.mach().unwrap().to_vec();
    a.set_npr(1.4).unwrap();
    assert_eq!(a.mach().unwrap(), &ma_first[..], "solve must be deterministic");
    assert_ne!(a.mach().unwrap(), b.mach().unwrap());
}
