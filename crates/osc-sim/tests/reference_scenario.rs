//! The m=10, k=90, c=-20, x0=5 scenario plus determinism checks.

use osc_sim::{
    DampingRegime, OscillatorParameters, SimError, State, TimeGrid, energy, peak_envelope,
    regime, solve, solve_at,
};
use proptest::prelude::*;

fn reference() -> OscillatorParameters {
    OscillatorParameters::new(10.0, 90.0, -20.0, 5.0, 0.0)
}

#[test]
fn reference_scenario_stays_finite_and_bounded() {
    let params = reference();
    let grid = TimeGrid::linspace(0.0, 10.0, 100).unwrap();
    let traj = solve(&params, &grid).unwrap();

    assert_eq!(traj.len(), 100);
    assert_eq!(traj[0].position, 5.0);
    assert_eq!(traj[0], State::new(5.0, 0.0));

    // Energy can change at most at rate |c|·v², so |x(t)| <= x0·exp(|c|·t/m).
    let rate = params.damping.abs() / params.mass;
    for (t, state) in traj.iter() {
        assert!(state.is_finite(), "non-finite state at t = {t}");
        let bound = params.x0 * (rate * t).exp() * 1.01;
        assert!(
            state.position.abs() <= bound,
            "|x({t})| = {} exceeds {bound}",
            state.position.abs()
        );
    }
}

#[test]
fn reference_scenario_injects_energy() {
    let params = reference();
    assert_eq!(regime(&params), DampingRegime::EnergyInjecting);

    let grid = TimeGrid::linspace(0.0, 10.0, 100).unwrap();
    let traj = solve(&params, &grid).unwrap();

    let e0 = energy(&params, &traj[0]);
    let e_end = energy(&params, &traj[traj.len() - 1]);
    assert!((e0 - 1125.0).abs() < 1e-9);
    assert!(e_end > 100.0 * e0, "E(10) = {e_end} should far exceed E(0) = {e0}");

    let peaks = peak_envelope(&traj);
    assert!(peaks.len() >= 5, "expected several peaks, got {}", peaks.len());
    for pair in peaks.windows(2) {
        assert!(pair[1].1 > pair[0].1);
    }
    assert!(peaks[peaks.len() - 1].1 > params.x0);
}

#[test]
fn zero_mass_is_invalid_parameter() {
    let params = OscillatorParameters { mass: 0.0, ..reference() };
    let grid = TimeGrid::linspace(0.0, 10.0, 100).unwrap();
    assert!(matches!(
        solve(&params, &grid),
        Err(SimError::InvalidParameter { .. })
    ));
}

#[test]
fn malformed_grids_are_invalid_time_grid() {
    let params = reference();
    for samples in [vec![], vec![0.0], vec![0.0, 0.0], vec![0.0, 1.0, 0.5]] {
        assert!(
            matches!(
                solve_at(&params, &samples),
                Err(SimError::InvalidTimeGrid { .. })
            ),
            "samples {samples:?} should be rejected"
        );
    }
}

#[test]
fn repeated_solves_are_bitwise_identical() {
    let params = reference();
    let grid = TimeGrid::linspace(0.0, 10.0, 100).unwrap();
    let a = solve(&params, &grid).unwrap();
    let b = solve(&params, &grid).unwrap();
    for (sa, sb) in a.states().iter().zip(b.states()) {
        assert_eq!(sa.position.to_bits(), sb.position.to_bits());
        assert_eq!(sa.velocity.to_bits(), sb.velocity.to_bits());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn first_state_is_exact_initial_condition(
        mass in 0.1_f64..50.0,
        stiffness in 0.1_f64..200.0,
        damping in -5.0_f64..5.0,
        x0 in -10.0_f64..10.0,
        v0 in -10.0_f64..10.0,
    ) {
        let params = OscillatorParameters::new(mass, stiffness, damping, x0, v0);
        let traj = solve_at(&params, &[0.0, 0.25, 0.5, 1.0]).unwrap();
        prop_assert_eq!(traj[0], State::new(x0, v0));
        prop_assert_eq!(traj.len(), 4);
    }

    #[test]
    fn solve_is_deterministic(
        stiffness in 0.1_f64..50.0,
        damping in -1.0_f64..1.0,
        x0 in -5.0_f64..5.0,
    ) {
        let params = OscillatorParameters::new(1.0, stiffness, damping, x0, 0.0);
        let grid = TimeGrid::linspace(0.0, 2.0, 21).unwrap();
        prop_assert_eq!(solve(&params, &grid).unwrap(), solve(&params, &grid).unwrap());
    }
}
