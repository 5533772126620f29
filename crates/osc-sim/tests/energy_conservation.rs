//! Undamped oscillator: mechanical energy stays constant.

use osc_sim::{
    DampingRegime, OscillatorParameters, SolveOptions, TimeGrid, energy_series, regime, solve,
    solve_with,
};

#[test]
fn undamped_energy_is_conserved() {
    let params = OscillatorParameters::new(1.0, 4.0, 0.0, 1.0, 0.0);
    assert_eq!(regime(&params), DampingRegime::Undamped);

    let grid = TimeGrid::linspace(0.0, 20.0, 401).unwrap();
    let traj = solve(&params, &grid).unwrap();

    let energies = energy_series(&params, &traj);
    let e0 = energies[0];
    assert!((e0 - 2.0).abs() < 1e-12, "E0 = ½·k·x0² = 2, got {e0}");

    let worst = energies
        .iter()
        .map(|e| ((e - e0) / e0).abs())
        .fold(0.0_f64, f64::max);
    assert!(worst < 1e-6, "relative energy drift {worst:e}");
}

#[test]
fn undamped_matches_closed_form() {
    // x(t) = x0·cos(ωt) + (v0/ω)·sin(ωt), ω = 2
    let params = OscillatorParameters::new(1.0, 4.0, 0.0, 0.5, 1.0);
    let grid = TimeGrid::linspace(0.0, 10.0, 201).unwrap();
    let traj = solve(&params, &grid).unwrap();

    for (t, state) in traj.iter() {
        let exact = 0.5 * (2.0 * t).cos() + 0.5 * (2.0 * t).sin();
        assert!(
            (state.position - exact).abs() < 1e-6,
            "t = {t}: got {}, expected {exact}",
            state.position
        );
    }
}

#[test]
fn coarse_substeps_drift_more_than_fine() {
    let params = OscillatorParameters::new(1.0, 4.0, 0.0, 1.0, 0.0);
    let grid = TimeGrid::linspace(0.0, 50.0, 51).unwrap();

    let drift = |max_step: f64| {
        let opts = SolveOptions {
            max_step,
            ..SolveOptions::default()
        };
        let traj = solve_with(&params, &grid, &opts).unwrap();
        let e = energy_series(&params, &traj);
        ((e[e.len() - 1] - e[0]) / e[0]).abs()
    };

    assert!(drift(0.5) > drift(0.01));
}
