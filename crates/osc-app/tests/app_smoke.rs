//! End-to-end: scenario file -> run -> summary, series and frames.

use osc_app::{
    AppError, FrameSchedule, SeriesVariable, extract_series, load_scenario, run_file,
    run_scenario, save_scenario,
};
use osc_project::Scenario;
use osc_sim::{DampingRegime, State};

#[test]
fn default_scenario_runs() {
    let response = run_scenario(&Scenario::default()).unwrap();

    assert_eq!(response.trajectory.len(), 100);
    assert_eq!(response.trajectory[0], State::new(5.0, 0.0));
    assert_eq!(response.summary.sample_count, 100);
    assert_eq!(response.summary.time_range, (0.0, 10.0));
    assert_eq!(response.run_id.len(), 64);
    assert_eq!(response.digest.len(), 64);
    assert!(response.elapsed_s >= 0.0);
}

#[test]
fn repeated_runs_share_id_and_digest() {
    let a = run_scenario(&Scenario::default()).unwrap();
    let b = run_scenario(&Scenario::default()).unwrap();
    assert_eq!(a.run_id, b.run_id);
    assert_eq!(a.digest, b.digest);
}

#[test]
fn yaml_file_roundtrip_through_service() {
    let path = std::env::temp_dir().join("osc_app_smoke_scenario.yml");
    save_scenario(&path, &Scenario::default()).unwrap();

    let loaded = load_scenario(&path).unwrap();
    assert_eq!(loaded, Scenario::default());

    let (scenario, response) = run_file(&path).unwrap();
    assert_eq!(scenario.name, "Negative damping demo");
    assert_eq!(response.summary.regime, DampingRegime::EnergyInjecting);
    assert!(response.summary.final_energy_j > response.summary.initial_energy_j);
}

#[test]
fn invalid_scenario_is_validation_error() {
    let mut scenario = Scenario::default();
    scenario.oscillator.mass_kg = 0.0;
    assert!(matches!(
        run_scenario(&scenario),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn oversized_grid_is_validation_error() {
    let mut scenario = Scenario::default();
    scenario.time_grid.samples = usize::MAX;
    assert!(matches!(
        run_scenario(&scenario),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn runaway_scenario_is_simulation_error() {
    let mut scenario = Scenario::default();
    scenario.oscillator.mass_kg = 1.0;
    scenario.oscillator.stiffness_n_per_m = 1.0;
    scenario.oscillator.damping_n_s_per_m = -50.0;
    scenario.time_grid.t_end_s = 200.0;
    scenario.time_grid.samples = 201;
    scenario.solver.max_step_s = 0.1;
    assert!(matches!(
        run_scenario(&scenario),
        Err(AppError::Simulation(_))
    ));
}

#[test]
fn frames_and_series_line_up() {
    let response = run_scenario(&Scenario::default()).unwrap();
    let schedule = FrameSchedule::new(&response.trajectory, 1.0).unwrap();
    let series = extract_series(
        &response.params,
        &response.trajectory,
        SeriesVariable::Position,
    );

    assert_eq!(schedule.frame_count(), series.len());
    for frame in schedule.iter(&response.trajectory) {
        assert_eq!(series[frame.index], (frame.t, frame.state.position));
    }
}
