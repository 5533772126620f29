//! Run execution: scenario in, trajectory and summary out.

use std::path::Path;

use osc_core::timing::Timer;
use osc_project::Scenario;
use osc_sim::{OscillatorParameters, Trajectory, solve_with};
use tracing::info;

use crate::error::AppResult;
use crate::hash::{compute_run_id, trajectory_digest};
use crate::query::{RunSummary, get_run_summary};
use crate::scenario_service::{
    build_parameters, build_solve_options, build_time_grid, load_scenario, validate_scenario,
};

/// Part of the run id, so results from different solver builds never collide.
pub const SOLVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result of a run.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub params: OscillatorParameters,
    pub trajectory: Trajectory,
    pub summary: RunSummary,
    pub digest: String,
    pub elapsed_s: f64,
}

pub fn run_scenario(scenario: &Scenario) -> AppResult<RunResponse> {
    validate_scenario(scenario)?;

    let params = build_parameters(scenario);
    let grid = build_time_grid(scenario)?;
    let options = build_solve_options(scenario);
    let run_id = compute_run_id(scenario, SOLVER_VERSION);

    info!(
        run_id = &run_id[..12],
        name = %scenario.name,
        samples = grid.len(),
        "starting run"
    );

    let timer = Timer::start("solve");
    let trajectory = solve_with(&params, &grid, &options)?;
    let elapsed_s = timer.stop_and_print();

    let summary = get_run_summary(&params, &trajectory)?;
    let digest = trajectory_digest(&trajectory);

    info!(
        run_id = &run_id[..12],
        regime = summary.regime.label(),
        elapsed_s,
        "run complete"
    );

    Ok(RunResponse {
        run_id,
        params,
        trajectory,
        summary,
        digest,
        elapsed_s,
    })
}

/// Load a scenario file and run it.
pub fn run_file(path: &Path) -> AppResult<(Scenario, RunResponse)> {
    let scenario = load_scenario(path)?;
    let response = run_scenario(&scenario)?;
    Ok((scenario, response))
}
