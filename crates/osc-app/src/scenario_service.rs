//! Scenario file access and translation into solver inputs.

use std::path::Path;

use osc_project::{DampingConventionDef, Scenario};
use osc_sim::{DampingConvention, OscillatorParameters, SolveOptions, TimeGrid};

use crate::error::{AppError, AppResult};

/// Load a scenario, picking the format from the file extension.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    match extension(path).as_deref() {
        Some("yaml") | Some("yml") => Ok(osc_project::load_yaml(path)?),
        Some("json") => Ok(osc_project::load_json(path)?),
        _ => Err(AppError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    match extension(path).as_deref() {
        Some("yaml") | Some("yml") => Ok(osc_project::save_yaml(path, scenario)?),
        Some("json") => Ok(osc_project::save_json(path, scenario)?),
        _ => Err(AppError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

pub fn validate_scenario(scenario: &Scenario) -> AppResult<()> {
    osc_project::validate_scenario(scenario)?;
    Ok(())
}

pub fn build_parameters(scenario: &Scenario) -> OscillatorParameters {
    let osc = &scenario.oscillator;
    let convention = match osc.damping_convention {
        DampingConventionDef::AlongVelocity => DampingConvention::AlongVelocity,
        DampingConventionDef::AgainstVelocity => DampingConvention::AgainstVelocity,
    };
    OscillatorParameters::new(
        osc.mass_kg,
        osc.stiffness_n_per_m,
        osc.damping_n_s_per_m,
        osc.initial_position_m,
        osc.initial_velocity_m_per_s,
    )
    .with_convention(convention)
}

pub fn build_time_grid(scenario: &Scenario) -> AppResult<TimeGrid> {
    let grid = &scenario.time_grid;
    Ok(TimeGrid::linspace(grid.t_start_s, grid.t_end_s, grid.samples)?)
}

pub fn build_solve_options(scenario: &Scenario) -> SolveOptions {
    SolveOptions {
        max_step: scenario.solver.max_step_s,
        ..SolveOptions::default()
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
