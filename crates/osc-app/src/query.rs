//! Query helpers for extracting data from solved runs.

use std::str::FromStr;

use osc_sim::{
    DampingRegime, OscillatorParameters, State, Trajectory, damping_ratio, energy,
    natural_frequency,
};

use crate::error::{AppError, AppResult};

/// Summary of a run's time range and physics.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub time_range: (f64, f64),
    pub sample_count: usize,
    pub natural_frequency_rad_s: f64,
    pub damping_ratio: f64,
    pub regime: DampingRegime,
    pub peak_abs_position_m: f64,
    pub initial_energy_j: f64,
    pub final_energy_j: f64,
    pub final_state: State,
}

pub fn get_run_summary(
    params: &OscillatorParameters,
    trajectory: &Trajectory,
) -> AppResult<RunSummary> {
    let (Some((t_min, first)), Some((t_max, last))) = (trajectory.first(), trajectory.last())
    else {
        return Err(AppError::InvalidInput("No samples in run".to_string()));
    };

    let peak_abs_position_m = trajectory
        .states()
        .iter()
        .map(|s| s.position.abs())
        .fold(0.0_f64, f64::max);

    Ok(RunSummary {
        time_range: (t_min, t_max),
        sample_count: trajectory.len(),
        natural_frequency_rad_s: natural_frequency(params),
        damping_ratio: damping_ratio(params),
        regime: osc_sim::regime(params),
        peak_abs_position_m,
        initial_energy_j: energy(params, &first),
        final_energy_j: energy(params, &last),
        final_state: last,
    })
}

/// Per-sample quantity that can be pulled out of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesVariable {
    Position,
    Velocity,
    Energy,
}

impl SeriesVariable {
    pub fn name(&self) -> &'static str {
        match self {
            SeriesVariable::Position => "position",
            SeriesVariable::Velocity => "velocity",
            SeriesVariable::Energy => "energy",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SeriesVariable::Position => "m",
            SeriesVariable::Velocity => "m/s",
            SeriesVariable::Energy => "J",
        }
    }
}

impl FromStr for SeriesVariable {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "position" => Ok(SeriesVariable::Position),
            "v" | "velocity" => Ok(SeriesVariable::Velocity),
            "e" | "energy" => Ok(SeriesVariable::Energy),
            _ => Err(AppError::InvalidInput(format!(
                "Unknown variable: {} (expected position, velocity or energy)",
                s
            ))),
        }
    }
}

/// Extract `(t, value)` pairs for one variable.
pub fn extract_series(
    params: &OscillatorParameters,
    trajectory: &Trajectory,
    variable: SeriesVariable,
) -> Vec<(f64, f64)> {
    trajectory
        .iter()
        .map(|(t, s)| {
            let value = match variable {
                SeriesVariable::Position => s.position,
                SeriesVariable::Velocity => s.velocity,
                SeriesVariable::Energy => energy(params, s),
            };
            (t, value)
        })
        .collect()
}
