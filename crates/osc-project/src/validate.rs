//! Scenario validation logic.

use crate::schema::{AnimationDef, OscillatorDef, Scenario, SolverDef, TimeGridDef};

pub const LATEST_VERSION: u32 = 1;

/// Largest `time_grid.samples` a scenario may request.
pub const MAX_SAMPLES: usize = 1_000_000;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }
    if scenario.name.trim().is_empty() {
        return Err(invalid("name", &scenario.name, "must not be empty"));
    }

    validate_oscillator(&scenario.oscillator)?;
    validate_time_grid(&scenario.time_grid)?;
    validate_solver(&scenario.solver)?;
    validate_animation(&scenario.animation)?;
    Ok(())
}

fn validate_oscillator(osc: &OscillatorDef) -> Result<(), ValidationError> {
    positive("oscillator.mass_kg", osc.mass_kg)?;
    positive("oscillator.stiffness_n_per_m", osc.stiffness_n_per_m)?;
    finite("oscillator.damping_n_s_per_m", osc.damping_n_s_per_m)?;
    finite("oscillator.initial_position_m", osc.initial_position_m)?;
    finite(
        "oscillator.initial_velocity_m_per_s",
        osc.initial_velocity_m_per_s,
    )?;
    Ok(())
}

fn validate_time_grid(grid: &TimeGridDef) -> Result<(), ValidationError> {
    finite("time_grid.t_start_s", grid.t_start_s)?;
    finite("time_grid.t_end_s", grid.t_end_s)?;
    if grid.t_end_s <= grid.t_start_s {
        return Err(invalid(
            "time_grid.t_end_s",
            grid.t_end_s,
            "must be greater than t_start_s",
        ));
    }
    if grid.samples < 2 {
        return Err(invalid(
            "time_grid.samples",
            grid.samples,
            "need at least 2 samples",
        ));
    }
    if grid.samples > MAX_SAMPLES {
        return Err(invalid(
            "time_grid.samples",
            grid.samples,
            &format!("at most {MAX_SAMPLES} samples"),
        ));
    }
    Ok(())
}

fn validate_solver(solver: &SolverDef) -> Result<(), ValidationError> {
    positive("solver.max_step_s", solver.max_step_s)
}

fn validate_animation(animation: &AnimationDef) -> Result<(), ValidationError> {
    positive("animation.playback_speed", animation.playback_speed)
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
