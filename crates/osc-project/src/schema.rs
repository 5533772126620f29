//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

/// One simulation setup: physics, sampling, solver and playback.
///
/// ```yaml
/// version: 1
/// name: Negative damping demo
/// oscillator:
///   mass_kg: 10.0
///   stiffness_n_per_m: 90.0
///   damping_n_s_per_m: -20.0
///   damping_convention: against_velocity
///   initial_position_m: 5.0
///   initial_velocity_m_per_s: 0.0
/// time_grid:
///   t_start_s: 0.0
///   t_end_s: 10.0
///   samples: 100
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub oscillator: OscillatorDef,
    pub time_grid: TimeGridDef,
    #[serde(default)]
    pub solver: SolverDef,
    #[serde(default)]
    pub animation: AnimationDef,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            version: crate::validate::LATEST_VERSION,
            name: "Negative damping demo".to_string(),
            oscillator: OscillatorDef {
                mass_kg: 10.0,
                stiffness_n_per_m: 90.0,
                damping_n_s_per_m: -20.0,
                damping_convention: DampingConventionDef::AgainstVelocity,
                initial_position_m: 5.0,
                initial_velocity_m_per_s: 0.0,
            },
            time_grid: TimeGridDef {
                t_start_s: 0.0,
                t_end_s: 10.0,
                samples: 100,
            },
            solver: SolverDef::default(),
            animation: AnimationDef::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OscillatorDef {
    pub mass_kg: f64,
    pub stiffness_n_per_m: f64,
    pub damping_n_s_per_m: f64,
    #[serde(default)]
    pub damping_convention: DampingConventionDef,
    pub initial_position_m: f64,
    #[serde(default)]
    pub initial_velocity_m_per_s: f64,
}

/// Sign of the damping term: `against_velocity` is `-c·v`, `along_velocity` is `+c·v`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DampingConventionDef {
    #[default]
    AgainstVelocity,
    AlongVelocity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeGridDef {
    #[serde(default)]
    pub t_start_s: f64,
    pub t_end_s: f64,
    pub samples: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    #[serde(default = "default_max_step_s")]
    pub max_step_s: f64,
}

impl Default for SolverDef {
    fn default() -> Self {
        Self {
            max_step_s: default_max_step_s(),
        }
    }
}

fn default_max_step_s() -> f64 {
    0.01
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationDef {
    /// Simulated seconds per wall-clock second
    #[serde(default = "default_playback_speed")]
    pub playback_speed: f64,
    #[serde(default = "default_show_trail")]
    pub show_trail: bool,
}

impl Default for AnimationDef {
    fn default() -> Self {
        Self {
            playback_speed: default_playback_speed(),
            show_trail: default_show_trail(),
        }
    }
}

fn default_playback_speed() -> f64 {
    1.0
}

fn default_show_trail() -> bool {
    true
}
