//! Physical quantities derived from parameters and trajectories.

use std::f64::consts::TAU;

use osc_core::units::{Energy, Frequency, hz, joules};
use osc_core::{Tolerances, nearly_equal};

use crate::params::OscillatorParameters;
use crate::trajectory::{State, Trajectory};

/// Qualitative behavior implied by the damping ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DampingRegime {
    /// ζ = 0
    Undamped,
    /// 0 < ζ < 1
    Underdamped,
    /// ζ = 1
    CriticallyDamped,
    /// ζ > 1
    Overdamped,
    /// ζ < 0, amplitude grows
    EnergyInjecting,
}

impl DampingRegime {
    pub fn label(&self) -> &'static str {
        match self {
            DampingRegime::Undamped => "undamped",
            DampingRegime::Underdamped => "underdamped",
            DampingRegime::CriticallyDamped => "critically damped",
            DampingRegime::Overdamped => "overdamped",
            DampingRegime::EnergyInjecting => "energy-injecting",
        }
    }
}

/// Undamped angular frequency ω = √(k/m) in rad/s.
pub fn natural_frequency(params: &OscillatorParameters) -> f64 {
    (params.stiffness / params.mass).sqrt()
}

/// Undamped period 2π/ω in seconds.
pub fn period(params: &OscillatorParameters) -> f64 {
    TAU / natural_frequency(params)
}

/// Undamped cyclic frequency ω/2π.
pub fn natural_frequency_hz(params: &OscillatorParameters) -> Frequency {
    hz(natural_frequency(params) / TAU)
}

/// ζ = c_eff / (2·m·ω), with `c_eff` in the dissipative sign convention.
pub fn damping_ratio(params: &OscillatorParameters) -> f64 {
    params.effective_damping() / (2.0 * params.mass * natural_frequency(params))
}

pub fn regime(params: &OscillatorParameters) -> DampingRegime {
    let zeta = damping_ratio(params);
    let tol = Tolerances {
        abs: 1e-9,
        rel: 1e-9,
    };
    if zeta == 0.0 {
        DampingRegime::Undamped
    } else if zeta < 0.0 {
        DampingRegime::EnergyInjecting
    } else if nearly_equal(zeta, 1.0, tol) {
        DampingRegime::CriticallyDamped
    } else if zeta < 1.0 {
        DampingRegime::Underdamped
    } else {
        DampingRegime::Overdamped
    }
}

/// Mechanical energy ½·m·v² + ½·k·x² in joules.
pub fn energy(params: &OscillatorParameters, state: &State) -> f64 {
    0.5 * params.mass * state.velocity * state.velocity
        + 0.5 * params.stiffness * state.position * state.position
}

pub fn energy_quantity(params: &OscillatorParameters, state: &State) -> Energy {
    joules(energy(params, state))
}

pub fn energy_series(params: &OscillatorParameters, trajectory: &Trajectory) -> Vec<f64> {
    trajectory
        .states()
        .iter()
        .map(|s| energy(params, s))
        .collect()
}

/// Local maxima of `|x|` as `(t, |x|)`, one per half-cycle for an
/// oscillating trajectory. Endpoints are never reported.
pub fn peak_envelope(trajectory: &Trajectory) -> Vec<(f64, f64)> {
    let amp: Vec<f64> = trajectory.states().iter().map(|s| s.position.abs()).collect();
    let times = trajectory.times();
    (1..amp.len().saturating_sub(1))
        .filter(|&i| amp[i] >= amp[i - 1] && amp[i] > amp[i + 1])
        .map(|i| (times[i], amp[i]))
        .collect()
}
