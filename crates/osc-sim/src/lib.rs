//! Trajectory solver for the damped harmonic oscillator.
//!
//! Provides:
//! - Oscillator parameters with an explicit damping sign convention
//! - State-space reduction of `m·x'' = -k·x ± c·x'` to `[x, v]`
//! - Validated sample grids
//! - Fixed-step RK4 integrator behind a pluggable `TransientModel` seam
//! - Physical analysis (natural frequency, damping ratio, energy, envelope)

pub mod analysis;
pub mod error;
pub mod grid;
pub mod integrator;
pub mod model;
pub mod params;
pub mod solve;
pub mod trajectory;

// Re-exports for public API
pub use analysis::{
    DampingRegime, damping_ratio, energy, energy_quantity, energy_series, natural_frequency,
    natural_frequency_hz, peak_envelope, period, regime,
};
pub use error::{SimError, SimResult};
pub use grid::TimeGrid;
pub use integrator::{Integrator, RK4};
pub use model::{OscillatorModel, TransientModel};
pub use params::{DampingConvention, OscillatorParameters};
pub use solve::{SolveOptions, solve, solve_at, solve_with};
pub use trajectory::{State, Trajectory};
