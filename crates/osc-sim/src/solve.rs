//! Trajectory solve over a time grid.

use tracing::{debug, trace};

use crate::error::{SimError, SimResult};
use crate::grid::TimeGrid;
use crate::integrator::{Integrator, RK4};
use crate::model::{OscillatorModel, TransientModel};
use crate::params::OscillatorParameters;
use crate::trajectory::{State, Trajectory};

/// Options for a solve.
#[derive(Clone, Copy, Debug)]
pub struct SolveOptions {
    /// Largest RK4 substep (seconds). Each grid interval is split evenly.
    pub max_step: f64,
    /// Optional cap on total substeps. `None` integrates any grid.
    pub max_steps: Option<usize>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_step: 1e-2,
            max_steps: None,
        }
    }
}

impl SolveOptions {
    fn validate(&self) -> SimResult<()> {
        if !self.max_step.is_finite() || self.max_step <= 0.0 {
            return Err(SimError::InvalidParameter {
                what: "max_step must be positive and finite",
            });
        }
        if self.max_steps == Some(0) {
            return Err(SimError::InvalidParameter {
                what: "max_steps must be positive",
            });
        }
        Ok(())
    }

    /// Number of equal substeps used across an interval of length `span`.
    fn substeps(&self, span: f64) -> usize {
        (span / self.max_step).ceil().max(1.0) as usize
    }

    /// Total substeps for `grid`. A set `max_steps` that the span exceeds is
    /// an `InvalidTimeGrid`.
    fn step_count(&self, grid: &TimeGrid) -> SimResult<usize> {
        let total = grid
            .intervals()
            .map(|(t0, t1)| self.substeps(t1 - t0))
            .fold(0usize, |acc, n| acc.saturating_add(n));
        match self.max_steps {
            Some(cap) if total > cap => Err(SimError::grid(format!(
                "span of {} s needs {total} substeps at max_step = {} s, cap is {cap}",
                grid.span(),
                self.max_step
            ))),
            _ => Ok(total),
        }
    }
}

/// Solve with default options.
pub fn solve(params: &OscillatorParameters, grid: &TimeGrid) -> SimResult<Trajectory> {
    solve_with(params, grid, &SolveOptions::default())
}

/// Validate raw sample times into a grid, then solve with default options.
pub fn solve_at(params: &OscillatorParameters, samples: &[f64]) -> SimResult<Trajectory> {
    let grid = TimeGrid::from_samples(samples.to_vec())?;
    solve(params, &grid)
}

/// Integrate the equation of motion from `(x0, v0)` at `grid.start()` through
/// every grid sample with fixed-step RK4.
///
/// The first state is exactly `(x0, v0)`. Sample times are landed on exactly;
/// there is no interpolation.
pub fn solve_with(
    params: &OscillatorParameters,
    grid: &TimeGrid,
    options: &SolveOptions,
) -> SimResult<Trajectory> {
    params.validate()?;
    options.validate()?;

    let total_steps = options.step_count(grid)?;

    debug!(
        samples = grid.len(),
        t_start = grid.start(),
        t_end = grid.end(),
        total_steps,
        "solving oscillator trajectory"
    );

    let model = OscillatorModel::new(*params);
    let integrator = RK4;

    let mut x = model.initial_state();
    let mut states = Vec::with_capacity(grid.len());
    states.push(params.initial_state());

    for (t0, t1) in grid.intervals() {
        x = integrator.advance(&model, t0, t1, &x, options.substeps(t1 - t0))?;

        let state = State::from(x);
        if !state.is_finite() {
            debug!(t = t1, "non-finite state, aborting solve");
            return Err(SimError::IntegrationFailure {
                t: t1,
                what: "state became non-finite",
            });
        }
        trace!(t = t1, x = state.position, v = state.velocity, "sample");
        states.push(state);
    }

    debug!(samples = states.len(), "solve complete");
    Ok(Trajectory::new(grid.samples().to_vec(), states))
}
