//! Solver output: states sampled on a time grid.

use std::ops::Index;

use nalgebra::Vector2;

/// Position and velocity at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct State {
    /// Position (m)
    pub position: f64,
    /// Velocity (m/s)
    pub velocity: f64,
}

impl State {
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

impl From<Vector2<f64>> for State {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<State> for Vector2<f64> {
    fn from(s: State) -> Self {
        Vector2::new(s.position, s.velocity)
    }
}

/// One state per grid sample, in increasing time order. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<State>,
}

impl Trajectory {
    pub(crate) fn new(times: Vec<f64>, states: Vec<State>) -> Self {
        debug_assert_eq!(times.len(), states.len());
        Self { times, states }
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn positions(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.position).collect()
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.velocity).collect()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(f64, State)> {
        Some((*self.times.get(index)?, *self.states.get(index)?))
    }

    pub fn first(&self) -> Option<(f64, State)> {
        self.get(0)
    }

    pub fn last(&self) -> Option<(f64, State)> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// `(t, state)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &State)> + '_ {
        self.times.iter().copied().zip(self.states.iter())
    }
}

impl Index<usize> for Trajectory {
    type Output = State;

    fn index(&self, index: usize) -> &State {
        &self.states[index]
    }
}
