//! TransientModel trait for pluggable dynamic systems.

use nalgebra::Vector2;

use crate::error::SimResult;
use crate::params::OscillatorParameters;

/// Trait for first-order dynamic system models.
///
/// A TransientModel must implement:
/// - State type (Clone, for snapshots)
/// - Initial state
/// - RHS (right-hand side) computation: x_dot = f(t, x)
/// - Vector arithmetic for integration: add states, scale by scalar
///
/// Higher-order equations are reduced to first order before they reach
/// this trait; integrators only ever see `x_dot = f(t, x)`.
pub trait TransientModel {
    /// State type (must be Clone).
    type State: Clone;

    /// Return the state at the start of integration.
    fn initial_state(&self) -> Self::State;

    /// Compute state derivative dxdt = f(t, x).
    fn rhs(&self, t: f64, x: &Self::State) -> SimResult<Self::State>;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;
}

/// Mass-spring-damper in state-space form, `S = [x, v]`.
#[derive(Clone, Debug)]
pub struct OscillatorModel {
    params: OscillatorParameters,
}

impl OscillatorModel {
    pub fn new(params: OscillatorParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &OscillatorParameters {
        &self.params
    }
}

impl TransientModel for OscillatorModel {
    type State = Vector2<f64>;

    fn initial_state(&self) -> Self::State {
        self.params.initial_state().into()
    }

    fn rhs(&self, _t: f64, x: &Self::State) -> SimResult<Self::State> {
        Ok(self.params.derivative(&(*x).into()).into())
    }

    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State {
        a + b
    }

    fn scale(&self, a: &Self::State, scale: f64) -> Self::State {
        a * scale
    }
}
