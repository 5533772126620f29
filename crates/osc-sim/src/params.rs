//! Physical parameters of a mass-spring-damper.

use osc_core::units::{Length, Mass, Velocity, si};

use crate::error::{SimError, SimResult};
use crate::trajectory::State;

/// How the sign of the damping coefficient is read.
///
/// The equation of motion is
///
/// ```text
/// AgainstVelocity:  m · x'' = -k·x - c·x'
/// AlongVelocity:    m · x'' = -k·x + c·x'
/// ```
///
/// `AgainstVelocity` is the textbook `m·x'' + c·x' + k·x = 0` form: a
/// positive `c` dissipates energy and a negative `c` injects it.
/// `AlongVelocity` flips the sign of the damping force.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DampingConvention {
    #[default]
    AgainstVelocity,
    AlongVelocity,
}

/// Immutable inputs of one simulation run.
///
/// Fields are plain SI magnitudes. Nothing is checked on construction;
/// [`OscillatorParameters::validate`] runs at the solver boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OscillatorParameters {
    /// Mass (kg)
    pub mass: f64,
    /// Spring stiffness (N/m)
    pub stiffness: f64,
    /// Damping coefficient (N·s/m), sign read per `convention`
    pub damping: f64,
    /// Initial position (m)
    pub x0: f64,
    /// Initial velocity (m/s)
    pub v0: f64,
    pub convention: DampingConvention,
}

impl OscillatorParameters {
    pub fn new(mass: f64, stiffness: f64, damping: f64, x0: f64, v0: f64) -> Self {
        Self {
            mass,
            stiffness,
            damping,
            x0,
            v0,
            convention: DampingConvention::default(),
        }
    }

    /// Build from typed quantities. Stiffness and damping stay in N/m and N·s/m.
    pub fn from_quantities(
        mass: Mass,
        stiffness_n_per_m: f64,
        damping_n_s_per_m: f64,
        x0: Length,
        v0: Velocity,
    ) -> Self {
        Self::new(
            si::kilograms(mass),
            stiffness_n_per_m,
            damping_n_s_per_m,
            si::meters(x0),
            si::meters_per_second(v0),
        )
    }

    pub fn with_convention(mut self, convention: DampingConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Reject degenerate or non-physical parameters.
    pub fn validate(&self) -> SimResult<()> {
        if !self.mass.is_finite() {
            return Err(SimError::InvalidParameter {
                what: "mass must be finite",
            });
        }
        if self.mass == 0.0 {
            return Err(SimError::InvalidParameter {
                what: "mass must be non-zero",
            });
        }
        if self.mass < 0.0 {
            return Err(SimError::InvalidParameter {
                what: "mass must be positive",
            });
        }
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(SimError::InvalidParameter {
                what: "stiffness must be positive and finite",
            });
        }
        if !self.damping.is_finite() {
            return Err(SimError::InvalidParameter {
                what: "damping coefficient must be finite",
            });
        }
        if !self.x0.is_finite() || !self.v0.is_finite() {
            return Err(SimError::InvalidParameter {
                what: "initial conditions must be finite",
            });
        }
        Ok(())
    }

    /// Damping coefficient in the dissipative sense: positive removes energy.
    pub fn effective_damping(&self) -> f64 {
        match self.convention {
            DampingConvention::AlongVelocity => -self.damping,
            DampingConvention::AgainstVelocity => self.damping,
        }
    }

    pub fn initial_state(&self) -> State {
        State::new(self.x0, self.v0)
    }

    /// First-order form of the equation of motion: `[x, v] -> [v, a]`.
    pub fn derivative(&self, state: &State) -> State {
        let accel =
            (-self.effective_damping() * state.velocity - self.stiffness * state.position)
                / self.mass;
        State::new(state.velocity, accel)
    }
}
