//! Error types for trajectory solving.

use thiserror::Error;

/// Errors surfaced at the solver boundary.
///
/// No partial trajectory accompanies an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    #[error("Invalid time grid: {what}")]
    InvalidTimeGrid { what: String },

    #[error("Integration failed at t = {t} s: {what}")]
    IntegrationFailure { t: f64, what: &'static str },
}

pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    pub(crate) fn grid(what: impl Into<String>) -> Self {
        SimError::InvalidTimeGrid { what: what.into() }
    }
}
