//! Error types for the osc-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Unsupported scenario file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for osc-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<osc_project::ProjectError> for AppError {
    fn from(err: osc_project::ProjectError) -> Self {
        match err {
            osc_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Scenario(other.to_string()),
        }
    }
}

impl From<osc_project::ValidationError> for AppError {
    fn from(err: osc_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<osc_sim::SimError> for AppError {
    fn from(err: osc_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}
