//! Shared application service layer for the oscillator tools.
//!
//! This crate provides a unified interface for both CLI and GUI frontends:
//! scenario loading, solver input construction, run execution, result
//! queries and animation frame scheduling.

pub mod error;
pub mod frames;
pub mod hash;
pub mod query;
pub mod run_service;
pub mod scenario_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use frames::{Frame, FrameSchedule};
pub use hash::{compute_run_id, trajectory_digest};
pub use query::{RunSummary, SeriesVariable, extract_series, get_run_summary};
pub use run_service::{RunResponse, SOLVER_VERSION, run_file, run_scenario};
pub use scenario_service::{
    build_parameters, build_solve_options, build_time_grid, load_scenario, save_scenario,
    validate_scenario,
};
