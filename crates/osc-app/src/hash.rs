//! Content-based hashing for run IDs and reproducibility checks.

use osc_project::Scenario;
use osc_sim::Trajectory;
use sha2::{Digest, Sha256};

pub fn compute_run_id(scenario: &Scenario, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let scenario_json = serde_json::to_string(scenario).unwrap_or_default();
    hasher.update(scenario_json.as_bytes());

    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

/// SHA-256 over the exact bit patterns of every time and state value.
pub fn trajectory_digest(trajectory: &Trajectory) -> String {
    let mut hasher = Sha256::new();
    for (t, state) in trajectory.iter() {
        hasher.update(t.to_bits().to_le_bytes());
        hasher.update(state.position.to_bits().to_le_bytes());
        hasher.update(state.velocity.to_bits().to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
