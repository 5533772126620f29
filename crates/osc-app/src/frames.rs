//! Mapping a trajectory onto animation frames.
//!
//! One frame per trajectory sample. The renderer asks which frame belongs to
//! a given wall-clock instant and reads the state from the trajectory; it
//! never mutates anything here.

use osc_sim::{State, Trajectory};

use crate::error::{AppError, AppResult};

/// A single animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub t: f64,
    pub state: State,
}

#[derive(Debug, Clone)]
pub struct FrameSchedule {
    times: Vec<f64>,
    playback_speed: f64,
}

impl FrameSchedule {
    /// `playback_speed` is simulated seconds per wall-clock second.
    pub fn new(trajectory: &Trajectory, playback_speed: f64) -> AppResult<Self> {
        if !playback_speed.is_finite() || playback_speed <= 0.0 {
            return Err(AppError::InvalidInput(format!(
                "playback speed must be positive, got {}",
                playback_speed
            )));
        }
        if trajectory.len() < 2 {
            return Err(AppError::InvalidInput(
                "need at least 2 samples to animate".to_string(),
            ));
        }
        Ok(Self {
            times: trajectory.times().to_vec(),
            playback_speed,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.times.len()
    }

    pub fn playback_speed(&self) -> f64 {
        self.playback_speed
    }

    /// Mean wall-clock spacing between frames in milliseconds.
    pub fn interval_ms(&self) -> f64 {
        let span = self.times[self.times.len() - 1] - self.times[0];
        1000.0 * span / (self.times.len() - 1) as f64 / self.playback_speed
    }

    /// Wall-clock length of the whole animation in seconds.
    pub fn duration_s(&self) -> f64 {
        (self.times[self.times.len() - 1] - self.times[0]) / self.playback_speed
    }

    /// Latest frame whose sample time has been reached after `elapsed_s`
    /// seconds of playback. Clamped to the last frame.
    pub fn frame_at_elapsed(&self, elapsed_s: f64) -> usize {
        let t = self.times[0] + elapsed_s.max(0.0) * self.playback_speed;
        let reached = self.times.partition_point(|&sample| sample <= t);
        reached.saturating_sub(1).min(self.times.len() - 1)
    }

    pub fn frame(&self, trajectory: &Trajectory, index: usize) -> Option<Frame> {
        let (t, state) = trajectory.get(index)?;
        Some(Frame { index, t, state })
    }

    pub fn iter<'a>(&self, trajectory: &'a Trajectory) -> impl Iterator<Item = Frame> + 'a {
        trajectory
            .iter()
            .enumerate()
            .map(|(index, (t, state))| Frame {
                index,
                t,
                state: *state,
            })
    }
}
