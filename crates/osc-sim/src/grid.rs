//! Validated sample grids.

use osc_core::ensure_strictly_increasing;

use crate::error::{SimError, SimResult};

/// Ordered, strictly increasing sample times with at least two entries.
///
/// The initial condition of a solve is attached to [`TimeGrid::start`].
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    samples: Vec<f64>,
}

impl TimeGrid {
    /// Validate an explicit list of sample times.
    pub fn from_samples(samples: Vec<f64>) -> SimResult<Self> {
        if samples.len() < 2 {
            return Err(SimError::grid(format!(
                "need at least 2 samples, got {}",
                samples.len()
            )));
        }
        ensure_strictly_increasing(&samples, "sample time")
            .map_err(|e| SimError::grid(e.to_string()))?;
        Ok(Self { samples })
    }

    /// `n` evenly spaced samples over `[t_start, t_end]`, both ends included.
    pub fn linspace(t_start: f64, t_end: f64, n: usize) -> SimResult<Self> {
        if n < 2 {
            return Err(SimError::grid(format!("need at least 2 samples, got {n}")));
        }
        let span = t_end - t_start;
        let last = (n - 1) as f64;
        let samples = (0..n)
            .map(|i| {
                if i == n - 1 {
                    t_end
                } else {
                    t_start + span * (i as f64) / last
                }
            })
            .collect();
        Self::from_samples(samples)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; a valid grid has at least two samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.samples[0]
    }

    pub fn end(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    pub fn span(&self) -> f64 {
        self.end() - self.start()
    }

    pub fn mean_spacing(&self) -> f64 {
        self.span() / (self.len() - 1) as f64
    }

    /// Consecutive `(t_i, t_{i+1})` pairs.
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.windows(2).map(|w| (w[0], w[1]))
    }
}
