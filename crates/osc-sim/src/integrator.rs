//! Fixed-step integrators for first-order systems.
//!
//! The oscillator reaches these as `S' = f(t, S)` with `S = [x, v]`; the
//! solver calls [`Integrator::advance`] once per grid interval.

use crate::error::SimResult;
use crate::model::TransientModel;

pub trait Integrator {
    /// One step of size `h` from `(t, s)`.
    fn step<M: TransientModel>(
        &self,
        model: &M,
        t: f64,
        s: &M::State,
        h: f64,
    ) -> SimResult<M::State>;

    /// Carry `s` from `t0` to `t1` in `n` equal steps, landing on `t1`.
    fn advance<M: TransientModel>(
        &self,
        model: &M,
        t0: f64,
        t1: f64,
        s: &M::State,
        n: usize,
    ) -> SimResult<M::State> {
        let n = n.max(1);
        let h = (t1 - t0) / n as f64;
        let mut s = s.clone();
        for i in 0..n {
            s = self.step(model, t0 + i as f64 * h, &s, h)?;
        }
        Ok(s)
    }
}

/// Classical fourth-order Runge-Kutta.
///
/// Local error is O(h^5); energy drift on an undamped spring stays well
/// under 1e-6 relative at the default 10 ms step.
#[derive(Clone, Copy, Debug, Default)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<M: TransientModel>(
        &self,
        model: &M,
        t: f64,
        s: &M::State,
        h: f64,
    ) -> SimResult<M::State> {
        let half = 0.5 * h;
        let t_mid = t + half;

        let k1 = model.rhs(t, s)?;
        let k2 = model.rhs(t_mid, &model.add(s, &model.scale(&k1, half)))?;
        let k3 = model.rhs(t_mid, &model.add(s, &model.scale(&k2, half)))?;
        let k4 = model.rhs(t + h, &model.add(s, &model.scale(&k3, h)))?;

        // s + h/6 · (k1 + 2·k2 + 2·k3 + k4)
        let inner = model.scale(&model.add(&k2, &k3), 2.0);
        let slope = model.add(&model.add(&k1, &inner), &k4);
        Ok(model.add(s, &model.scale(&slope, h / 6.0)))
    }
}
