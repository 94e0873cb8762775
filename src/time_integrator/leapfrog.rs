extern crate nalgebra as na;

use tracing::debug;

use crate::error::{SolverError, SolverResult};
use crate::fd_core::{history::TimeHistory, scheme::SchemeConfig};

/// Central-time, central-space scheme for ∂u/∂t + c·∂u/∂x = 0 on a periodic
/// grid. The two-level recurrence needs a single forward-time step to get
/// going; after that every step references the two previous snapshots.
pub struct LeapfrogIntegrator;

impl LeapfrogIntegrator {
    /// Bootstrap step: forward-time, central-space, at half the central
    /// coefficient (dt/(2dx)). Standard leapfrog startup.
    pub fn startup(&self, u0: &na::DVector<f64>, cfg: &SchemeConfig) -> na::DVector<f64> {
        let m = u0.len();
        let coeff = cfg.c * cfg.dt / (2.0 * cfg.dx);
        let mut u_new = u0.clone();
        for i in 0..m {
            u_new[i] = u0[i] - coeff * (u0[(i + 1) % m] - u0[(i + m - 1) % m]);
        }
        u_new
    }

    /// Leapfrog step: u_next = u_prev - (c·dt/dx)·(centered difference of
    /// u_curr), neighbor indices wrapping modulo m.
    pub fn step(
        &self,
        u_prev: &na::DVector<f64>,
        u_curr: &na::DVector<f64>,
        cfg: &SchemeConfig,
    ) -> na::DVector<f64> {
        let m = u_curr.len();
        let coeff = cfg.c * cfg.dt / cfg.dx;
        let mut u_new = u_prev.clone();
        for i in 0..m {
            u_new[i] = u_prev[i] - coeff * (u_curr[(i + 1) % m] - u_curr[(i + m - 1) % m]);
        }
        u_new
    }
}

/// Runs one full advection history: snapshot 0 is `initial_field` verbatim,
/// snapshot 1 the bootstrap step, snapshots 2..=num_steps the leapfrog
/// recurrence. Deterministic and side-effect free; parameters are checked
/// before any work happens. An unstable CFL ratio is not rejected — the
/// growing oscillation it produces is the correct output.
pub fn integrate(
    integrator: &LeapfrogIntegrator,
    initial_field: &na::DVector<f64>,
    cfg: &SchemeConfig,
) -> SolverResult<TimeHistory> {
    cfg.validate()?;
    if initial_field.len() != cfg.m_points {
        return Err(SolverError::invalid(format!(
            "initial field has {} entries but the grid has {} points",
            initial_field.len(),
            cfg.m_points
        )));
    }

    debug!(
        m_points = cfg.m_points,
        num_steps = cfg.num_steps,
        cfl = cfg.cfl(),
        "starting leapfrog run"
    );

    let mut history = TimeHistory::with_capacity(cfg.dt, cfg.num_steps + 1);
    history.push(initial_field.clone());
    if cfg.num_steps == 0 {
        return Ok(history);
    }

    history.push(integrator.startup(initial_field, cfg));
    for n in 1..cfg.num_steps {
        let u_next = integrator.step(&history[n - 1], &history[n], cfg);
        history.push(u_next);
    }

    Ok(history)
}
