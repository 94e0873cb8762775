use serde::Serialize;

use crate::error::{SolverError, SolverResult};
use crate::fd_core::grid::RingGrid;

/// All parameters of one advection run. Nothing here changes while the
/// integrator is stepping; a caller varying `c` builds one config per run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SchemeConfig {
    /// Advection speed, signed. Any magnitude is accepted, including ones
    /// with |c·dt/dx| > 1 that make the scheme blow up.
    pub c: f64,
    /// Grid spacing, physical units.
    pub dx: f64,
    /// Time step.
    pub dt: f64,
    /// Steps to advance beyond the initial state.
    pub num_steps: usize,
    /// Points on the periodic grid.
    pub m_points: usize,
}

impl SchemeConfig {
    /// Checked eagerly before any computation. Numerical stability is
    /// deliberately not checked here; an unstable CFL ratio is a valid run.
    pub fn validate(&self) -> SolverResult<()> {
        if self.m_points <= 2 {
            return Err(SolverError::invalid(format!(
                "grid needs more than two points for a centered stencil, got {}",
                self.m_points
            )));
        }
        if self.dx <= 0.0 || !self.dx.is_finite() {
            return Err(SolverError::invalid(format!(
                "grid spacing must be a positive finite number, got {}",
                self.dx
            )));
        }
        if self.dt <= 0.0 || !self.dt.is_finite() {
            return Err(SolverError::invalid(format!(
                "time step must be a positive finite number, got {}",
                self.dt
            )));
        }
        if !self.c.is_finite() {
            return Err(SolverError::invalid(format!(
                "advection speed must be finite, got {}",
                self.c
            )));
        }
        Ok(())
    }

    pub fn grid(&self) -> SolverResult<RingGrid> {
        RingGrid::new(self.m_points, self.dx)
    }

    /// Signed CFL ratio c·dt/dx. |cfl| > 1 means the leapfrog scheme grows
    /// without bound.
    pub fn cfl(&self) -> f64 {
        self.c * self.dt / self.dx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn coursework_config(c: f64) -> SchemeConfig {
        SchemeConfig {
            c,
            dx: 400.0,
            dt: 2.0,
            num_steps: 300,
            m_points: 360,
        }
    }

    #[test]
    fn coursework_cfl_ratios() {
        assert_relative_eq!(coursework_config(20.0).cfl(), 0.10);
        assert_relative_eq!(coursework_config(210.0).cfl(), 1.05);
    }

    #[test]
    fn valid_config_passes() {
        assert!(coursework_config(20.0).validate().is_ok());
    }

    #[test]
    fn unstable_cfl_is_not_an_error() {
        assert!(coursework_config(210.0).validate().is_ok());
    }

    #[test]
    fn rejects_bad_parameters() {
        let mut cfg = coursework_config(20.0);
        cfg.m_points = 2;
        assert!(cfg.validate().is_err());

        let mut cfg = coursework_config(20.0);
        cfg.dx = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = coursework_config(20.0);
        cfg.dt = -2.0;
        assert!(cfg.validate().is_err());

        let mut cfg = coursework_config(20.0);
        cfg.c = f64::NAN;
        assert!(cfg.validate().is_err());
    }
}
