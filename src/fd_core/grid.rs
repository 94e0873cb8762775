use std::ops::Index;

use crate::error::{SolverError, SolverResult};

/// Periodic 1-D grid: `m_points` positions on a closed loop (a latitude
/// circle in the coursework setup), spaced `dx` apart in physical units.
/// Point index m_points-1 is adjacent to point index 0.
pub struct RingGrid {
    dx: f64,
    m_points: usize,
    grid_points: Vec<f64>,
}

impl RingGrid {
    /// Coordinates are 1-based degrees, 1..=m_points, so initial-condition
    /// formulas written over the grid index (e.g. 20·cos(3·i°)) sample the
    /// same values as the source data.
    pub fn new(m_points: usize, dx: f64) -> SolverResult<Self> {
        if m_points <= 2 {
            return Err(SolverError::invalid(format!(
                "grid needs more than two points for a centered stencil, got {m_points}"
            )));
        }
        if dx <= 0.0 || !dx.is_finite() {
            return Err(SolverError::invalid(format!(
                "grid spacing must be a positive finite number, got {dx}"
            )));
        }
        let grid_points: Vec<f64> = (1..=m_points).map(|i| i as f64).collect();
        Ok(RingGrid {
            dx,
            m_points,
            grid_points,
        })
    }

    pub fn get_dx(&self) -> f64 {
        self.dx
    }

    pub fn get_length(&self) -> usize {
        self.m_points
    }

    pub fn grid_points(&self) -> &[f64] {
        &self.grid_points
    }

    /// Neighbor to the left of `i`, wrapping past index 0.
    pub fn left_of(&self, i: usize) -> usize {
        (i + self.m_points - 1) % self.m_points
    }

    /// Neighbor to the right of `i`, wrapping past the last index.
    pub fn right_of(&self, i: usize) -> usize {
        (i + 1) % self.m_points
    }
}

impl Index<usize> for RingGrid {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.grid_points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_wrap_at_both_seams() {
        let grid = RingGrid::new(360, 400.0).unwrap();
        assert_eq!(grid.left_of(0), 359);
        assert_eq!(grid.right_of(0), 1);
        assert_eq!(grid.left_of(359), 358);
        assert_eq!(grid.right_of(359), 0);
    }

    #[test]
    fn coordinates_are_one_based() {
        let grid = RingGrid::new(5, 1.0).unwrap();
        assert_eq!(grid.grid_points(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(grid[0], 1.0);
        assert_eq!(grid[4], 5.0);
    }

    #[test]
    fn rejects_degenerate_grids() {
        assert!(RingGrid::new(2, 1.0).is_err());
        assert!(RingGrid::new(360, 0.0).is_err());
        assert!(RingGrid::new(360, -400.0).is_err());
    }
}
