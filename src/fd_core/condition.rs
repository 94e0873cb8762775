extern crate nalgebra as na;

use crate::fd_core::grid::RingGrid;

//traits
pub trait InitialCondition {
    fn compute(&self, grid: &RingGrid) -> na::DVector<f64>;
}

//structs for initial
pub struct PointInit<F>
where
    F: Fn(f64) -> f64,
{
    pub f: F,
}

//implementation for initial
impl<F> InitialCondition for PointInit<F>
where
    F: Fn(f64) -> f64,
{
    fn compute(&self, grid: &RingGrid) -> na::DVector<f64> {
        let u: Vec<f64> = grid.grid_points().iter().map(|&x| (self.f)(x)).collect();
        na::DVector::from_vec(u)
    }
}

pub fn initialize_grid<I>(grid: &RingGrid, init: &I) -> na::DVector<f64>
where
    I: InitialCondition,
{
    init.compute(grid)
}
