extern crate nalgebra as na;

use std::ops::Index;

/// The full time-history of one advection run: snapshot n is the field at
/// time n·dt. Snapshots are appended in step order and never touched again;
/// downstream CSV export only reads.
pub struct TimeHistory {
    dt: f64,
    snapshots: Vec<na::DVector<f64>>,
}

impl TimeHistory {
    pub fn with_capacity(dt: f64, capacity: usize) -> Self {
        TimeHistory {
            dt,
            snapshots: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, snapshot: na::DVector<f64>) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get_dt(&self) -> f64 {
        self.dt
    }

    /// Time of snapshot n.
    pub fn time(&self, n: usize) -> f64 {
        n as f64 * self.dt
    }

    pub fn snapshots(&self) -> &[na::DVector<f64>] {
        &self.snapshots
    }

    pub fn last(&self) -> &na::DVector<f64> {
        self.snapshots
            .last()
            .unwrap_or_else(|| unreachable!("history always holds the initial snapshot"))
    }

    /// Largest |u| anywhere in the run. Grows past the initial amplitude
    /// when the scheme is run outside its stability region.
    pub fn max_abs(&self) -> f64 {
        self.snapshots
            .iter()
            .flat_map(|u| u.iter())
            .fold(0.0, |max, &v| max.max(v.abs()))
    }

    /// Time series of a single grid point across the whole run.
    pub fn point_series(&self, i: usize) -> Vec<f64> {
        self.snapshots.iter().map(|u| u[i]).collect()
    }
}

impl Index<usize> for TimeHistory {
    type Output = na::DVector<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.snapshots[index]
    }
}
