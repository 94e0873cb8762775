use crate::fd_core::{condition::initialize_grid, initial, scheme::SchemeConfig};
use crate::output::{write_field_history, write_point_series};
use crate::time_integrator::leapfrog::{integrate, LeapfrogIntegrator};

use indicatif::{ProgressBar, ProgressStyle};
use std::error::Error;
use std::fs;
use tracing::info;

/// Coursework run: 360-point latitude circle, 20·cos(3·i°) initial wave,
/// one stable (c = 20, CFL 0.10) and one unstable (c = 210, CFL 1.05)
/// advection speed, 300 steps of 2 s each.
pub fn advection_suite() -> Result<(), Box<dyn Error>> {
    let base = SchemeConfig {
        c: 0.0,
        dx: 400.0,
        dt: 2.0,
        num_steps: 300,
        m_points: 360,
    };
    let c_values = [20.0, 210.0];
    let selected_points = [("m60", 59), ("m100", 99), ("m120", 119), ("m140", 139)];

    fs::create_dir_all("results")?;

    let grid = base.grid()?;
    let u0 = initialize_grid(&grid, &initial::harmonic(20.0, 3.0));

    let pb = ProgressBar::new(c_values.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} (eta: {eta}) {msg}",
            )
            .unwrap()
            .progress_chars("█░"),
    );

    for c in c_values {
        let cfg = SchemeConfig { c, ..base };
        let history = integrate(&LeapfrogIntegrator, &u0, &cfg)?;
        info!(
            c,
            cfl = cfg.cfl(),
            max_abs = history.max_abs(),
            "advection run complete"
        );

        write_field_history(&history, &grid, &format!("results/heatmap_c_{c}.csv"))?;
        write_point_series(
            &history,
            &selected_points,
            &format!("results/point_series_c_{c}.csv"),
        )?;
        pb.inc(1);
    }
    pb.finish_with_message("Simulation complete");

    Ok(())
}
