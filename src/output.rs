use crate::fd_core::{grid::RingGrid, history::TimeHistory};

use csv::Writer;
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct FieldRow {
    step: usize,
    time: f64,
    x: f64,
    u: f64,
}

/// Long-format dump of the whole history, one row per (step, grid point).
/// This is the input for the downstream heatmap and animation consumers.
pub fn write_field_history(
    history: &TimeHistory,
    grid: &RingGrid,
    csv_path: &str,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(csv_path)?;

    for (step, u) in history.snapshots().iter().enumerate() {
        let time = history.time(step);
        for i in 0..grid.get_length() {
            let row = FieldRow {
                step,
                time,
                x: grid[i],
                u: u[i],
            };
            wtr.serialize(row)?;
        }
    }
    wtr.flush()?;

    Ok(())
}

/// Time series of a few watched grid points, one column per point. The
/// selection is data, so the header is built dynamically instead of going
/// through a serde row struct.
pub fn write_point_series(
    history: &TimeHistory,
    selected: &[(&str, usize)],
    csv_path: &str,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(csv_path)?;

    let mut header = vec!["time".to_string()];
    header.extend(selected.iter().map(|(label, _)| (*label).to_string()));
    wtr.write_record(&header)?;

    for (step, u) in history.snapshots().iter().enumerate() {
        let mut record = vec![history.time(step).to_string()];
        record.extend(selected.iter().map(|&(_, i)| u[i].to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;

    Ok(())
}
