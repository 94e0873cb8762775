pub mod error;
pub mod fd_core;
pub mod output;
pub mod scenarios;
pub mod time_integrator;

use scenarios::advection_suite;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    advection_suite()?;
    Ok(())
}
