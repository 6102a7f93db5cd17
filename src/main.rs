use std::io;

use anyhow::Result;
use reactor_grid::{Scenario, load_scenario_from_path, run_scenario};
use tracing::info;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let scenario = match std::env::args_os().nth(1) {
        Some(path) => load_scenario_from_path(path)?,
        None => Scenario::sample(),
    };

    let stdout = io::stdout();
    let reactor = run_scenario(&scenario, &mut stdout.lock())?;
    info!(
        ticks = reactor.tick_index(),
        total_heat = reactor.total_heat(),
        total_power = reactor.total_power(),
        "scenario finished"
    );

    Ok(())
}
