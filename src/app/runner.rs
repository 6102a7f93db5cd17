use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use super::view::render_heat_grid;
use crate::{Reactor, Scenario};

/// Builds the scenario's reactor and, for each tick, writes the current heat
/// grid and a blank line before advancing.
pub fn run_scenario(scenario: &Scenario, out: &mut impl Write) -> Result<Reactor> {
    let mut reactor = scenario.build_reactor()?;
    info!(
        width = scenario.width,
        height = scenario.height,
        ticks = scenario.ticks,
        placements = scenario.placements.len(),
        "running scenario"
    );

    for _ in 0..scenario.ticks {
        writeln!(out, "{}", render_heat_grid(&reactor)).context("failed writing heat grid")?;
        reactor.tick();
    }
    out.flush().context("failed flushing output")?;

    Ok(reactor)
}
