use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{Component, Reactor};

const DEFAULT_TICKS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub width: usize,
    pub height: usize,
    #[serde(default = "default_ticks")]
    pub ticks: u32,
    #[serde(default)]
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub component: Component,
}

const fn default_ticks() -> u32 {
    DEFAULT_TICKS
}

impl Scenario {
    /// One generator flanked east and west by vents on a 5x5 core.
    pub fn sample() -> Self {
        Self {
            width: 5,
            height: 5,
            ticks: DEFAULT_TICKS,
            placements: vec![
                Placement {
                    x: 2,
                    y: 2,
                    component: Component::generator(4.0, 4.0),
                },
                Placement {
                    x: 1,
                    y: 2,
                    component: Component::vent(1.0),
                },
                Placement {
                    x: 3,
                    y: 2,
                    component: Component::vent(1.0),
                },
            ],
        }
    }

    /// Applies placements in order; a later placement on the same cell
    /// replaces the earlier one.
    pub fn build_reactor(&self) -> Result<Reactor> {
        let mut reactor = Reactor::new(self.width, self.height)
            .context("failed creating reactor for scenario")?;
        for (position, placement) in self.placements.iter().enumerate() {
            reactor
                .set_component(placement.x, placement.y, placement.component)
                .with_context(|| {
                    format!(
                        "failed applying placement #{position} at ({},{})",
                        placement.x, placement.y
                    )
                })?;
        }
        Ok(reactor)
    }
}
