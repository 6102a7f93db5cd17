pub mod app;
pub mod core;
pub mod data;
pub mod model;

pub use app::{render_heat_grid, run_scenario};
pub use core::Reactor;
pub use data::{Placement, Scenario, load_scenario_from_path, load_scenario_from_str};
pub use model::{Cell, Component, ComponentKind, GridCoord, GridError, ReactorGrid};
