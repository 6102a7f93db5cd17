mod loader;
mod scenario;

pub use loader::{load_scenario_from_path, load_scenario_from_str};
pub use scenario::{Placement, Scenario};
