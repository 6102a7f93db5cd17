mod runner;
mod view;

pub use runner::run_scenario;
pub use view::render_heat_grid;
