use tracing::{debug, trace};

use crate::model::{Cell, Component, GridCoord, GridError, ReactorGrid};

/// Heat and power simulation over a fixed 2D grid of cells.
///
/// All coordinate-taking operations are bounds checked and fail with
/// [`GridError::OutOfBounds`]. Callers serialize access; nothing here locks.
#[derive(Debug, Clone, PartialEq)]
pub struct Reactor {
    grid: ReactorGrid,
    tick_index: u64,
}

impl Reactor {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: ReactorGrid::new(width, height)?,
            tick_index: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &ReactorGrid {
        &self.grid
    }

    /// Number of completed ticks.
    pub fn tick_index(&self) -> u64 {
        self.tick_index
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        self.grid.cell(GridCoord::new(x, y))
    }

    pub fn cell_at_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, GridError> {
        self.grid.cell_mut(GridCoord::new(x, y))
    }

    pub fn heat_at(&self, x: usize, y: usize) -> Result<f64, GridError> {
        self.cell_at(x, y).map(|cell| cell.heat)
    }

    pub fn power_at(&self, x: usize, y: usize) -> Result<f64, GridError> {
        self.cell_at(x, y).map(|cell| cell.power)
    }

    pub fn component_at(&self, x: usize, y: usize) -> Result<Option<Component>, GridError> {
        self.cell_at(x, y).map(|cell| cell.component)
    }

    /// Attaches `component` at (x, y), discarding whatever was there.
    pub fn set_component(
        &mut self,
        x: usize,
        y: usize,
        component: Component,
    ) -> Result<(), GridError> {
        let cell = self.cell_at_mut(x, y)?;
        let replaced = cell.component.replace(component);
        debug!(
            x,
            y,
            kind = %component.kind(),
            replaced = replaced.is_some(),
            "component placed"
        );
        Ok(())
    }

    /// Detaches the component at (x, y). Heat and power stay on the cell.
    pub fn remove_component(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let cell = self.cell_at_mut(x, y)?;
        if let Some(removed) = cell.component.take() {
            debug!(x, y, kind = %removed.kind(), "component removed");
        }
        Ok(())
    }

    /// Neighbors of (x, y) ordered east, west, south, north; off-grid
    /// positions are skipped.
    pub fn adjacents(&self, x: usize, y: usize) -> Result<Vec<&Cell>, GridError> {
        let coord = GridCoord::new(x, y);
        if !self.grid.in_bounds(coord) {
            return Err(GridError::OutOfBounds(coord));
        }
        Ok(self
            .grid
            .adjacent_coords(coord)
            .into_iter()
            .filter_map(|neighbor| self.grid.cell(neighbor).ok())
            .collect())
    }

    pub fn total_heat(&self) -> f64 {
        self.grid.cells().iter().map(|cell| cell.heat).sum()
    }

    pub fn total_power(&self) -> f64 {
        self.grid.cells().iter().map(|cell| cell.power).sum()
    }

    /// Advances one step: generation, then diffusion, then every
    /// non-generator component.
    pub fn tick(&mut self) {
        self.run_generators();
        self.diffuse_heat();
        self.update_other_components();

        self.tick_index += 1;
        debug!(
            tick = self.tick_index,
            total_heat = self.total_heat(),
            total_power = self.total_power(),
            "tick complete"
        );
    }

    fn run_generators(&mut self) {
        trace!(tick = self.tick_index + 1, "generation phase");
        for cell in self.grid.cells_mut() {
            if let Some(generator) = cell.component.filter(Component::is_generator) {
                generator.update(cell, &[]);
            }
        }
    }

    // Single in-place pass, x outer and y inner. Heat pushed into a cell that
    // has not been visited yet is diffused again when the scan reaches it.
    fn diffuse_heat(&mut self) {
        trace!(tick = self.tick_index + 1, "diffusion phase");
        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                let coord = GridCoord::new(x, y);
                let Some(index) = self.grid.index(coord) else {
                    continue;
                };
                let heat = self.grid.cells()[index].heat;
                if heat == 0.0 {
                    continue;
                }

                let receivers = self
                    .grid
                    .adjacent_coords(coord)
                    .into_iter()
                    .filter_map(|neighbor| self.grid.index(neighbor))
                    .filter(|&neighbor| {
                        self.grid.cells()[neighbor]
                            .component
                            .is_some_and(|component| component.will_take_heat())
                    })
                    .collect::<Vec<_>>();
                if receivers.is_empty() {
                    continue;
                }

                let share = heat / receivers.len() as f64;
                let cells = self.grid.cells_mut();
                for neighbor in receivers {
                    cells[neighbor].heat += share;
                }
                cells[index].heat = 0.0;
            }
        }
    }

    fn update_other_components(&mut self) {
        trace!(tick = self.tick_index + 1, "component phase");
        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                let coord = GridCoord::new(x, y);
                let Some(index) = self.grid.index(coord) else {
                    continue;
                };
                let Some(component) = self.grid.cells()[index].component else {
                    continue;
                };
                if component.is_generator() {
                    continue;
                }

                let neighbors = self
                    .grid
                    .adjacent_coords(coord)
                    .into_iter()
                    .filter_map(|neighbor| self.grid.cell(neighbor).ok().copied())
                    .collect::<Vec<_>>();
                component.update(&mut self.grid.cells_mut()[index], &neighbors);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Reactor;
    use crate::model::{Component, GridCoord, GridError};

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn new_reactor_is_zeroed() {
        let reactor = Reactor::new(3, 2).expect("reactor");
        assert_eq!(reactor.width(), 3);
        assert_eq!(reactor.height(), 2);
        assert_eq!(reactor.tick_index(), 0);
        for x in 0..3 {
            for y in 0..2 {
                assert_close(reactor.heat_at(x, y).expect("heat"), 0.0);
                assert_close(reactor.power_at(x, y).expect("power"), 0.0);
                assert!(reactor.component_at(x, y).expect("component").is_none());
            }
        }
    }

    #[test]
    fn zero_sized_reactor_is_rejected() {
        assert_eq!(
            Reactor::new(0, 0),
            Err(GridError::InvalidDimension {
                width: 0,
                height: 0
            })
        );
        assert!(Reactor::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn out_of_range_coordinates_fail_everywhere() {
        let mut reactor = Reactor::new(2, 2).expect("reactor");
        let outside = GridError::OutOfBounds(GridCoord::new(2, 0));
        assert_eq!(reactor.heat_at(2, 0), Err(outside));
        assert_eq!(reactor.power_at(2, 0), Err(outside));
        assert_eq!(reactor.component_at(2, 0), Err(outside));
        assert_eq!(
            reactor.set_component(2, 0, Component::vent(1.0)),
            Err(outside)
        );
        assert_eq!(reactor.remove_component(2, 0), Err(outside));
        assert_eq!(reactor.adjacents(2, 0).map(|cells| cells.len()), Err(outside));
    }

    #[test]
    fn set_component_replaces_existing() {
        let mut reactor = Reactor::new(2, 2).expect("reactor");
        reactor
            .set_component(1, 1, Component::generator(1.0, 1.0))
            .expect("place generator");
        reactor
            .set_component(1, 1, Component::vent(2.0))
            .expect("replace with vent");
        assert_eq!(
            reactor.component_at(1, 1).expect("component"),
            Some(Component::vent(2.0))
        );
    }

    #[test]
    fn remove_component_is_noop_on_empty_cell() {
        let mut reactor = Reactor::new(2, 2).expect("reactor");
        reactor.remove_component(0, 0).expect("remove empty");
        assert!(reactor.component_at(0, 0).expect("component").is_none());
    }

    #[test]
    fn adjacents_follow_east_west_south_north() {
        let mut reactor = Reactor::new(3, 3).expect("reactor");
        reactor.cell_at_mut(2, 1).expect("east").heat = 1.0;
        reactor.cell_at_mut(0, 1).expect("west").heat = 2.0;
        reactor.cell_at_mut(1, 2).expect("south").heat = 3.0;
        reactor.cell_at_mut(1, 0).expect("north").heat = 4.0;

        let heats = reactor
            .adjacents(1, 1)
            .expect("adjacents")
            .iter()
            .map(|cell| cell.heat)
            .collect::<Vec<_>>();
        assert_eq!(heats, vec![1.0, 2.0, 3.0, 4.0]);

        assert_eq!(reactor.adjacents(0, 0).expect("corner").len(), 2);
    }

    #[test]
    fn heat_without_accepting_neighbor_pools_in_place() {
        let mut reactor = Reactor::new(3, 3).expect("reactor");
        reactor.cell_at_mut(1, 1).expect("cell").heat = 6.0;
        reactor
            .set_component(0, 1, Component::generator(0.0, 0.0))
            .expect("place generator");

        reactor.tick();

        assert_close(reactor.heat_at(1, 1).expect("heat"), 6.0);
        assert_eq!(reactor.tick_index(), 1);
    }

    #[test]
    fn diffusion_splits_evenly_and_empties_source() {
        let mut reactor = Reactor::new(3, 3).expect("reactor");
        reactor.cell_at_mut(1, 1).expect("cell").heat = 9.0;
        for (x, y) in [(2, 1), (0, 1), (1, 2)] {
            reactor
                .set_component(x, y, Component::vent(0.0))
                .expect("place vent");
        }

        reactor.tick();

        assert_close(reactor.heat_at(1, 1).expect("source"), 0.0);
        // (0, 1) is scanned before (1, 1), so it keeps its share; (1, 2) and
        // (2, 1) are scanned later but have no heat-accepting neighbors.
        assert_close(reactor.heat_at(0, 1).expect("west"), 3.0);
        assert_close(reactor.heat_at(1, 2).expect("south"), 3.0);
        assert_close(reactor.heat_at(2, 1).expect("east"), 3.0);
        assert_close(reactor.total_heat(), 9.0);
    }

    #[test]
    fn generator_power_accumulates_per_tick() {
        let mut reactor = Reactor::new(1, 1).expect("reactor");
        reactor
            .set_component(0, 0, Component::generator(1.0, 2.5))
            .expect("place generator");

        for _ in 0..4 {
            reactor.tick();
        }

        assert_close(reactor.power_at(0, 0).expect("power"), 10.0);
        assert_close(reactor.heat_at(0, 0).expect("heat"), 4.0);
        assert_close(reactor.total_power(), 10.0);
    }
}
