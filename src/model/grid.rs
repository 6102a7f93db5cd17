use std::fmt;

use super::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub x: usize,
    pub y: usize,
}

impl GridCoord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(GridCoord),
}

/// Fixed-size cell store addressed by `width * y + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactorGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl ReactorGrid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    pub fn index(&self, coord: GridCoord) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some(self.width * coord.y + coord.x)
    }

    pub fn cell(&self, coord: GridCoord) -> Result<&Cell, GridError> {
        let index = self.index(coord).ok_or(GridError::OutOfBounds(coord))?;
        Ok(&self.cells[index])
    }

    pub fn cell_mut(&mut self, coord: GridCoord) -> Result<&mut Cell, GridError> {
        let index = self.index(coord).ok_or(GridError::OutOfBounds(coord))?;
        Ok(&mut self.cells[index])
    }

    /// Cells in storage order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// In-bounds neighbors of `coord`, ordered east, west, south, north.
    /// Edges do not wrap.
    pub fn adjacent_coords(&self, coord: GridCoord) -> Vec<GridCoord> {
        let GridCoord { x, y } = coord;
        [
            Some(GridCoord::new(x + 1, y)),
            x.checked_sub(1).map(|west| GridCoord::new(west, y)),
            Some(GridCoord::new(x, y + 1)),
            y.checked_sub(1).map(|north| GridCoord::new(x, north)),
        ]
        .into_iter()
        .flatten()
        .filter(|neighbor| self.in_bounds(*neighbor))
        .collect()
    }
}
