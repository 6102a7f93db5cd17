mod cell;
mod component;
mod grid;

pub use cell::Cell;
pub use component::{Component, ComponentKind};
pub use grid::{GridCoord, GridError, ReactorGrid};
