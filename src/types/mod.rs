//! Data types for the grid model.

mod cell;
mod grid;
mod selection;

pub use cell::*;
pub use grid::*;
pub use selection::*;
