//! Cell sizing and drag-resizing.
//!
//! This module handles:
//! - Column widths and row heights, seeded from [`crate::config::GridConfig`]
//! - The spacer drag that resizes the column and row of the cell it belongs to
//! - Clamping to the configured minimum width and height

mod grid_layout;
mod resize;

pub use grid_layout::GridLayout;
pub use resize::{ResizeDrag, ResizeUpdate};
