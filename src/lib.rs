//! ssheet - filterable text grid for embedding in web pages
//!
//! The core of a lightweight spreadsheet-like widget:
//! - Cell addressing by `R_C` / `spacer_R_C` identifiers
//! - Per-row and per-column substring filters, composed with AND
//! - Drag-resizing of columns and rows through spacer cells
//! - Per-cell tool menu and current-cell selection
//!
//! Rendering and event wiring belong to the host page; on `wasm32` the
//! [`widget::SsheetWidget`] bindings expose everything to JavaScript.
//!
//! # Usage (Rust)
//!
//! ```
//! use ssheet::{filter, Grid};
//!
//! let mut grid = Grid::from_contents([["apple"], ["xyz"], ["avocado"]])?;
//! filter::toggle_row_filter("0_0", &mut grid)?;
//! assert_eq!(grid.visible_rows(), vec![0]);
//! # Ok::<(), ssheet::SsheetError>(())
//! ```

pub mod addressing;
pub mod cell_id;
pub mod config;
pub mod error;
pub mod filter;
pub mod layout;
pub mod session;
pub mod tool_menu;
pub mod types;

// Browser bindings
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod widget;

use wasm_bindgen::prelude::*;

pub use addressing::{cell_at, column_cells, row_cells};
pub use cell_id::{column_of, data_id_from_spacer_id, row_of, CellId};
pub use config::GridConfig;
pub use error::{Result, SsheetError};
pub use filter::{toggle_column_filter, toggle_row_filter, FilterAxis};
pub use session::GridSession;
pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
