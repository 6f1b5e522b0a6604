//! Drag-resizing through spacer cells.
//!
//! A spacer is the thin handle drawn to the right of a data cell. Pressing on
//! `spacer_R_C` starts a drag that resizes column C (every row) and row R
//! (every column) together; moving the pointer by (dx, dy) sets the width to
//! `initial + dx` and the height to `initial + dy`, clamped to the minimums.

use log::{debug, trace};
use serde::Serialize;

use super::GridLayout;
use crate::addressing::{column_cells, resolve, row_cells};
use crate::cell_id::data_id_from_spacer_id;
use crate::config::GridConfig;
use crate::error::{Result, SsheetError};
use crate::types::{CellPos, Grid};

/// An in-progress spacer drag
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeDrag {
    /// Data cell the spacer belongs to
    pub target: CellPos,
    origin_x: f32,
    origin_y: f32,
    initial_width: f32,
    initial_height: f32,
    column_cell_ids: Vec<String>,
    row_cell_ids: Vec<String>,
}

/// Sizes produced by one pointer move, with the cells they apply to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeUpdate {
    pub column: usize,
    pub width: f32,
    pub row: usize,
    pub height: f32,
    /// Ids of every cell in the resized column, top to bottom
    pub column_cell_ids: Vec<String>,
    /// Ids of every cell in the resized row, left to right
    pub row_cell_ids: Vec<String>,
}

impl ResizeDrag {
    /// Start a drag on `spacer_id` with the pointer at `(x, y)`.
    ///
    /// # Errors
    /// [`SsheetError::Format`] if `spacer_id` is not a spacer id,
    /// [`SsheetError::OutOfRange`] if its cell is not in the grid or layout.
    pub fn begin(
        spacer_id: &str,
        grid: &Grid,
        layout: &GridLayout,
        x: f32,
        y: f32,
    ) -> Result<Self> {
        let data_id = data_id_from_spacer_id(spacer_id)?;
        let target = resolve(&data_id, grid)?;

        let sizes = layout
            .column_width(target.column)
            .zip(layout.row_height(target.row));
        let Some((initial_width, initial_height)) = sizes else {
            return Err(SsheetError::OutOfRange {
                id: spacer_id.to_string(),
                row: target.row,
                column: target.column,
                width: layout.column_widths.len(),
                height: layout.row_heights.len(),
            });
        };

        let column_cell_ids = column_cells(&data_id, grid)?
            .into_iter()
            .map(|cell| cell.id.clone())
            .collect();
        let row_cell_ids = row_cells(&data_id, grid)?
            .iter()
            .map(|cell| cell.id.clone())
            .collect();

        debug!(
            "resize drag started on {spacer_id}: column {} at {initial_width}px, row {} at {initial_height}px",
            target.column, target.row
        );

        Ok(Self {
            target,
            origin_x: x,
            origin_y: y,
            initial_width,
            initial_height,
            column_cell_ids,
            row_cell_ids,
        })
    }

    /// Apply the pointer position `(x, y)` to the layout.
    pub fn update(
        &self,
        x: f32,
        y: f32,
        layout: &mut GridLayout,
        config: &GridConfig,
    ) -> ResizeUpdate {
        let width = self.initial_width + (x - self.origin_x);
        let height = self.initial_height + (y - self.origin_y);

        let width = layout
            .set_column_width(self.target.column, width, config.min_width)
            .unwrap_or_else(|| width.max(config.min_width));
        let height = layout
            .set_row_height(self.target.row, height, config.min_height)
            .unwrap_or_else(|| height.max(config.min_height));
        trace!("resize {}: width={width} height={height}", self.target.id());

        ResizeUpdate {
            column: self.target.column,
            width,
            row: self.target.row,
            height,
            column_cell_ids: self.column_cell_ids.clone(),
            row_cell_ids: self.row_cell_ids.clone(),
        }
    }
}
