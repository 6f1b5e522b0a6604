use serde::{Deserialize, Serialize};

use crate::cell_id::CellId;

/// A single text cell and its display/filter flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Identifier in `R_C` form, always decoding to this cell's position
    pub id: String,
    /// Column index (0-indexed)
    pub column: usize,
    /// Raw text entered by the user
    pub contents: String,
    /// Derived by the filter engine; overwritten on every recompute
    pub is_visible: bool,
    /// Contents must appear in every cell of this column for its row to stay visible
    pub is_row_filter: bool,
    /// Contents must appear in every cell of this row for its column to stay visible
    pub is_column_filter: bool,
}

impl Cell {
    /// Empty, visible, unfiltered cell at `(row, column)`
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            id: CellId::new(row, column).data_id(),
            column,
            contents: String::new(),
            is_visible: true,
            is_row_filter: false,
            is_column_filter: false,
        }
    }

    pub fn with_contents(row: usize, column: usize, contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            ..Self::new(row, column)
        }
    }

    /// True if the cell takes part in any filter
    pub fn is_filter(&self) -> bool {
        self.is_row_filter || self.is_column_filter
    }

    /// Substring containment, case-sensitive. The empty string is contained by every cell.
    pub fn contains(&self, needle: &str) -> bool {
        self.contents.contains(needle)
    }
}

/// One row of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Row index (0-indexed), equal to the row's position in the grid
    pub index: usize,
    /// Derived by the filter engine
    pub is_visible: bool,
    /// Cells in column order; length equals the grid width
    pub cells: Vec<Cell>,
}

impl Row {
    /// Row of `width` empty cells
    pub fn new(index: usize, width: usize) -> Self {
        Self {
            index,
            is_visible: true,
            cells: (0..width).map(|column| Cell::new(index, column)).collect(),
        }
    }

    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }
}
