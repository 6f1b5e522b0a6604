use serde::{Deserialize, Serialize};

use crate::cell_id::CellId;

/// A bounds-checked (row, column) position inside a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellPos {
    pub row: usize,
    pub column: usize,
}

impl CellPos {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The `R_C` identifier of the data cell at this position
    pub fn id(&self) -> String {
        CellId::new(self.row, self.column).data_id()
    }
}

/// Current cell selection of a grid session.
///
/// Changing the selection returns the new value to the caller, who passes it
/// on to whatever else needs it (the tool menu, the renderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub current: Option<CellPos>,
}

impl Selection {
    /// Replace the current cell and return it
    pub fn select(&mut self, pos: CellPos) -> CellPos {
        self.current = Some(pos);
        pos
    }

    /// Clear the selection, returning what was selected
    pub fn clear(&mut self) -> Option<CellPos> {
        self.current.take()
    }

    pub fn is_selected(&self, pos: CellPos) -> bool {
        self.current == Some(pos)
    }
}
