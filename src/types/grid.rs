use serde::{Deserialize, Serialize, Serializer};

use super::{Cell, Row};
use crate::cell_id::CellId;
use crate::error::{Result, SsheetError};
use crate::filter;

/// A rectangular grid of text cells.
///
/// Rows are stored in index order and every row has the same number of cells.
/// Serializes as a plain JSON array of rows:
///
/// ```json
/// [
///   {"index": 0, "isVisible": true, "cells": [
///     {"id": "0_0", "column": 0, "contents": "", "isVisible": true,
///      "isRowFilter": false, "isColumnFilter": false}
///   ]}
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Row>")]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Create a `width` x `height` grid of empty, visible, unfiltered cells.
    ///
    /// # Errors
    /// Returns [`SsheetError::Config`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SsheetError::Config(format!(
                "grid must be at least 1x1, got {width}x{height}"
            )));
        }
        Ok(Self {
            rows: (0..height).map(|index| Row::new(index, width)).collect(),
        })
    }

    /// Build a grid from a rectangular matrix of cell contents.
    ///
    /// # Errors
    /// Returns [`SsheetError::Config`] for an empty matrix and
    /// [`SsheetError::Shape`] if the rows differ in length.
    pub fn from_contents<R, S>(contents: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows = Vec::new();
        for (index, row) in contents.into_iter().enumerate() {
            let cells: Vec<Cell> = row
                .into_iter()
                .enumerate()
                .map(|(column, text)| Cell::with_contents(index, column, text))
                .collect();
            rows.push(Row {
                index,
                is_visible: true,
                cells,
            });
        }
        Self::try_from(rows)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Rows are handed out mutably only inside the crate so that ids,
    /// indices and widths cannot drift.
    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    /// Indices of rows currently visible
    pub fn visible_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|row| row.is_visible)
            .map(|row| row.index)
            .collect()
    }

    /// Indices of columns currently visible.
    ///
    /// Column visibility is applied to every cell of a column, so the first
    /// row is representative.
    pub fn visible_columns(&self) -> Vec<usize> {
        self.rows
            .first()
            .map(|row| {
                row.cells
                    .iter()
                    .filter(|cell| cell.is_visible)
                    .map(|cell| cell.column)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Copy of every cell's contents, row by row
    pub fn contents(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.cells.iter().map(|cell| cell.contents.clone()).collect())
            .collect()
    }
}

impl TryFrom<Vec<Row>> for Grid {
    type Error = SsheetError;

    /// Validate the structural invariants (non-empty, equal widths, positional
    /// indices, self-decoding ids) and recompute the derived visibility.
    fn try_from(rows: Vec<Row>) -> Result<Self> {
        let expected = rows.first().map_or(0, |row| row.cells.len());
        if expected == 0 {
            return Err(SsheetError::Config(
                "grid must have at least one row and one column".into(),
            ));
        }

        for (position, row) in rows.iter().enumerate() {
            if row.index != position {
                return Err(SsheetError::Config(format!(
                    "row at position {position} has index {}",
                    row.index
                )));
            }
            if row.cells.len() != expected {
                return Err(SsheetError::Shape {
                    row: position,
                    expected,
                    found: row.cells.len(),
                });
            }
            for (column, cell) in row.cells.iter().enumerate() {
                let id = CellId::parse(&cell.id)?;
                let misplaced = id.spacer || id.row != position || id.column != column;
                if misplaced || cell.column != column {
                    return Err(SsheetError::Config(format!(
                        "cell {:?} is stored at ({position}, {column})",
                        cell.id
                    )));
                }
            }
        }

        let mut grid = Self { rows };
        filter::recompute_visibility(&mut grid);
        Ok(grid)
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_ids_and_defaults() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        let cell = &grid.rows()[1].cells[2];
        assert_eq!(cell.id, "1_2");
        assert_eq!(cell.column, 2);
        assert!(cell.is_visible);
        assert!(!cell.is_filter());
        assert_eq!(grid.visible_rows(), vec![0, 1]);
        assert_eq!(grid.visible_columns(), vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(Grid::new(0, 4), Err(SsheetError::Config(_))));
        assert!(matches!(Grid::new(4, 0), Err(SsheetError::Config(_))));
    }

    #[test]
    fn test_ragged_contents_rejected() {
        let err = Grid::from_contents(vec![vec!["a", "b"], vec!["c"]]).unwrap_err();
        assert!(matches!(
            err,
            SsheetError::Shape {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_contents_survive_filtering() {
        let mut grid = Grid::from_contents([["a", "b"], ["c", "d"]]).unwrap();
        filter::toggle_row_filter("0_0", &mut grid).unwrap();
        assert_eq!(grid.visible_rows(), vec![0]);
        assert_eq!(grid.contents(), [["a", "b"], ["c", "d"]]);
    }

    #[test]
    fn test_json_shape() {
        let grid = Grid::from_contents([["x"]]).unwrap();
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json[0]["index"], 0);
        assert_eq!(json[0]["isVisible"], true);
        assert_eq!(json[0]["cells"][0]["id"], "0_0");
        assert_eq!(json[0]["cells"][0]["contents"], "x");
        assert_eq!(json[0]["cells"][0]["isRowFilter"], false);
        assert_eq!(json[0]["cells"][0]["isColumnFilter"], false);
    }

    #[test]
    fn test_deserialize_validates_ids() {
        let grid = Grid::from_contents([["a", "b"], ["c", "d"]]).unwrap();
        let mut json = serde_json::to_value(&grid).unwrap();
        let back: Grid = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, grid);

        json[1]["cells"][0]["id"] = "0_0".into();
        assert!(serde_json::from_value::<Grid>(json).is_err());
    }
}
