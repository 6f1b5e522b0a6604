//! Resolution of cell identifiers against a live [`Grid`].
//!
//! All lookups are bounds-checked: an id that parses but points outside the
//! grid fails with [`SsheetError::OutOfRange`] instead of yielding nothing.

use crate::cell_id::CellId;
use crate::error::{Result, SsheetError};
use crate::types::{Cell, CellPos, Grid};

/// Parse `id` and check it against the grid's dimensions.
///
/// # Errors
/// [`SsheetError::Format`] for a malformed id, [`SsheetError::OutOfRange`]
/// when the row or column does not exist.
pub fn resolve(id: &str, grid: &Grid) -> Result<CellPos> {
    let cell = CellId::parse(id)?;
    let (width, height) = (grid.width(), grid.height());
    if cell.row >= height || cell.column >= width {
        return Err(SsheetError::OutOfRange {
            id: id.to_string(),
            row: cell.row,
            column: cell.column,
            width,
            height,
        });
    }
    Ok(CellPos::new(cell.row, cell.column))
}

/// The cell at `column_of(id)` from every row, in row order.
///
/// # Errors
/// See [`resolve`].
pub fn column_cells<'g>(id: &str, grid: &'g Grid) -> Result<Vec<&'g Cell>> {
    let pos = resolve(id, grid)?;
    Ok(grid
        .rows()
        .iter()
        .filter_map(|row| row.cell(pos.column))
        .collect())
}

/// Every cell of row `row_of(id)`.
///
/// # Errors
/// See [`resolve`].
pub fn row_cells<'g>(id: &str, grid: &'g Grid) -> Result<&'g [Cell]> {
    let pos = resolve(id, grid)?;
    grid.row(pos.row)
        .map(|row| row.cells.as_slice())
        .ok_or_else(|| out_of_range(id, pos, grid))
}

/// The single cell named by `id`.
///
/// # Errors
/// See [`resolve`].
pub fn cell_at<'g>(id: &str, grid: &'g Grid) -> Result<&'g Cell> {
    let pos = resolve(id, grid)?;
    grid.row(pos.row)
        .and_then(|row| row.cell(pos.column))
        .ok_or_else(|| out_of_range(id, pos, grid))
}

/// Mutable access to the cell named by `id`.
///
/// # Errors
/// See [`resolve`].
pub(crate) fn cell_at_mut<'g>(id: &str, grid: &'g mut Grid) -> Result<&'g mut Cell> {
    let pos = resolve(id, grid)?;
    let missing = out_of_range(id, pos, grid);
    grid.rows_mut()
        .get_mut(pos.row)
        .and_then(|row| row.cells.get_mut(pos.column))
        .ok_or(missing)
}

fn out_of_range(id: &str, pos: CellPos, grid: &Grid) -> SsheetError {
    SsheetError::OutOfRange {
        id: id.to_string(),
        row: pos.row,
        column: pos.column,
        width: grid.width(),
        height: grid.height(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_contents([["a0", "b0", "c0"], ["a1", "b1", "c1"]]).unwrap()
    }

    #[test]
    fn test_column_cells_in_row_order() {
        let grid = grid();
        let cells = column_cells("1_1", &grid).unwrap();
        let contents: Vec<&str> = cells.iter().map(|c| c.contents.as_str()).collect();
        assert_eq!(contents, ["b0", "b1"]);
    }

    #[test]
    fn test_row_cells() {
        let grid = grid();
        let cells = row_cells("spacer_1_0", &grid).unwrap();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2].contents, "c1");
    }

    #[test]
    fn test_cell_at_spacer_and_plain_agree() {
        let grid = grid();
        assert_eq!(
            cell_at("0_2", &grid).unwrap(),
            cell_at("spacer_0_2", &grid).unwrap()
        );
    }

    #[test]
    fn test_out_of_range() {
        let grid = grid();
        let err = cell_at("2_0", &grid).unwrap_err();
        assert!(matches!(
            err,
            SsheetError::OutOfRange {
                row: 2,
                column: 0,
                width: 3,
                height: 2,
                ..
            }
        ));
        assert!(column_cells("0_3", &grid).unwrap_err().is_out_of_range());
        assert!(row_cells("9_0", &grid).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_cell_at_mut_edits_in_place() {
        let mut grid = grid();
        cell_at_mut("1_2", &mut grid).unwrap().contents = "edited".into();
        assert_eq!(cell_at("1_2", &grid).unwrap().contents, "edited");
        assert!(cell_at_mut("2_2", &mut grid).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_oversized_index_is_out_of_range() {
        let grid = grid();
        let err = cell_at("99999999999999999999999_0", &grid).unwrap_err();
        assert!(err.is_out_of_range());
        assert!(row_cells("0_99999999999999999999999", &grid)
            .unwrap_err()
            .is_out_of_range());
    }
}
