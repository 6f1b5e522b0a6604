//! Row and column filtering.
//!
//! A row-filter cell's contents must appear (as a case-sensitive substring) in
//! every row's cell of the same column for that row to stay visible. A
//! column-filter cell's contents must appear in every column's cell of the same
//! row for that column to stay visible; column visibility is written to every
//! cell of the column.
//!
//! Filters compose with AND. Visibility is never patched incrementally: each
//! toggle or edit flips its flag and then recomputes every row and column from
//! the flags alone, so turning a filter off can never leave stale hidden rows.
//! Filter cells are evaluated like any other cell, including against filters in
//! their own column.

use log::{debug, trace};

use crate::addressing::{cell_at, cell_at_mut};
use crate::error::Result;
use crate::types::{Cell, Grid};

/// Which kind of filter a cell toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAxis {
    /// The cell filters the rows of the grid by its column
    Row,
    /// The cell filters the columns of the grid by its row
    Column,
}

impl FilterAxis {
    fn flag_mut(self, cell: &mut Cell) -> &mut bool {
        match self {
            Self::Row => &mut cell.is_row_filter,
            Self::Column => &mut cell.is_column_filter,
        }
    }
}

/// Flip the row-filter flag of the cell named by `id` and recompute visibility.
///
/// # Errors
/// Malformed or out-of-range ids fail before anything is changed.
pub fn toggle_row_filter<'g>(id: &str, grid: &'g mut Grid) -> Result<&'g mut Grid> {
    toggle_filter(FilterAxis::Row, id, grid)
}

/// Flip the column-filter flag of the cell named by `id` and recompute visibility.
///
/// # Errors
/// Malformed or out-of-range ids fail before anything is changed.
pub fn toggle_column_filter<'g>(id: &str, grid: &'g mut Grid) -> Result<&'g mut Grid> {
    toggle_filter(FilterAxis::Column, id, grid)
}

/// Flip the `axis` filter flag of the cell named by `id` and recompute visibility.
///
/// # Errors
/// Malformed or out-of-range ids fail before anything is changed.
pub fn toggle_filter<'g>(
    axis: FilterAxis,
    id: &str,
    grid: &'g mut Grid,
) -> Result<&'g mut Grid> {
    let cell = cell_at_mut(id, grid)?;
    let flag = axis.flag_mut(cell);
    *flag = !*flag;
    debug!("{axis:?} filter on {id} is now {}", *flag);

    recompute_visibility(grid);
    Ok(grid)
}

/// Replace the contents of the cell named by `id` and recompute visibility.
///
/// Editing the text of an active filter cell updates the filter in place;
/// clearing it to `""` makes the filter match everything.
///
/// # Errors
/// Malformed or out-of-range ids fail before anything is changed.
pub fn set_contents<'g>(
    id: &str,
    contents: impl Into<String>,
    grid: &'g mut Grid,
) -> Result<&'g mut Grid> {
    let cell = cell_at_mut(id, grid)?;
    cell.contents = contents.into();
    if cell.is_filter() {
        trace!("filter cell {id} edited");
    }

    recompute_visibility(grid);
    Ok(grid)
}

/// Turn off every filter in the grid. Everything becomes visible.
pub fn clear_filters(grid: &mut Grid) {
    for cell in grid.rows_mut().iter_mut().flat_map(|row| row.cells.iter_mut()) {
        cell.is_row_filter = false;
        cell.is_column_filter = false;
    }
    recompute_visibility(grid);
}

/// Contents of the active row-filter cells in `column`, top to bottom.
pub fn active_row_filters(grid: &Grid, column: usize) -> Vec<&str> {
    grid.rows()
        .iter()
        .filter_map(|row| row.cell(column))
        .filter(|cell| cell.is_row_filter)
        .map(|cell| cell.contents.as_str())
        .collect()
}

/// Contents of the active column-filter cells in `row`, left to right.
pub fn active_column_filters(grid: &Grid, row: usize) -> Vec<&str> {
    grid.row(row)
        .map(|row| {
            row.cells
                .iter()
                .filter(|cell| cell.is_column_filter)
                .map(|cell| cell.contents.as_str())
                .collect()
        })
        .unwrap_or_default()
}

/// True if the row-filter flag of the cell named by `id` is set.
///
/// # Errors
/// See [`crate::addressing::resolve`].
pub fn is_row_filter(id: &str, grid: &Grid) -> Result<bool> {
    cell_at(id, grid).map(|cell| cell.is_row_filter)
}

/// True if the column-filter flag of the cell named by `id` is set.
///
/// # Errors
/// See [`crate::addressing::resolve`].
pub fn is_column_filter(id: &str, grid: &Grid) -> Result<bool> {
    cell_at(id, grid).map(|cell| cell.is_column_filter)
}

/// Recompute every row's and every cell's visibility from the filter flags.
pub fn recompute_visibility(grid: &mut Grid) {
    let hidden_rows = recompute_rows(grid);
    let hidden_columns = recompute_columns(grid);
    trace!(
        "recomputed visibility of {}x{} grid: {hidden_rows} rows and {hidden_columns} columns hidden",
        grid.width(),
        grid.height()
    );
}

/// A row is visible iff, for every column, its cell contains every active
/// row-filter string of that column.
fn recompute_rows(grid: &mut Grid) -> usize {
    let filters_by_column: Vec<Vec<String>> = (0..grid.width())
        .map(|column| {
            active_row_filters(grid, column)
                .into_iter()
                .map(str::to_owned)
                .collect()
        })
        .collect();

    let mut hidden = 0;
    for row in grid.rows_mut() {
        row.is_visible = row
            .cells
            .iter()
            .zip(&filters_by_column)
            .all(|(cell, filters)| filters.iter().all(|f| cell.contains(f)));
        if !row.is_visible {
            hidden += 1;
        }
    }
    hidden
}

/// A column is visible iff, for every row holding column filters, that row's
/// cell in the column contains every one of the row's filter strings. The
/// result is applied to the whole column.
fn recompute_columns(grid: &mut Grid) -> usize {
    let mut column_visible = vec![true; grid.width()];
    for row in grid.rows() {
        let filters = active_column_filters(grid, row.index);
        if filters.is_empty() {
            continue;
        }
        for (visible, cell) in column_visible.iter_mut().zip(&row.cells) {
            if !filters.iter().all(|f| cell.contains(f)) {
                *visible = false;
            }
        }
    }

    for row in grid.rows_mut() {
        for (cell, visible) in row.cells.iter_mut().zip(&column_visible) {
            cell.is_visible = *visible;
        }
    }
    column_visible.iter().filter(|visible| !**visible).count()
}
