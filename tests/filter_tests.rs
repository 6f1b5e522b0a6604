//! Tests for row and column filtering.
//!
//! Row filters hide rows whose cell in the filter's column lacks the filter
//! text; column filters hide whole columns whose cell in the filter's row lacks
//! the filter text. All active filters must be satisfied at once.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use ssheet::filter::{
    active_column_filters, active_row_filters, recompute_visibility, set_contents,
};
use ssheet::{toggle_column_filter, toggle_row_filter, Grid};
use test_case::test_case;

fn fruit() -> Grid {
    Grid::from_contents([
        ["apple", "banana", "cherry"],
        ["xyz", "blueberry", "citrus"],
        ["avocado", "berry", "coconut"],
    ])
    .expect("valid grid")
}

fn row_visibility(grid: &Grid) -> Vec<bool> {
    grid.rows().iter().map(|row| row.is_visible).collect()
}

fn column_visibility(grid: &Grid, row: usize) -> Vec<bool> {
    grid.rows()[row]
        .cells
        .iter()
        .map(|cell| cell.is_visible)
        .collect()
}

// ============================================================================
// Row filters
// ============================================================================

#[test]
fn test_row_filter_keeps_only_matching_rows() {
    let mut grid = fruit();
    toggle_row_filter("0_0", &mut grid).unwrap();
    assert_eq!(row_visibility(&grid), [true, false, false]);
}

#[test]
fn test_row_filter_returns_the_same_grid() {
    let mut grid = fruit();
    let returned = toggle_row_filter("0_0", &mut grid).unwrap();
    assert_eq!(returned.visible_rows(), vec![0]);
}

#[test_case("0_0" ; "apple")]
#[test_case("1_1" ; "blueberry")]
#[test_case("spacer_2_2" ; "coconut via spacer")]
fn test_double_toggle_restores_state(id: &str) {
    let mut grid = fruit();
    toggle_column_filter("2_0", &mut grid).unwrap();
    let before = grid.clone();

    toggle_row_filter(id, &mut grid).unwrap();
    toggle_row_filter(id, &mut grid).unwrap();

    assert_eq!(grid, before);
}

#[test]
fn test_toggle_off_restores_rows_not_excluded_elsewhere() {
    let mut grid = Grid::from_contents([
        ["red apple", "x"],
        ["red", "x"],
        ["green apple", "y"],
        ["apple", "x"],
    ])
    .unwrap();

    toggle_row_filter("3_0", &mut grid).unwrap(); // "apple" in column 0
    toggle_row_filter("0_1", &mut grid).unwrap(); // "x" in column 1
    assert_eq!(grid.visible_rows(), vec![0, 3]);

    toggle_row_filter("3_0", &mut grid).unwrap();
    // "x" still excludes row 2
    assert_eq!(grid.visible_rows(), vec![0, 1, 3]);
}

#[test]
fn test_row_filters_in_same_column_compose() {
    let mut grid = Grid::from_contents([["ab"], ["bc"], ["abc"], ["b"]]).unwrap();
    toggle_row_filter("0_0", &mut grid).unwrap();
    toggle_row_filter("1_0", &mut grid).unwrap();
    assert_eq!(active_row_filters(&grid, 0), ["ab", "bc"]);
    // only "abc" contains both; the filter rows themselves are evaluated too
    assert_eq!(grid.visible_rows(), vec![2]);
}

#[test]
fn test_filter_is_case_sensitive() {
    let mut grid = Grid::from_contents([["Apple"], ["apple"], ["APPLE"]]).unwrap();
    toggle_row_filter("1_0", &mut grid).unwrap();
    assert_eq!(grid.visible_rows(), vec![1]);
}

#[test]
fn test_empty_filter_contents_is_a_no_op() {
    let mut grid = Grid::from_contents([["", "q"], ["b", "r"], ["c", "s"]]).unwrap();
    toggle_row_filter("0_0", &mut grid).unwrap();
    assert_eq!(row_visibility(&grid), [true, true, true]);

    toggle_column_filter("0_0", &mut grid).unwrap();
    assert_eq!(column_visibility(&grid, 2), [true, true]);
}

#[test]
fn test_editing_filter_text_reapplies_filter() {
    let mut grid = fruit();
    toggle_row_filter("0_1", &mut grid).unwrap(); // "banana"
    assert_eq!(grid.visible_rows(), vec![0]);

    set_contents("0_1", "blue", &mut grid).unwrap();
    assert_eq!(grid.visible_rows(), vec![0, 1]);

    set_contents("0_1", "", &mut grid).unwrap();
    assert_eq!(grid.visible_rows(), vec![0, 1, 2]);
}

// ============================================================================
// Column filters
// ============================================================================

#[test]
fn test_column_filter_propagates_to_every_row() {
    let mut grid = Grid::from_contents([
        ["one", "two", "three"],
        ["keep-o", "drop", "keep-o"],
        ["a", "b", "c"],
    ])
    .unwrap();

    toggle_column_filter("1_0", &mut grid).unwrap(); // "keep-o"
    assert_eq!(active_column_filters(&grid, 1), ["keep-o"]);

    for row in 0..3 {
        assert_eq!(
            column_visibility(&grid, row),
            [true, false, true],
            "row {row}"
        );
    }
    assert_eq!(grid.visible_columns(), vec![0, 2]);
    assert_eq!(grid.visible_rows(), vec![0, 1, 2]);
}

#[test]
fn test_column_filters_in_same_row_compose() {
    let mut grid = Grid::from_contents([["a", "b", "ab", "ba", "c"]]).unwrap();
    toggle_column_filter("0_0", &mut grid).unwrap();
    assert_eq!(grid.visible_columns(), vec![0, 2, 3]);
    toggle_column_filter("0_1", &mut grid).unwrap();
    assert_eq!(grid.visible_columns(), vec![2, 3]);
    toggle_column_filter("0_0", &mut grid).unwrap();
    assert_eq!(grid.visible_columns(), vec![1, 2, 3]);
}

#[test]
fn test_row_and_column_filters_are_independent() {
    let mut grid = fruit();
    toggle_row_filter("0_0", &mut grid).unwrap();
    toggle_column_filter("1_1", &mut grid).unwrap(); // "blueberry"
    assert_eq!(grid.visible_rows(), vec![0]);
    assert_eq!(grid.visible_columns(), vec![1]);

    toggle_column_filter("1_1", &mut grid).unwrap();
    assert_eq!(grid.visible_rows(), vec![0]);
    assert_eq!(grid.visible_columns(), vec![0, 1, 2]);
}

// ============================================================================
// Failures
// ============================================================================

#[test_case("0/0" ; "bad separator")]
#[test_case("a_b" ; "letters")]
#[test_case("9_0" ; "row out of range")]
#[test_case("0_9" ; "column out of range")]
fn test_failed_toggle_changes_nothing(id: &str) {
    let mut grid = fruit();
    toggle_row_filter("0_0", &mut grid).unwrap();
    let before = grid.clone();

    assert!(toggle_row_filter(id, &mut grid).is_err());
    assert!(toggle_column_filter(id, &mut grid).is_err());
    assert_eq!(grid, before);
}

#[test]
fn test_recompute_is_stable() {
    let mut grid = fruit();
    toggle_row_filter("2_0", &mut grid).unwrap();
    toggle_column_filter("0_2", &mut grid).unwrap();
    let once = grid.clone();
    recompute_visibility(&mut grid);
    assert_eq!(grid, once);
}
