//! Column widths and row heights of a grid.

use serde::{Deserialize, Serialize};

use crate::config::GridConfig;

/// Current pixel sizes of every column and row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    /// Width of each column in pixels
    pub column_widths: Vec<f32>,
    /// Height of each row in pixels
    pub row_heights: Vec<f32>,
}

impl GridLayout {
    /// Every column and row at the configured initial size
    pub fn new(config: &GridConfig) -> Self {
        Self {
            column_widths: vec![config.column_width; config.width],
            row_heights: vec![config.row_height; config.height],
        }
    }

    pub fn column_width(&self, column: usize) -> Option<f32> {
        self.column_widths.get(column).copied()
    }

    pub fn row_height(&self, row: usize) -> Option<f32> {
        self.row_heights.get(row).copied()
    }

    /// Set a column's width, clamped to `min`. Returns the width applied.
    pub fn set_column_width(&mut self, column: usize, width: f32, min: f32) -> Option<f32> {
        let slot = self.column_widths.get_mut(column)?;
        *slot = width.max(min);
        Some(*slot)
    }

    /// Set a row's height, clamped to `min`. Returns the height applied.
    pub fn set_row_height(&mut self, row: usize, height: f32, min: f32) -> Option<f32> {
        let slot = self.row_heights.get_mut(row)?;
        *slot = height.max(min);
        Some(*slot)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layout_uses_config_sizes() {
        let layout = GridLayout::new(&GridConfig::with_size(3, 2));
        assert_eq!(layout.column_widths, vec![64.0; 3]);
        assert_eq!(layout.row_heights, vec![20.0; 2]);
    }

    #[test]
    fn test_set_sizes_clamp() {
        let mut layout = GridLayout::new(&GridConfig::with_size(2, 2));
        assert_eq!(layout.set_column_width(1, 5.0, 20.0), Some(20.0));
        assert_eq!(layout.set_row_height(0, 33.0, 12.0), Some(33.0));
        assert_eq!(layout.set_column_width(2, 50.0, 20.0), None);
        assert_eq!(layout.column_width(1), Some(20.0));
        assert_eq!(layout.row_height(0), Some(33.0));
    }
}
