//! Grid configuration.
//!
//! Recognized options (JSON / JS object, camelCase, all optional):
//!
//! ```json
//! { "width": 8, "height": 8, "minWidth": 20, "minHeight": 12,
//!   "columnWidth": 64, "rowHeight": 20 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SsheetError};

/// Default number of columns
pub const DEFAULT_WIDTH: usize = 8;
/// Default number of rows
pub const DEFAULT_HEIGHT: usize = 8;
/// Narrowest a column can be dragged, in pixels
pub const MIN_COLUMN_WIDTH: f32 = 20.0;
/// Shortest a row can be dragged, in pixels
pub const MIN_ROW_HEIGHT: f32 = 12.0;
/// Initial column width in pixels
pub const DEFAULT_COLUMN_WIDTH: f32 = 64.0;
/// Initial row height in pixels
pub const DEFAULT_ROW_HEIGHT: f32 = 20.0;

/// Dimensions and sizing limits of a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    pub min_width: f32,
    pub min_height: f32,
    pub column_width: f32,
    pub row_height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_width: MIN_COLUMN_WIDTH,
            min_height: MIN_ROW_HEIGHT,
            column_width: DEFAULT_COLUMN_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }
}

impl GridConfig {
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse options from JSON, filling in defaults, and validate them.
    ///
    /// # Errors
    /// [`SsheetError::Json`] for invalid JSON, [`SsheetError::Config`] for
    /// values rejected by [`GridConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Dimensions must be positive and sizes positive and finite, with the
    /// initial sizes no smaller than the minimums.
    ///
    /// # Errors
    /// Returns [`SsheetError::Config`] describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SsheetError::Config(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let sizes = [
            ("minWidth", self.min_width),
            ("minHeight", self.min_height),
            ("columnWidth", self.column_width),
            ("rowHeight", self.row_height),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(SsheetError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.column_width < self.min_width {
            return Err(SsheetError::Config(format!(
                "columnWidth {} is below minWidth {}",
                self.column_width, self.min_width
            )));
        }
        if self.row_height < self.min_height {
            return Err(SsheetError::Config(format!(
                "rowHeight {} is below minHeight {}",
                self.row_height, self.min_height
            )));
        }
        Ok(())
    }
}
