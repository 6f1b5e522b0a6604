//! Structured error types for ssheet.
//!
//! Every fallible grid operation returns [`Result`]. A failed operation never
//! leaves a partial visibility update behind.

/// All errors that can occur while addressing, filtering or configuring a grid.
#[derive(Debug, thiserror::Error)]
pub enum SsheetError {
    /// Cell identifier is neither `R_C` nor `spacer_R_C` with integer parts.
    #[error("Malformed cell id: {0:?}")]
    Format(String),

    /// Cell identifier decodes to a position outside the grid.
    #[error("Cell id {id:?} ({row}, {column}) is outside the {width}x{height} grid")]
    OutOfRange {
        id: String,
        row: usize,
        column: usize,
        width: usize,
        height: usize,
    },

    /// Grid dimensions or cell sizes that cannot be used.
    #[error("Invalid grid configuration: {0}")]
    Config(String),

    /// Content matrix whose rows are not all the same length.
    #[error("Row {row} has {found} cells, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SsheetError>;

impl SsheetError {
    pub(crate) fn format(id: &str) -> Self {
        Self::Format(id.to_string())
    }

    /// True for the programmer-error class raised by malformed identifiers.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// True when a well-formed identifier points outside the grid.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SsheetError> for wasm_bindgen::JsValue {
    fn from(e: SsheetError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
