//! Parsing and formatting of grid cell identifiers.
//!
//! Data cells are addressed as `"R_C"`. The resize handle drawn next to a data
//! cell is addressed as `"spacer_R_C"` and decodes to the same position, so
//! callers never branch on the form.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SsheetError};

/// Leading token of a spacer (resize handle) identifier.
pub const SPACER_PREFIX: &str = "spacer";

const SEPARATOR: char = '_';

/// A decoded cell identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    /// 0-indexed row
    pub row: usize,
    /// 0-indexed column
    pub column: usize,
    /// True if the identifier named the spacer attached to the cell
    pub spacer: bool,
}

impl CellId {
    /// Identifier of the data cell at `(row, column)`.
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            spacer: false,
        }
    }

    /// Identifier of the spacer attached to the data cell at `(row, column)`.
    pub fn spacer(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            spacer: true,
        }
    }

    /// Parse `"R_C"` or `"spacer_R_C"`.
    ///
    /// # Errors
    /// Returns [`SsheetError::Format`] when the token count is neither 2 nor 3,
    /// when a 3-token id does not start with `spacer`, or when R or C is not a
    /// non-negative integer.
    pub fn parse(id: &str) -> Result<Self> {
        let tokens: Vec<&str> = id.split(SEPARATOR).collect();
        match tokens.as_slice() {
            [row, column] => Ok(Self::new(parse_index(id, row)?, parse_index(id, column)?)),
            [prefix, row, column] if *prefix == SPACER_PREFIX => Ok(Self::spacer(
                parse_index(id, row)?,
                parse_index(id, column)?,
            )),
            _ => Err(SsheetError::format(id)),
        }
    }

    /// The plain `"R_C"` form.
    pub fn data_id(&self) -> String {
        format!("{}{SEPARATOR}{}", self.row, self.column)
    }

    /// The `"spacer_R_C"` form.
    pub fn spacer_id(&self) -> String {
        format!(
            "{SPACER_PREFIX}{SEPARATOR}{}{SEPARATOR}{}",
            self.row, self.column
        )
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.spacer {
            f.write_str(&self.spacer_id())
        } else {
            f.write_str(&self.data_id())
        }
    }
}

impl FromStr for CellId {
    type Err = SsheetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Only plain ASCII digits are accepted; `usize::from_str` alone would also take `+3`.
///
/// A well-formed index too large for `usize` saturates to `usize::MAX`, so it
/// resolves as out of range against any grid rather than as malformed.
fn parse_index(id: &str, token: &str) -> Result<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SsheetError::format(id));
    }
    Ok(token.parse().unwrap_or(usize::MAX))
}

/// Row encoded in `id`, with or without the `spacer_` prefix.
///
/// # Errors
/// Returns [`SsheetError::Format`] for a malformed id.
pub fn row_of(id: &str) -> Result<usize> {
    CellId::parse(id).map(|cell| cell.row)
}

/// Column encoded in `id`, with or without the `spacer_` prefix.
///
/// # Errors
/// Returns [`SsheetError::Format`] for a malformed id.
pub fn column_of(id: &str) -> Result<usize> {
    CellId::parse(id).map(|cell| cell.column)
}

/// Strip the `spacer_` prefix, e.g. `"spacer_2_5"` -> `"2_5"`.
///
/// # Errors
/// Returns [`SsheetError::Format`] if `id` has no spacer prefix or the
/// remainder is not a valid `R_C` id.
pub fn data_id_from_spacer_id(id: &str) -> Result<String> {
    let rest = id
        .strip_prefix(SPACER_PREFIX)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
        .ok_or_else(|| SsheetError::format(id))?;
    CellId::parse(rest)
        .ok()
        .filter(|cell| !cell.spacer)
        .map(|_| rest.to_string())
        .ok_or_else(|| SsheetError::format(id))
}
