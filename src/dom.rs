//! DOM side effects of a resize drag.
//!
//! Cells are rendered by the host page as elements whose `id` attribute is the
//! cell id, so sizes are applied by looking elements up by id. Missing
//! elements are skipped; the host may render only part of the grid.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::layout::ResizeUpdate;

/// Cursor shown on the whole page while a spacer is dragged
pub(crate) const RESIZE_CURSOR: &str = "se-resize";
pub(crate) const DEFAULT_CURSOR: &str = "auto";

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Set the new width on every cell of the column and the new height on every
/// cell of the row.
pub(crate) fn apply_resize(update: &ResizeUpdate) -> Result<(), JsValue> {
    let Some(document) = document() else {
        return Ok(());
    };

    let width = format!("{}px", update.width);
    for id in &update.column_cell_ids {
        set_style(&document, id, "width", &width)?;
    }
    let height = format!("{}px", update.height);
    for id in &update.row_cell_ids {
        set_style(&document, id, "height", &height)?;
    }
    Ok(())
}

/// Set the cursor on the root `<html>` element.
pub(crate) fn set_page_cursor(cursor: &str) -> Result<(), JsValue> {
    let root = document()
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        root.style().set_property("cursor", cursor)?;
    }
    Ok(())
}

fn set_style(document: &Document, id: &str, property: &str, value: &str) -> Result<(), JsValue> {
    let element = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    if let Some(element) = element {
        element.style().set_property(property, value)?;
    }
    Ok(())
}
