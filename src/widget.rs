//! JavaScript bindings.
//!
//! `SsheetWidget` wraps a [`GridSession`] for the host page. Every mutating
//! method returns the updated grid as a plain JS object (the same camelCase
//! shape as the JSON form) for the page to re-render.
//!
//! ```javascript
//! import init, { SsheetWidget } from 'ssheet';
//! await init();
//! const widget = new SsheetWidget({ width: 8, height: 8 });
//! let grid = widget.setContents('0_0', 'apple');
//! grid = widget.toggleRowFilter('0_0');
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::cell_id;
use crate::config::GridConfig;
use crate::dom;
use crate::session::GridSession;
use crate::types::Grid;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn config_from_js(options: JsValue) -> Result<GridConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(GridConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(options)?)
}

/// Row encoded in a cell id (`R_C` or `spacer_R_C`).
#[wasm_bindgen(js_name = rowOf)]
pub fn row_of(id: &str) -> Result<usize, JsValue> {
    Ok(cell_id::row_of(id)?)
}

/// Column encoded in a cell id (`R_C` or `spacer_R_C`).
#[wasm_bindgen(js_name = columnOf)]
pub fn column_of(id: &str) -> Result<usize, JsValue> {
    Ok(cell_id::column_of(id)?)
}

/// `spacer_R_C` -> `R_C`.
#[wasm_bindgen(js_name = dataIdFromSpacerId)]
pub fn data_id_from_spacer_id(id: &str) -> Result<String, JsValue> {
    Ok(cell_id::data_id_from_spacer_id(id)?)
}

/// The grid widget exported to JavaScript.
#[wasm_bindgen]
pub struct SsheetWidget {
    session: GridSession,
}

#[wasm_bindgen]
impl SsheetWidget {
    /// Create an empty grid. `options` is `{width, height, minWidth, minHeight,
    /// columnWidth, rowHeight}`, every field optional; `undefined` means 8x8.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<SsheetWidget, JsValue> {
        console_error_panic_hook::set_once();
        let session = GridSession::new(config_from_js(options)?)?;
        Ok(SsheetWidget { session })
    }

    /// Create a grid from an array of arrays of strings. Sizing options as for
    /// the constructor; `width`/`height` are taken from the contents.
    #[wasm_bindgen(js_name = fromContents)]
    pub fn from_contents(contents: JsValue, options: JsValue) -> Result<SsheetWidget, JsValue> {
        console_error_panic_hook::set_once();
        let contents: Vec<Vec<String>> = serde_wasm_bindgen::from_value(contents)?;
        let grid = Grid::from_contents(contents)?;
        let session = GridSession::with_grid(config_from_js(options)?, grid)?;
        Ok(SsheetWidget { session })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.session.grid().width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize {
        self.session.grid().height()
    }

    /// Current grid as a JS array of rows.
    #[wasm_bindgen]
    pub fn grid(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.grid())
    }

    /// Every cell's text as an array of arrays, the inverse of `fromContents`.
    #[wasm_bindgen]
    pub fn contents(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.grid().contents())
    }

    /// Current column widths and row heights.
    #[wasm_bindgen]
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.layout())
    }

    #[wasm_bindgen(js_name = cellAt)]
    pub fn cell_at(&self, id: &str) -> Result<JsValue, JsValue> {
        to_js(self.session.cell(id)?)
    }

    #[wasm_bindgen(js_name = rowCells)]
    pub fn row_cells(&self, id: &str) -> Result<JsValue, JsValue> {
        to_js(self.session.row_cells(id)?)
    }

    #[wasm_bindgen(js_name = columnCells)]
    pub fn column_cells(&self, id: &str) -> Result<JsValue, JsValue> {
        to_js(&self.session.column_cells(id)?)
    }

    #[wasm_bindgen(js_name = toggleRowFilter)]
    pub fn toggle_row_filter(&mut self, id: &str) -> Result<JsValue, JsValue> {
        to_js(self.session.toggle_row_filter(id)?)
    }

    #[wasm_bindgen(js_name = toggleColumnFilter)]
    pub fn toggle_column_filter(&mut self, id: &str) -> Result<JsValue, JsValue> {
        to_js(self.session.toggle_column_filter(id)?)
    }

    /// Called on every input event of a cell editor.
    #[wasm_bindgen(js_name = setContents)]
    pub fn set_contents(&mut self, id: &str, contents: &str) -> Result<JsValue, JsValue> {
        to_js(self.session.set_contents(id, contents)?)
    }

    #[wasm_bindgen(js_name = clearFilters)]
    pub fn clear_filters(&mut self) -> Result<JsValue, JsValue> {
        to_js(self.session.clear_filters())
    }

    /// Make a cell current; returns `{row, column}`.
    #[wasm_bindgen]
    pub fn select(&mut self, id: &str) -> Result<JsValue, JsValue> {
        to_js(&self.session.select(id)?)
    }

    /// Clear the current cell; returns the previous `{row, column}` or `undefined`.
    #[wasm_bindgen]
    pub fn deselect(&mut self) -> Result<JsValue, JsValue> {
        match self.session.deselect() {
            Some(pos) => to_js(&pos),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen(js_name = isSelected)]
    pub fn is_selected(&self, id: &str) -> Result<bool, JsValue> {
        Ok(self.session.is_selected(id)?)
    }

    /// Open the tool menu for a cell at page coordinates; returns the menu state.
    #[wasm_bindgen(js_name = openToolMenu)]
    pub fn open_tool_menu(
        &mut self,
        id: &str,
        page_x: f64,
        page_y: f64,
    ) -> Result<JsValue, JsValue> {
        to_js(self.session.open_tool_menu(id, page_x, page_y)?)
    }

    #[wasm_bindgen(js_name = hideToolMenu)]
    pub fn hide_tool_menu(&mut self) {
        self.session.hide_tool_menu();
    }

    #[wasm_bindgen(js_name = toggleToolMenu)]
    pub fn toggle_tool_menu(&mut self) -> bool {
        self.session.toggle_tool_menu()
    }

    #[wasm_bindgen(js_name = toolMenu)]
    pub fn tool_menu(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.tool_menu())
    }

    /// mousedown on a spacer element.
    #[wasm_bindgen(js_name = beginResize)]
    pub fn begin_resize(
        &mut self,
        spacer_id: &str,
        page_x: f32,
        page_y: f32,
    ) -> Result<(), JsValue> {
        self.session.begin_resize(spacer_id, page_x, page_y)?;
        dom::set_page_cursor(dom::RESIZE_CURSOR)
    }

    /// mousemove on the document while dragging. Resizes the DOM cells and
    /// returns the update, or `undefined` when no drag is in progress.
    #[wasm_bindgen(js_name = dragResize)]
    pub fn drag_resize(&mut self, page_x: f32, page_y: f32) -> Result<JsValue, JsValue> {
        let Some(update) = self.session.drag_resize(page_x, page_y) else {
            return Ok(JsValue::UNDEFINED);
        };
        dom::apply_resize(&update)?;
        to_js(&update)
    }

    /// mouseup on the document.
    #[wasm_bindgen(js_name = endResize)]
    pub fn end_resize(&mut self) -> Result<bool, JsValue> {
        let ended = self.session.end_resize();
        dom::set_page_cursor(dom::DEFAULT_CURSOR)?;
        Ok(ended)
    }
}
