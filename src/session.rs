//! `GridSession`, the single owner of a grid and its UI state.
//!
//! The presentation layer holds one session and routes every interaction
//! through it. Each method runs to completion and either returns a value or a
//! borrow of the updated grid for re-rendering; a failed call leaves the
//! session exactly as it was.

use log::debug;

use crate::addressing::{self, resolve};
use crate::config::GridConfig;
use crate::error::Result;
use crate::filter::{self, FilterAxis};
use crate::layout::{GridLayout, ResizeDrag, ResizeUpdate};
use crate::tool_menu::ToolMenu;
use crate::types::{Cell, CellPos, Grid, Selection};

#[derive(Debug, Clone)]
pub struct GridSession {
    config: GridConfig,
    grid: Grid,
    layout: GridLayout,
    selection: Selection,
    tool_menu: ToolMenu,
    drag: Option<ResizeDrag>,
}

impl GridSession {
    /// Create a session with an empty `config.width` x `config.height` grid.
    ///
    /// # Errors
    /// Returns [`crate::SsheetError::Config`] if the configuration is invalid.
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self::from_parts(config, grid))
    }

    /// Create a session around an existing grid. The configured dimensions
    /// are replaced by the grid's own.
    ///
    /// # Errors
    /// Returns [`crate::SsheetError::Config`] if the sizing options are invalid.
    pub fn with_grid(config: GridConfig, grid: Grid) -> Result<Self> {
        let config = GridConfig {
            width: grid.width(),
            height: grid.height(),
            ..config
        };
        config.validate()?;
        Ok(Self::from_parts(config, grid))
    }

    fn from_parts(config: GridConfig, grid: Grid) -> Self {
        debug!("grid session created: {}x{}", config.width, config.height);
        Self {
            layout: GridLayout::new(&config),
            config,
            grid,
            selection: Selection::default(),
            tool_menu: ToolMenu::default(),
            drag: None,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn tool_menu(&self) -> &ToolMenu {
        &self.tool_menu
    }

    pub fn selection(&self) -> Option<CellPos> {
        self.selection.current
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    // ---- addressing ----

    pub fn cell(&self, id: &str) -> Result<&Cell> {
        addressing::cell_at(id, &self.grid)
    }

    pub fn row_cells(&self, id: &str) -> Result<&[Cell]> {
        addressing::row_cells(id, &self.grid)
    }

    pub fn column_cells(&self, id: &str) -> Result<Vec<&Cell>> {
        addressing::column_cells(id, &self.grid)
    }

    // ---- filtering ----

    pub fn toggle_row_filter(&mut self, id: &str) -> Result<&Grid> {
        self.toggle_filter(FilterAxis::Row, id)
    }

    pub fn toggle_column_filter(&mut self, id: &str) -> Result<&Grid> {
        self.toggle_filter(FilterAxis::Column, id)
    }

    pub fn toggle_filter(&mut self, axis: FilterAxis, id: &str) -> Result<&Grid> {
        filter::toggle_filter(axis, id, &mut self.grid)?;
        Ok(&self.grid)
    }

    /// Replace a cell's text; filters depending on it are re-applied.
    pub fn set_contents(&mut self, id: &str, contents: &str) -> Result<&Grid> {
        filter::set_contents(id, contents, &mut self.grid)?;
        Ok(&self.grid)
    }

    pub fn clear_filters(&mut self) -> &Grid {
        filter::clear_filters(&mut self.grid);
        &self.grid
    }

    // ---- selection and tool menu ----

    /// Make the cell named by `id` current and return it. A spacer id selects
    /// the data cell it belongs to.
    pub fn select(&mut self, id: &str) -> Result<CellPos> {
        let pos = resolve(id, &self.grid)?;
        Ok(self.selection.select(pos))
    }

    /// Clear the selection and hide the tool menu, returning what was selected.
    pub fn deselect(&mut self) -> Option<CellPos> {
        self.tool_menu.hide();
        self.selection.clear()
    }

    /// True if the cell named by `id` (or its spacer) is the current cell.
    ///
    /// # Errors
    /// See [`resolve`].
    pub fn is_selected(&self, id: &str) -> Result<bool> {
        let pos = resolve(id, &self.grid)?;
        Ok(self.selection.is_selected(pos))
    }

    /// Select the cell named by `id` and open its tool menu at page `(x, y)`.
    pub fn open_tool_menu(&mut self, id: &str, x: f64, y: f64) -> Result<&ToolMenu> {
        let pos = self.select(id)?;
        self.tool_menu.open_at(pos, x, y);
        Ok(&self.tool_menu)
    }

    pub fn hide_tool_menu(&mut self) {
        self.tool_menu.hide();
    }

    pub fn toggle_tool_menu(&mut self) -> bool {
        self.tool_menu.toggle()
    }

    // ---- resizing ----

    /// Start a drag on the spacer `spacer_id` with the pointer at `(x, y)`.
    /// Any drag already in progress is discarded.
    pub fn begin_resize(&mut self, spacer_id: &str, x: f32, y: f32) -> Result<CellPos> {
        let drag = ResizeDrag::begin(spacer_id, &self.grid, &self.layout, x, y)?;
        let target = drag.target;
        self.drag = Some(drag);
        Ok(target)
    }

    /// Move the pointer during a drag. `None` when no drag is in progress.
    pub fn drag_resize(&mut self, x: f32, y: f32) -> Option<ResizeUpdate> {
        let drag = self.drag.as_ref()?;
        Some(drag.update(x, y, &mut self.layout, &self.config))
    }

    /// Finish the drag. Returns whether one was in progress.
    pub fn end_resize(&mut self) -> bool {
        let ended = self.drag.take().is_some();
        if ended {
            debug!("resize drag ended");
        }
        ended
    }
}
