//! Per-cell contextual tool menu state.
//!
//! The menu is absolutely positioned at the pointer location of the event
//! that opened it and remembers which cell it was opened for.

use serde::Serialize;

use crate::types::CellPos;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolMenu {
    pub visible: bool,
    /// Cell the menu acts on
    pub target: Option<CellPos>,
    /// Page x of the menu's top-left corner
    pub left: f64,
    /// Page y of the menu's top-left corner
    pub top: f64,
}

impl ToolMenu {
    /// Show the menu for `target` at page position `(x, y)`.
    pub fn open_at(&mut self, target: CellPos, x: f64, y: f64) {
        self.visible = true;
        self.target = Some(target);
        self.left = x;
        self.top = y;
    }

    /// Hide the menu. The last target and position are kept.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Flip visibility, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// CSS `left` value, e.g. `"120px"`
    pub fn css_left(&self) -> String {
        format!("{}px", self.left)
    }

    /// CSS `top` value
    pub fn css_top(&self) -> String {
        format!("{}px", self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_hide_toggle() {
        let mut menu = ToolMenu::default();
        assert!(!menu.visible);

        menu.open_at(CellPos::new(2, 3), 120.0, 48.5);
        assert!(menu.visible);
        assert_eq!(menu.target, Some(CellPos::new(2, 3)));
        assert_eq!(menu.css_left(), "120px");
        assert_eq!(menu.css_top(), "48.5px");

        menu.hide();
        assert!(!menu.visible);
        assert_eq!(menu.target, Some(CellPos::new(2, 3)));

        assert!(menu.toggle());
        assert!(!menu.toggle());
    }
}
