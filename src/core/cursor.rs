//! Custom cursor overlay.

use crate::css;

/// Transform that centres the cursor element on the pointer.
pub fn cursor_transform(client_x: f64, client_y: f64) -> String {
    format!(
        "translate({}, {}) translate(-50%, -50%)",
        css::px(client_x),
        css::px(client_y)
    )
}

/// Hover flag for the cursor overlay. Last enter/leave wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hovered: bool,
}

impl HoverState {
    /// Returns `true` when the visual state changed.
    pub fn enter(&mut self) -> bool {
        !std::mem::replace(&mut self.hovered, true)
    }

    /// Returns `true` when the visual state changed.
    pub fn leave(&mut self) -> bool {
        std::mem::replace(&mut self.hovered, false)
    }

    pub fn is_hovered(self) -> bool {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_centres_on_pointer() {
        assert_eq!(
            cursor_transform(120.0, 48.5),
            "translate(120px, 48.5px) translate(-50%, -50%)"
        );
        assert_eq!(
            cursor_transform(0.0, 0.0),
            "translate(0px, 0px) translate(-50%, -50%)"
        );
    }

    #[test]
    fn hover_reports_changes_only() {
        let mut h = HoverState::default();
        assert!(h.enter());
        assert!(!h.enter());
        assert!(h.is_hovered());
        assert!(h.leave());
        assert!(!h.leave());
        assert!(!h.is_hovered());
    }
}
