//! Pointer-driven 3D tilt for cards.

use crate::config::TiltConfig;
use crate::css;

/// Card bounding box in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn to_css(self, perspective_px: f64) -> String {
        format!(
            "perspective({}) rotateX({}) rotateY({})",
            css::px(perspective_px),
            css::deg(self.rotate_x),
            css::deg(self.rotate_y)
        )
    }
}

#[derive(Debug, Clone)]
pub struct TiltState {
    max_degrees: f64,
    rect: Option<CardRect>,
    offset: Option<(f64, f64)>,
    hovering: bool,
}

impl TiltState {
    pub fn new(cfg: &TiltConfig) -> Self {
        Self {
            max_degrees: cfg.max_degrees,
            rect: None,
            offset: None,
            hovering: false,
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Pointer entered: capture the card box for the rest of the hover.
    pub fn enter(&mut self, rect: CardRect) {
        self.rect = Some(rect);
        self.offset = None;
        self.hovering = true;
    }

    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64) {
        if let Some(rect) = self.rect {
            self.offset = Some((client_x - rect.left, client_y - rect.top));
        }
    }

    /// Rotation for this animation frame; `None` once the pointer has left.
    pub fn frame(&self) -> Option<Tilt> {
        if !self.hovering {
            return None;
        }
        let (Some(rect), Some((mx, my))) = (self.rect, self.offset) else {
            return Some(Tilt::NEUTRAL);
        };
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Some(Tilt::NEUTRAL);
        }

        let x_pct = (mx / rect.width - 0.5) * 2.0;
        let y_pct = (my / rect.height - 0.5) * 2.0;
        Some(Tilt {
            // Pointer at the top tips the top edge away.
            rotate_x: y_pct * -self.max_degrees,
            rotate_y: x_pct * self.max_degrees,
        })
    }

    /// Pointer left: stop tracking and snap flat.
    pub fn leave(&mut self) -> Tilt {
        self.hovering = false;
        self.offset = None;
        Tilt::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: CardRect = CardRect {
        left: 100.0,
        top: 50.0,
        width: 300.0,
        height: 200.0,
    };

    fn hovering() -> TiltState {
        let mut t = TiltState::new(&TiltConfig::default());
        t.enter(RECT);
        t
    }

    #[test]
    fn centre_is_flat() {
        let mut t = hovering();
        t.pointer_moved(250.0, 150.0);
        let tilt = t.frame().unwrap();
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn edges_reach_the_maximum() {
        let mut t = hovering();

        t.pointer_moved(400.0, 150.0); // right edge
        assert_eq!(t.frame().unwrap().rotate_y, 10.0);

        t.pointer_moved(100.0, 150.0); // left edge
        assert_eq!(t.frame().unwrap().rotate_y, -10.0);

        t.pointer_moved(250.0, 50.0); // top edge
        assert_eq!(t.frame().unwrap().rotate_x, 10.0);

        t.pointer_moved(250.0, 250.0); // bottom edge
        assert_eq!(t.frame().unwrap().rotate_x, -10.0);
    }

    #[test]
    fn leave_snaps_back_regardless_of_position() {
        let mut t = hovering();
        t.pointer_moved(399.0, 51.0);
        assert_ne!(t.frame().unwrap(), Tilt::NEUTRAL);
        assert_eq!(t.leave(), Tilt::NEUTRAL);
        assert!(t.frame().is_none());
        assert!(!t.is_hovering());
    }

    #[test]
    fn no_move_yet_means_neutral() {
        let t = hovering();
        assert_eq!(t.frame(), Some(Tilt::NEUTRAL));
    }

    #[test]
    fn moves_before_enter_are_ignored() {
        let mut t = TiltState::new(&TiltConfig::default());
        t.pointer_moved(10.0, 10.0);
        assert!(t.frame().is_none());
    }

    #[test]
    fn zero_sized_card_is_neutral() {
        let mut t = TiltState::new(&TiltConfig::default());
        t.enter(CardRect {
            width: 0.0,
            ..RECT
        });
        t.pointer_moved(120.0, 60.0);
        assert_eq!(t.frame(), Some(Tilt::NEUTRAL));
    }

    #[test]
    fn css_transform() {
        assert_eq!(
            Tilt::NEUTRAL.to_css(1000.0),
            "perspective(1000px) rotateX(0deg) rotateY(0deg)"
        );
        let t = Tilt {
            rotate_x: -2.5,
            rotate_y: 7.125,
        };
        assert_eq!(
            t.to_css(1000.0),
            "perspective(1000px) rotateX(-2.5deg) rotateY(7.125deg)"
        );
    }
}
