//! Mobile navigation drawer.
//!
//! The drawer is hidden by an off-screen transform class; opening removes it,
//! closing puts it back. Repeated opens or closes are no-ops.

use crate::anchors::DRAWER_HIDDEN_CLASS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
}

/// What to do with the hidden class on the drawer element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassOp {
    Add(&'static str),
    Remove(&'static str),
}

impl DrawerState {
    pub fn open(&mut self) -> ClassOp {
        *self = DrawerState::Open;
        ClassOp::Remove(DRAWER_HIDDEN_CLASS)
    }

    pub fn close(&mut self) -> ClassOp {
        *self = DrawerState::Closed;
        ClassOp::Add(DRAWER_HIDDEN_CLASS)
    }

    pub fn is_open(self) -> bool {
        self == DrawerState::Open
    }

    /// Read the state back from the element's class list.
    pub fn from_hidden_class(present: bool) -> Self {
        if present {
            DrawerState::Closed
        } else {
            DrawerState::Open
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close_are_idempotent() {
        let mut d = DrawerState::default();
        assert!(!d.is_open());

        assert_eq!(d.open(), ClassOp::Remove("translate-x-full"));
        assert_eq!(d.open(), ClassOp::Remove("translate-x-full"));
        assert!(d.is_open());

        assert_eq!(d.close(), ClassOp::Add("translate-x-full"));
        assert_eq!(d.close(), ClassOp::Add("translate-x-full"));
        assert!(!d.is_open());
    }

    #[test]
    fn state_round_trips_through_the_class() {
        assert_eq!(DrawerState::from_hidden_class(true), DrawerState::Closed);
        assert_eq!(DrawerState::from_hidden_class(false), DrawerState::Open);
    }
}
