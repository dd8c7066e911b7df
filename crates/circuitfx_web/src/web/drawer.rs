use std::cell::Cell;
use std::rc::Rc;

use circuitfx::anchors::{
    DRAWER_HIDDEN_CLASS, MOBILE_MENU_BUTTON_ID, MOBILE_MENU_CLOSE_ID, MOBILE_MENU_ID,
    MOBILE_NAV_LINK_SELECTOR,
};
use circuitfx::drawer::DrawerState;

use super::dom;
use crate::error::FxError;

pub(super) fn attach() -> Result<(), FxError> {
    let button = dom::html_by_id(MOBILE_MENU_BUTTON_ID)?;
    let menu = dom::html_by_id(MOBILE_MENU_ID)?;

    let initial = DrawerState::from_hidden_class(menu.class_list().contains(DRAWER_HIDDEN_CLASS));
    let state = Rc::new(Cell::new(initial));

    dom::listen(&button, "click", {
        let state = state.clone();
        let menu = menu.clone();
        move |_: web_sys::MouseEvent| {
            let mut s = state.get();
            let op = s.open();
            state.set(s);
            if let Err(e) = dom::apply_class(&menu, op) {
                tracing::warn!(error = %e, "drawer: could not open");
            }
        }
    })?;

    let mut closers = dom::query_all(MOBILE_NAV_LINK_SELECTOR)?;
    // The close button is optional markup.
    match dom::html_by_id(MOBILE_MENU_CLOSE_ID) {
        Ok(close) => closers.push(close.into()),
        Err(FxError::MissingAnchor(_)) => {}
        Err(e) => return Err(e),
    }

    for closer in &closers {
        let state = state.clone();
        let menu = menu.clone();
        dom::listen(closer, "click", move |_: web_sys::MouseEvent| {
            let mut s = state.get();
            let op = s.close();
            state.set(s);
            if let Err(e) = dom::apply_class(&menu, op) {
                tracing::warn!(error = %e, "drawer: could not close");
            }
        })?;
    }

    tracing::debug!(closers = closers.len(), "drawer: bound");
    Ok(())
}
