use std::cell::{Cell, RefCell};
use std::rc::Rc;

use circuitfx::anchors::{CURSOR_HOVERED_CLASS, CURSOR_ID};
use circuitfx::config::CursorConfig;
use circuitfx::cursor::{cursor_transform, HoverState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom;
use crate::error::FxError;

/// Enter/leave listeners shared by every hover target. Keeping the same two
/// functions is what lets a re-scan remove them before adding them again.
struct HoverBinding {
    selector: String,
    enter: Closure<dyn FnMut()>,
    leave: Closure<dyn FnMut()>,
}

thread_local! {
    static HOVER: RefCell<Option<HoverBinding>> = const { RefCell::new(None) };
}

pub(super) fn attach(cfg: &CursorConfig) -> Result<(), FxError> {
    let cursor = dom::html_by_id(CURSOR_ID)?;
    if !dom::is_fine_pointer() {
        dom::set_style(&cursor, "display", "none")?;
        return Err(FxError::Disabled("coarse pointer"));
    }

    let document = dom::document()?;
    dom::listen(&document, "mousemove", {
        let cursor = cursor.clone();
        move |e: web_sys::MouseEvent| {
            let transform = cursor_transform(f64::from(e.client_x()), f64::from(e.client_y()));
            let _ = dom::set_style(&cursor, "transform", &transform);
        }
    })?;

    let hover = Rc::new(Cell::new(HoverState::default()));
    let enter = {
        let cursor = cursor.clone();
        let hover = hover.clone();
        Closure::wrap(Box::new(move || {
            let mut h = hover.get();
            if h.enter() {
                let _ = cursor.class_list().add_1(CURSOR_HOVERED_CLASS);
            }
            hover.set(h);
        }) as Box<dyn FnMut()>)
    };
    let leave = Closure::wrap(Box::new(move || {
        let mut h = hover.get();
        if h.leave() {
            let _ = cursor.class_list().remove_1(CURSOR_HOVERED_CLASS);
        }
        hover.set(h);
    }) as Box<dyn FnMut()>);

    HOVER.with(|slot| {
        *slot.borrow_mut() = Some(HoverBinding {
            selector: cfg.hover_selector.clone(),
            enter,
            leave,
        });
    });

    let bound = refresh()?;
    tracing::debug!(targets = bound, "cursor: hover targets bound");
    Ok(())
}

/// (Re)bind hover listeners on every current target. Returns how many
/// elements are bound; zero when the cursor never activated.
pub(super) fn refresh() -> Result<usize, FxError> {
    HOVER.with(|slot| {
        let slot = slot.borrow();
        let Some(binding) = slot.as_ref() else {
            return Ok(0);
        };

        let enter: &js_sys::Function = binding.enter.as_ref().unchecked_ref();
        let leave: &js_sys::Function = binding.leave.as_ref().unchecked_ref();
        let targets = dom::query_all(&binding.selector)?;
        for t in &targets {
            t.remove_event_listener_with_callback("mouseenter", enter)?;
            t.remove_event_listener_with_callback("mouseleave", leave)?;
            t.add_event_listener_with_callback("mouseenter", enter)?;
            t.add_event_listener_with_callback("mouseleave", leave)?;
        }
        Ok(targets.len())
    })
}
