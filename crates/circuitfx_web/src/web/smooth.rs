use std::cell::{Cell, RefCell};
use std::rc::Rc;

use circuitfx::anchors::NATIVE_SCROLL_SELECTOR;
use circuitfx::config::SmoothScrollConfig;
use circuitfx::smooth::SmoothScroll;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom;
use super::sched::FrameLoop;
use super::time::Instant;
use crate::error::FxError;

const LINE_HEIGHT_PX: f64 = 16.0;

/// Take over wheel scrolling and ease the page towards the accumulated target.
pub(super) fn attach(cfg: &SmoothScrollConfig) -> Result<(), FxError> {
    if !cfg.enabled {
        return Err(FxError::Disabled("smooth scroll off in config"));
    }
    // Touch and trackpad-only devices already get momentum scrolling.
    if !dom::is_fine_pointer() {
        return Err(FxError::Disabled("coarse pointer"));
    }

    let window = dom::window()?;
    let state = Rc::new(RefCell::new(SmoothScroll::new(cfg.lerp)));
    let last = Rc::new(Cell::new(None::<Instant>));

    let frames = FrameLoop::new({
        let state = state.clone();
        let last = last.clone();
        let window = window.clone();
        move |_ts| {
            let now = Instant::now();
            let dt = last
                .replace(Some(now))
                .map(|prev| now.duration_since(prev).as_secs_f64())
                .unwrap_or(0.0);

            let mut s = state.borrow_mut();
            if let Some(y) = s.frame(dt) {
                window.scroll_to_with_x_and_y(0.0, y);
            }
            if s.is_animating() {
                true
            } else {
                last.set(None);
                false
            }
        }
    });

    let multiplier = cfg.wheel_multiplier;
    let on_wheel = Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
        // Pinch-zoom arrives as ctrl+wheel.
        if e.ctrl_key() || in_native_region(&e) {
            return;
        }
        let Ok(window) = dom::window() else {
            return;
        };
        e.prevent_default();

        let viewport = dom::inner_height(&window);
        let delta = match e.delta_mode() {
            web_sys::WheelEvent::DOM_DELTA_LINE => e.delta_y() * LINE_HEIGHT_PX,
            web_sys::WheelEvent::DOM_DELTA_PAGE => e.delta_y() * viewport,
            _ => e.delta_y(),
        } * multiplier;
        let limit = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| f64::from(el.scroll_height()) - viewport)
            .unwrap_or(0.0);

        {
            let mut s = state.borrow_mut();
            s.sync(window.scroll_y().unwrap_or(0.0));
            s.wheel(delta, limit);
            if !s.is_animating() {
                return;
            }
        }
        if let Err(err) = frames.start() {
            tracing::warn!(error = %err, "smooth: could not start frame loop");
        }
    }) as Box<dyn FnMut(web_sys::WheelEvent)>);

    // Non-passive so the native scroll can be cancelled.
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(false);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        on_wheel.as_ref().unchecked_ref(),
        &opts,
    )?;
    on_wheel.forget();

    tracing::debug!(lerp = cfg.lerp, "smooth: wheel scrolling attached");
    Ok(())
}

fn in_native_region(e: &web_sys::WheelEvent) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(NATIVE_SCROLL_SELECTOR).ok().flatten())
        .is_some()
}
