use std::cell::RefCell;
use std::rc::Rc;

use circuitfx::anchors::TILT_CARD_SELECTOR;
use circuitfx::config::TiltConfig;
use circuitfx::tilt::{CardRect, TiltState};
use wasm_bindgen::JsCast;

use super::dom;
use super::sched::FrameLoop;
use crate::error::{bind_each, FxError};

pub(super) fn attach(cfg: &TiltConfig) -> Result<(), FxError> {
    if !dom::is_fine_pointer() {
        return Err(FxError::Disabled("coarse pointer"));
    }
    let cards = dom::query_all(TILT_CARD_SELECTOR)?;
    if cards.is_empty() {
        return Err(FxError::MissingAnchor(TILT_CARD_SELECTOR));
    }

    let cards = cards
        .into_iter()
        .filter_map(|card| card.dyn_into::<web_sys::HtmlElement>().ok());
    let bound = bind_each("tilt", cards, |card| attach_card(card, cfg));
    tracing::debug!(cards = bound, "tilt: cards bound");
    Ok(())
}

fn attach_card(card: web_sys::HtmlElement, cfg: &TiltConfig) -> Result<(), FxError> {
    let perspective = cfg.perspective_px;
    let state = Rc::new(RefCell::new(TiltState::new(cfg)));

    let frames = FrameLoop::new({
        let state = state.clone();
        let card = card.clone();
        move |_ts| match state.borrow().frame() {
            Some(tilt) => {
                let _ = dom::set_style(&card, "transform", &tilt.to_css(perspective));
                true
            }
            None => false,
        }
    });

    dom::listen(&card, "mouseenter", {
        let state = state.clone();
        let card = card.clone();
        let frames = frames.clone();
        move |_: web_sys::MouseEvent| {
            let r = card.get_bounding_client_rect();
            state.borrow_mut().enter(CardRect {
                left: r.left(),
                top: r.top(),
                width: r.width(),
                height: r.height(),
            });
            if let Err(e) = frames.start() {
                tracing::warn!(error = %e, "tilt: could not start frame loop");
            }
        }
    })?;

    dom::listen(&card, "mousemove", {
        let state = state.clone();
        move |e: web_sys::MouseEvent| {
            state
                .borrow_mut()
                .pointer_moved(f64::from(e.client_x()), f64::from(e.client_y()));
        }
    })?;

    let target = card.clone();
    dom::listen(&target, "mouseleave", move |_: web_sys::MouseEvent| {
        frames.stop();
        let flat = state.borrow_mut().leave();
        let _ = dom::set_style(&card, "transform", &flat.to_css(perspective));
    })?;

    Ok(())
}
