use std::cell::RefCell;
use std::rc::Rc;

use circuitfx::anchors::{
    NAV_ACTIVE_CLASS, NAV_LINK_SELECTOR, NAV_SECTION_ATTR, REVEAL_SELECTOR, REVEAL_VISIBLE_CLASS,
    SECTION_SELECTOR,
};
use circuitfx::config::ScrollConfig;
use circuitfx::scroll::{NavHighlight, RevealLatch};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom;
use crate::error::FxError;

type ObserverCallback = dyn FnMut(js_sys::Array, web_sys::IntersectionObserver);

fn observe_all(
    targets: &[web_sys::Element],
    threshold: f64,
    cb: Closure<ObserverCallback>,
) -> Result<(), FxError> {
    let opts = web_sys::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)?;
    for el in targets {
        observer.observe(el);
    }
    // The observer lives as long as the page.
    cb.forget();
    Ok(())
}

fn entries(list: js_sys::Array) -> impl Iterator<Item = web_sys::IntersectionObserverEntry> {
    list.into_iter()
        .filter_map(|v| v.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
}

/// Add the visible class the first time each element scrolls into view.
pub(super) fn attach_reveal(cfg: &ScrollConfig) -> Result<(), FxError> {
    let targets = dom::query_all(REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Err(FxError::MissingAnchor(REVEAL_SELECTOR));
    }

    let latch = RefCell::new(RevealLatch::new(targets.len()));
    let known = targets.clone();
    let cb = Closure::wrap(Box::new(
        move |list: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries(list) {
                let el = entry.target();
                let Some(index) = known.iter().position(|k| *k == el) else {
                    continue;
                };
                if latch.borrow_mut().observe(index, entry.is_intersecting()) {
                    let _ = el.class_list().add_1(REVEAL_VISIBLE_CLASS);
                    // One-way: nothing left to watch for.
                    observer.unobserve(&el);
                }
            }
        },
    ) as Box<ObserverCallback>);

    observe_all(&targets, cfg.reveal_threshold, cb)?;
    tracing::debug!(elements = targets.len(), "scroll: reveal observer attached");
    Ok(())
}

/// Keep exactly one nav link marked for the section most recently in view.
pub(super) fn attach_nav(cfg: &ScrollConfig) -> Result<(), FxError> {
    let sections = dom::query_all(SECTION_SELECTOR)?;
    if sections.is_empty() {
        return Err(FxError::MissingAnchor(SECTION_SELECTOR));
    }
    let links = dom::query_all(NAV_LINK_SELECTOR)?;
    if links.is_empty() {
        return Err(FxError::MissingAnchor(NAV_LINK_SELECTOR));
    }

    let nav = Rc::new(RefCell::new(NavHighlight::new(
        links.iter().map(|l| l.get_attribute(NAV_SECTION_ATTR)).collect(),
    )));
    let cb = Closure::wrap(Box::new(
        move |list: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries(list) {
                if !entry.is_intersecting() {
                    continue;
                }
                let id = entry.target().id();
                for change in nav.borrow_mut().activate(&id) {
                    let Some(link) = links.get(change.index) else {
                        continue;
                    };
                    let classes = link.class_list();
                    let _ = if change.active {
                        classes.add_1(NAV_ACTIVE_CLASS)
                    } else {
                        classes.remove_1(NAV_ACTIVE_CLASS)
                    };
                }
            }
        },
    ) as Box<ObserverCallback>);

    observe_all(&sections, cfg.nav_threshold, cb)?;
    tracing::debug!(sections = sections.len(), "scroll: nav observer attached");
    Ok(())
}
