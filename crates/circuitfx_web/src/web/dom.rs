use std::time::Duration;

use circuitfx::anchors::FINE_POINTER_QUERY;
use circuitfx::drawer::ClassOp;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::FxError;

impl From<JsValue> for FxError {
    fn from(v: JsValue) -> Self {
        let msg = v
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| v.as_string())
            .unwrap_or_else(|| format!("{v:?}"));
        FxError::Js(msg)
    }
}

pub(super) fn window() -> Result<web_sys::Window, FxError> {
    web_sys::window().ok_or(FxError::NoWindow)
}

pub(super) fn document() -> Result<web_sys::Document, FxError> {
    window()?.document().ok_or(FxError::NoDocument)
}

/// Element by id, cast to the concrete type the caller needs.
pub(super) fn by_id<T: JsCast>(id: &'static str, expected: &'static str) -> Result<T, FxError> {
    document()?
        .get_element_by_id(id)
        .ok_or(FxError::MissingAnchor(id))?
        .dyn_into::<T>()
        .map_err(|_| FxError::WrongElement {
            anchor: id,
            expected,
        })
}

pub(super) fn html_by_id(id: &'static str) -> Result<web_sys::HtmlElement, FxError> {
    by_id(id, "html element")
}

/// Every element matching `selector`, in document order.
pub(super) fn query_all(selector: &str) -> Result<Vec<web_sys::Element>, FxError> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .collect())
}

pub(super) fn is_fine_pointer() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(FINE_POINTER_QUERY).ok().flatten())
        .is_some_and(|q| q.matches())
}

pub(super) fn set_style(el: &web_sys::HtmlElement, prop: &str, value: &str) -> Result<(), FxError> {
    el.style().set_property(prop, value)?;
    Ok(())
}

pub(super) fn apply_class(el: &web_sys::Element, op: ClassOp) -> Result<(), FxError> {
    match op {
        ClassOp::Add(class) => el.class_list().add_1(class)?,
        ClassOp::Remove(class) => el.class_list().remove_1(class)?,
    }
    Ok(())
}

/// Attach a listener for the lifetime of the page.
pub(super) fn listen<E, F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), FxError>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// One-shot timer. The callback frees itself after it runs.
pub(super) fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) -> Result<i32, FxError> {
    let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    let cb = Closure::once_into_js(f);
    let id = window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)?;
    Ok(id)
}

/// `window.innerHeight` as a number.
pub(super) fn inner_height(w: &web_sys::Window) -> f64 {
    w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}
