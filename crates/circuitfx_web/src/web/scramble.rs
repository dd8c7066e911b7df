use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use circuitfx::anchors::{SCRAMBLE_ATTR, SCRAMBLE_SELECTOR};
use circuitfx::config::ScrambleConfig;
use circuitfx::prng::Prng;
use circuitfx::scramble::Scramble;

use super::dom;
use super::sched::Interval;
use crate::error::{bind_each, FxError};

/// Per-element scramble: the state machine plus the timer driving it.
struct ScrambleSlot {
    el: web_sys::HtmlElement,
    state: Scramble,
    rng: Prng,
    timer: Option<Interval>,
}

pub(super) fn attach(cfg: &ScrambleConfig, rng: &mut Prng) -> Result<(), FxError> {
    let elements = dom::query_all(SCRAMBLE_SELECTOR)?;
    if elements.is_empty() {
        return Err(FxError::MissingAnchor(SCRAMBLE_SELECTOR));
    }

    let tick = Duration::from_millis(u64::from(cfg.tick_ms));
    let targets = elements.into_iter().filter_map(|el| {
        let el = wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlElement>(el).ok()?;
        let target = el.get_attribute(SCRAMBLE_ATTR)?;
        Some((el, target))
    });
    let bound = bind_each("scramble", targets, |(el, target)| {
        let seed = (u64::from(rng.next_u32()) << 32) | u64::from(rng.next_u32());
        attach_element(el, &target, cfg, Prng::new(seed), tick)
    });

    tracing::debug!(elements = bound, "scramble: elements bound");
    Ok(())
}

fn attach_element(
    el: web_sys::HtmlElement,
    target: &str,
    cfg: &ScrambleConfig,
    rng: Prng,
    tick: Duration,
) -> Result<(), FxError> {
    let slot = Rc::new(RefCell::new(ScrambleSlot {
        el: el.clone(),
        state: Scramble::new(target, cfg),
        rng,
        timer: None,
    }));

    dom::listen(&el, "mouseenter", {
        let slot = slot.clone();
        move |_: web_sys::MouseEvent| start(&slot, tick)
    })?;
    dom::listen(&el, "mouseleave", move |_: web_sys::MouseEvent| {
        let mut s = slot.borrow_mut();
        // Dropping the interval clears it.
        s.timer = None;
        let text = s.state.cancel().to_string();
        s.el.set_inner_text(&text);
    })?;
    Ok(())
}

fn start(slot: &Rc<RefCell<ScrambleSlot>>, tick: Duration) {
    let weak: Weak<RefCell<ScrambleSlot>> = Rc::downgrade(slot);
    let mut s = slot.borrow_mut();
    // Cancel any in-flight run before starting over.
    s.timer = None;
    s.state.restart();

    let timer = Interval::start(tick, move || {
        let Some(slot) = weak.upgrade() else {
            return;
        };
        let mut s = slot.borrow_mut();
        let ScrambleSlot {
            el,
            state,
            rng,
            timer,
        } = &mut *s;
        match state.tick(rng) {
            Some(frame) => {
                el.set_inner_text(&frame.text);
                if frame.finished {
                    if let Some(t) = timer.as_ref() {
                        t.stop();
                    }
                }
            }
            None => {
                if let Some(t) = timer.as_ref() {
                    t.stop();
                }
            }
        }
    });

    match timer {
        Ok(t) => s.timer = Some(t),
        Err(e) => {
            tracing::warn!(error = %e, "scramble: could not start timer");
            let text = s.state.cancel().to_string();
            s.el.set_inner_text(&text);
        }
    }
}
