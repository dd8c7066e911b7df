use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom;
use crate::error::FxError;

/// Repeating timer. Cleared by `stop` or on drop.
///
/// `stop` leaves the closure alive, so it is safe to call from inside the
/// tick itself; the closure is released when the `Interval` is dropped.
pub(super) struct Interval {
    id: Cell<Option<i32>>,
    _cb: Closure<dyn FnMut()>,
}

impl Interval {
    pub(super) fn start(every: Duration, tick: impl FnMut() + 'static) -> Result<Self, FxError> {
        let ms = i32::try_from(every.as_millis()).unwrap_or(i32::MAX).max(1);
        let cb = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let id = dom::window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)?;
        Ok(Self {
            id: Cell::new(Some(id)),
            _cb: cb,
        })
    }

    pub(super) fn stop(&self) {
        if let Some(id) = self.id.take() {
            if let Some(w) = web_sys::window() {
                w.clear_interval_with_handle(id);
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.stop();
    }
}

struct FrameLoopInner {
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoopInner {
    fn request(&self) -> Result<(), FxError> {
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return Ok(());
        };
        let id = dom::window()?.request_animation_frame(cb.as_ref().unchecked_ref())?;
        self.handle.set(Some(id));
        Ok(())
    }
}

/// `requestAnimationFrame` loop. The tick returns whether to keep going.
///
/// Clones share one loop. The scheduled callback only holds a weak
/// reference, so the loop dies with its last handle unless `detach`ed.
#[derive(Clone)]
pub(super) struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
    pub(super) fn new(tick: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(FrameLoopInner {
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak: Weak<FrameLoopInner> = Rc::downgrade(&inner);
        let mut tick = tick;
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if tick(ts) {
                if let Err(e) = inner.request() {
                    tracing::warn!(error = %e, "frame loop: could not schedule next frame");
                }
            }
        }) as Box<dyn FnMut(f64)>);

        *inner.callback.borrow_mut() = Some(cb);
        Self { inner }
    }

    pub(super) fn is_running(&self) -> bool {
        self.inner.handle.get().is_some()
    }

    /// Schedule the next frame unless one is already pending.
    pub(super) fn start(&self) -> Result<(), FxError> {
        if self.is_running() {
            return Ok(());
        }
        self.inner.request()
    }

    /// Cancel the pending frame, if any.
    pub(super) fn stop(&self) {
        if let Some(id) = self.inner.handle.take() {
            if let Some(w) = web_sys::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }

    /// Start and keep the loop alive until the document goes away.
    pub(super) fn detach(self) -> Result<(), FxError> {
        self.start()?;
        std::mem::forget(self);
        Ok(())
    }
}
