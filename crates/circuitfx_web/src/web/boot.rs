use circuitfx::anchors::{BOOT_BAR_ID, BOOT_LINE_CLASS, BOOT_LOG_ID, BOOT_SCREEN_ID};
use circuitfx::boot::{BootAction, BootSequence, Visit};
use circuitfx::config::BootConfig;
use circuitfx::css;
use wasm_bindgen::JsValue;

use super::dom;
use super::time::Instant;
use crate::error::FxError;

/// Owns the boot overlay for its whole life. Each scheduled step moves the
/// runner into the next timeout, so nothing outlives the sequence.
struct BootRunner {
    seq: BootSequence,
    document: web_sys::Document,
    screen: web_sys::HtmlElement,
    log: web_sys::HtmlElement,
    bar: web_sys::HtmlElement,
    started: Instant,
}

pub(super) fn attach(cfg: &BootConfig) -> Result<(), FxError> {
    let screen = dom::html_by_id(BOOT_SCREEN_ID)?;
    let log = dom::html_by_id(BOOT_LOG_ID)?;
    let bar = dom::html_by_id(BOOT_BAR_ID)?;

    let window = dom::window()?;
    let document = dom::document()?;
    let host = window.location().host().unwrap_or_default();
    let visit = Visit::classify(is_reload(&window), &document.referrer(), &host);
    tracing::debug!(?visit, "boot: visit classified");

    BootRunner {
        seq: BootSequence::new(cfg, visit),
        document,
        screen,
        log,
        bar,
        started: Instant::now(),
    }
    .step();
    Ok(())
}

/// `performance.getEntriesByType("navigation")[0].type == "reload"`.
fn is_reload(window: &web_sys::Window) -> bool {
    let Some(perf) = window.performance() else {
        return false;
    };
    let entry = perf.get_entries_by_type("navigation").get(0);
    if entry.is_undefined() {
        return false;
    }
    js_sys::Reflect::get(&entry, &JsValue::from_str("type"))
        .ok()
        .and_then(|t| t.as_string())
        .is_some_and(|t| t == "reload")
}

impl BootRunner {
    fn step(mut self) {
        let Some(step) = self.seq.advance() else {
            return;
        };

        if let Err(e) = self.apply(&step.action) {
            tracing::warn!(error = %e, "boot: aborting, overlay removed");
            self.screen.remove();
            return;
        }

        let Some(delay) = step.delay else {
            return;
        };
        let screen = self.screen.clone();
        if let Err(e) = dom::set_timeout(delay, move || self.step()) {
            // Never leave the page covered.
            tracing::warn!(error = %e, "boot: could not schedule next step");
            screen.remove();
        }
    }

    fn apply(&self, action: &BootAction) -> Result<(), FxError> {
        match action {
            BootAction::AppendLine {
                text,
                progress_percent,
            } => {
                let line = self.document.create_element("div")?;
                line.set_class_name(BOOT_LINE_CLASS);
                line.set_text_content(Some(text));
                self.log.append_child(&line)?;
                dom::set_style(&self.bar, "width", &css::percent(*progress_percent))?;
            }
            BootAction::Hold => {}
            BootAction::BeginFade { duration } => {
                let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
                let transition = format!("opacity {} ease", css::seconds_from_ms(ms));
                dom::set_style(&self.screen, "transition", &transition)?;
                dom::set_style(&self.screen, "opacity", "0")?;
            }
            BootAction::Remove => {
                if self.seq.visit() == Visit::Internal {
                    dom::set_style(&self.screen, "display", "none")?;
                } else {
                    tracing::info!(
                        lines = self.seq.lines_emitted(),
                        elapsed_ms = self.started.elapsed().as_millis() as u64,
                        "boot: sequence finished"
                    );
                }
                self.screen.remove();
            }
        }
        Ok(())
    }
}
