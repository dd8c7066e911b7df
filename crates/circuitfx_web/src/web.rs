use circuitfx::Prng;
use wasm_bindgen::prelude::*;

use crate::error::{FxError, Severity};

mod boot;
mod canvas;
mod config;
mod cursor;
mod dom;
mod drawer;
mod sched;
mod scramble;
mod scroll;
mod smooth;
mod tilt;
mod time;

/// Bring up every effect whose markup is on the page.
///
/// Components are independent: one that is missing or fails is reported
/// and the rest still attach.
pub fn start() {
    let (cfg, config_err) = config::load();
    config::init_logging(cfg.log_level());
    if let Some(e) = config_err {
        tracing::warn!(error = %e, "config: falling back to defaults");
    }

    let mut rng = Prng::from_unit_f64(js_sys::Math::random());

    report("boot", boot::attach(&cfg.boot));
    let circuit_rng = Prng::new((u64::from(rng.next_u32()) << 32) | u64::from(rng.next_u32()));
    report("circuit", canvas::attach(&cfg.circuit, circuit_rng));
    report("cursor", cursor::attach(&cfg.cursor));
    report("tilt", tilt::attach(&cfg.tilt));
    report("scramble", scramble::attach(&cfg.scramble, &mut rng));
    report("reveal", scroll::attach_reveal(&cfg.scroll));
    report("nav", scroll::attach_nav(&cfg.scroll));
    report("drawer", drawer::attach());
    report("smooth", smooth::attach(&cfg.smooth_scroll));

    tracing::info!("effects: started");
}

/// Re-scan the page for hover targets, e.g. after injecting content.
#[wasm_bindgen]
pub fn refresh_hover_targets() {
    match cursor::refresh() {
        Ok(n) => tracing::debug!(targets = n, "cursor: hover targets refreshed"),
        Err(e) => tracing::warn!(error = %e, "cursor: refresh failed"),
    }
}

fn report(component: &'static str, result: Result<(), FxError>) {
    match result {
        Ok(()) => tracing::debug!(component, "attached"),
        Err(e) => match e.severity() {
            Severity::Skipped => tracing::debug!(component, reason = %e, "skipped"),
            Severity::Failed => tracing::warn!(component, error = %e, "failed to attach"),
        },
    }
}
