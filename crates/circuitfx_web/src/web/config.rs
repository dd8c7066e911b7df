use circuitfx::anchors::CONFIG_SCRIPT_ID;
use circuitfx::config::{ConfigError, EffectsConfig};

/// Read the optional inline `<script type="application/json" id="fx-config">`.
///
/// Runs before logging is up, so a parse failure is handed back for the
/// caller to report once the console logger exists.
pub(super) fn load() -> (EffectsConfig, Option<ConfigError>) {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|el| el.text_content());

    let Some(raw) = raw else {
        return (EffectsConfig::default(), None);
    };

    match EffectsConfig::from_json(&raw) {
        Ok(cfg) => (cfg, None),
        Err(e) => (EffectsConfig::default(), Some(e)),
    }
}

/// Route `tracing` (via its `log` bridge) to the devtools console.
pub(super) fn init_logging(level: tracing::Level) {
    console_error_panic_hook::set_once();

    let level = match level {
        tracing::Level::TRACE => log::Level::Trace,
        tracing::Level::DEBUG => log::Level::Debug,
        tracing::Level::INFO => log::Level::Info,
        tracing::Level::WARN => log::Level::Warn,
        _ => log::Level::Error,
    };
    // Already initialised if the host page started us twice.
    let _ = console_log::init_with_level(level);
}
