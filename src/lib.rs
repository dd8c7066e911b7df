//! DOM-free core of the landing-site effects.
//!
//! Every component's state machine and geometry lives here so it can be
//! unit-tested on the host. The browser bindings are in `crates/circuitfx_web`.

#[path = "core/anchors.rs"]
pub mod anchors;

#[path = "core/boot.rs"]
pub mod boot;

#[path = "core/circuit.rs"]
pub mod circuit;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/css.rs"]
pub mod css;

#[path = "core/cursor.rs"]
pub mod cursor;

#[path = "core/drawer.rs"]
pub mod drawer;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/scramble.rs"]
pub mod scramble;

#[path = "core/scroll.rs"]
pub mod scroll;

#[path = "core/smooth.rs"]
pub mod smooth;

#[path = "core/tilt.rs"]
pub mod tilt;

pub use config::EffectsConfig;
pub use prng::Prng;
