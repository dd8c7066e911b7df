//! Tunables for every effect.
//!
//! Defaults reproduce the shipped site. A page can override any subset through
//! an inline JSON block; every section is `#[serde(default)]` so partial
//! documents only touch the keys they name.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::anchors::HOVER_TARGETS_SELECTOR;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(feature = "serde")]
    #[error("config: invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config: {field} out of range ({value})")]
    OutOfRange { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct EffectsConfig {
    pub log_level: String,
    pub boot: BootConfig,
    pub circuit: CircuitConfig,
    pub cursor: CursorConfig,
    pub tilt: TiltConfig,
    pub scramble: ScrambleConfig,
    pub scroll: ScrollConfig,
    pub smooth_scroll: SmoothScrollConfig,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            boot: BootConfig::default(),
            circuit: CircuitConfig::default(),
            cursor: CursorConfig::default(),
            tilt: TiltConfig::default(),
            scramble: ScrambleConfig::default(),
            scroll: ScrollConfig::default(),
            smooth_scroll: SmoothScrollConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BootConfig {
    pub lines: Vec<String>,
    pub line_interval_ms: u32,
    pub settle_ms: u32,
    pub fade_ms: u32,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            lines: [
                "INITIALIZING KERNEL...",
                "LOADING ASSETS...",
                "BYPASSING FIREWALLS...",
                "ESTABLISHING CONNECTION...",
                "ACCESS GRANTED.",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            line_interval_ms: 300,
            settle_ms: 500,
            fade_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CircuitConfig {
    pub node_count: usize,
    /// A node starts active when `random() > initial_active_threshold`.
    pub initial_active_threshold: f64,
    /// Per frame, a node flips when `random() > flicker_threshold`.
    pub flicker_threshold: f64,
    pub node_radius: f64,
    pub trace_width: f64,
    pub trace_color: String,
    pub active_color: String,
    pub inactive_color: String,
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            node_count: 60,
            initial_active_threshold: 0.8,
            flicker_threshold: 0.99,
            node_radius: 3.0,
            trace_width: 1.5,
            trace_color: "#DC2626".to_string(),
            active_color: "#FFFFFF".to_string(),
            inactive_color: "#DC2626".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CursorConfig {
    pub hover_selector: String,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            hover_selector: HOVER_TARGETS_SELECTOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct TiltConfig {
    pub max_degrees: f64,
    pub perspective_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_degrees: 10.0,
            perspective_px: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ScrambleConfig {
    pub tick_ms: u32,
    /// Characters revealed per tick (fractional).
    pub step: f64,
    /// Sample digits and symbols too, not just the 26 letters.
    pub full_alphabet: bool,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            step: 1.0 / 3.0,
            full_alphabet: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ScrollConfig {
    pub reveal_threshold: f64,
    pub nav_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            nav_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SmoothScrollConfig {
    pub enabled: bool,
    /// Fraction of the remaining distance covered per 60 fps frame.
    pub lerp: f64,
    pub wheel_multiplier: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lerp: 0.1,
            wheel_multiplier: 1.0,
        }
    }
}

impl EffectsConfig {
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        let cfg: Self = if raw.is_empty() {
            Self::default()
        } else {
            serde_json::from_str(raw)?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn unit(field: &'static str, v: f64) -> Result<(), ConfigError> {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange {
                    field,
                    value: v.to_string(),
                })
            }
        }
        fn positive(field: &'static str, v: f64) -> Result<(), ConfigError> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange {
                    field,
                    value: v.to_string(),
                })
            }
        }

        unit(
            "circuit.initial_active_threshold",
            self.circuit.initial_active_threshold,
        )?;
        unit("circuit.flicker_threshold", self.circuit.flicker_threshold)?;
        positive("circuit.node_radius", self.circuit.node_radius)?;
        positive("circuit.trace_width", self.circuit.trace_width)?;
        positive("tilt.perspective_px", self.tilt.perspective_px)?;
        if !self.tilt.max_degrees.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "tilt.max_degrees",
                value: self.tilt.max_degrees.to_string(),
            });
        }
        positive("scramble.step", self.scramble.step)?;
        if self.scramble.tick_ms == 0 {
            return Err(ConfigError::OutOfRange {
                field: "scramble.tick_ms",
                value: "0".to_string(),
            });
        }
        unit("scroll.reveal_threshold", self.scroll.reveal_threshold)?;
        unit("scroll.nav_threshold", self.scroll.nav_threshold)?;
        positive("smooth_scroll.lerp", self.smooth_scroll.lerp)?;
        unit("smooth_scroll.lerp", self.smooth_scroll.lerp)?;
        Ok(())
    }

    /// Parsed `log_level`, falling back to `INFO` for unknown names.
    pub fn log_level(&self) -> tracing::Level {
        self.log_level
            .trim()
            .parse::<tracing::Level>()
            .unwrap_or(tracing::Level::INFO)
    }
}
