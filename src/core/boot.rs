//! Boot overlay: a fake terminal log shown before the page content.
//!
//! The sequence is an explicit state machine. The browser layer calls
//! [`BootSequence::advance`], performs the returned action, then waits the
//! returned delay before advancing again:
//!
//! ```text
//! Emitting{0} -> .. -> Emitting{n-1} -> Settling -> FadingOut -> Removing -> Removed
//! ```
//!
//! Internal navigation skips straight to `Removing`.

use std::time::Duration;

use crate::config::BootConfig;

/// How the visitor reached this page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// No referrer, or a referrer from another site.
    FirstEntry,
    Reload,
    /// Same-site link, not a reload.
    Internal,
}

impl Visit {
    /// `referrer` is `document.referrer` (may be empty), `page_host` is
    /// `location.host`.
    pub fn classify(is_reload: bool, referrer: &str, page_host: &str) -> Visit {
        if is_reload {
            return Visit::Reload;
        }
        match referrer_host(referrer) {
            Some(host) if !page_host.is_empty() && host.eq_ignore_ascii_case(page_host) => {
                Visit::Internal
            }
            _ => Visit::FirstEntry,
        }
    }

    pub fn shows_boot(self) -> bool {
        !matches!(self, Visit::Internal)
    }
}

/// Authority (`host[:port]`) of an absolute URL, without userinfo.
fn referrer_host(url: &str) -> Option<&str> {
    let (_, rest) = url.trim().split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    (!host.is_empty()).then_some(host)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Emitting { next: usize },
    Settling,
    FadingOut,
    Removing,
    Removed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BootAction {
    /// Append one log line and set the progress bar width.
    AppendLine { text: String, progress_percent: f64 },
    /// Nothing to render; keep the finished log on screen.
    Hold,
    /// Start the opacity transition.
    BeginFade { duration: Duration },
    /// Detach the overlay from the document.
    Remove,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BootStep {
    pub action: BootAction,
    /// Wait before the next `advance`. `None` after the final step.
    pub delay: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct BootSequence {
    lines: Vec<String>,
    line_interval: Duration,
    settle: Duration,
    fade: Duration,
    visit: Visit,
    phase: BootPhase,
    emitted: usize,
}

impl BootSequence {
    pub fn new(cfg: &BootConfig, visit: Visit) -> Self {
        let phase = if !visit.shows_boot() {
            BootPhase::Removing
        } else if cfg.lines.is_empty() {
            BootPhase::Settling
        } else {
            BootPhase::Emitting { next: 0 }
        };
        Self {
            lines: cfg.lines.clone(),
            line_interval: Duration::from_millis(u64::from(cfg.line_interval_ms)),
            settle: Duration::from_millis(u64::from(cfg.settle_ms)),
            fade: Duration::from_millis(u64::from(cfg.fade_ms)),
            visit,
            phase,
            emitted: 0,
        }
    }

    pub fn visit(&self) -> Visit {
        self.visit
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn lines_emitted(&self) -> usize {
        self.emitted
    }

    pub fn is_finished(&self) -> bool {
        self.phase == BootPhase::Removed
    }

    pub fn advance(&mut self) -> Option<BootStep> {
        let (action, delay, next_phase) = match self.phase {
            BootPhase::Emitting { next } => {
                let total = self.lines.len();
                let text = format!("> {}", self.lines[next]);
                let progress_percent = (next + 1) as f64 / total as f64 * 100.0;
                self.emitted += 1;
                let next_phase = if next + 1 < total {
                    BootPhase::Emitting { next: next + 1 }
                } else {
                    BootPhase::Settling
                };
                (
                    BootAction::AppendLine {
                        text,
                        progress_percent,
                    },
                    Some(self.line_interval),
                    next_phase,
                )
            }
            BootPhase::Settling => (BootAction::Hold, Some(self.settle), BootPhase::FadingOut),
            BootPhase::FadingOut => (
                BootAction::BeginFade {
                    duration: self.fade,
                },
                Some(self.fade),
                BootPhase::Removing,
            ),
            BootPhase::Removing => (BootAction::Remove, None, BootPhase::Removed),
            BootPhase::Removed => return None,
        };
        self.phase = next_phase;
        Some(BootStep { action, delay })
    }
}
