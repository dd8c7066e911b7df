//! Attach failures and the policy for reporting them.
//!
//! Kept outside the wasm-only `web` module so the skip/fail policy can be
//! unit-tested on the host.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FxError {
    #[error("no global window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("anchor `{0}` not found")]
    MissingAnchor(&'static str),
    #[error("anchor `{anchor}` is not a {expected}")]
    WrongElement {
        anchor: &'static str,
        expected: &'static str,
    },
    #[error("disabled: {0}")]
    Disabled(&'static str),
    #[error("canvas: {0}")]
    Canvas(&'static str),
    /// The element is not in the document right now.
    #[error("`{0}` is detached from the document")]
    Detached(&'static str),
    #[error("js exception: {0}")]
    Js(String),
}

/// How the attach loop should report a component that didn't come up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Expected on some pages or devices; not worth more than a debug line.
    Skipped,
    /// Something in the browser went wrong.
    Failed,
}

impl FxError {
    pub fn severity(&self) -> Severity {
        match self {
            FxError::MissingAnchor(_) | FxError::Disabled(_) | FxError::Detached(_) => {
                Severity::Skipped
            }
            FxError::NoWindow
            | FxError::NoDocument
            | FxError::WrongElement { .. }
            | FxError::Canvas(_)
            | FxError::Js(_) => Severity::Failed,
        }
    }

    /// Whether a per-frame failure should end a page-lifetime animation.
    /// A detached element may be re-inserted, so its frames are only skipped.
    pub fn stops_animation(&self) -> bool {
        !matches!(self, FxError::Detached(_))
    }
}

/// Run `bind` on every item, logging and skipping the ones that fail so one
/// bad element doesn't disable the rest. Returns how many were bound.
pub fn bind_each<T>(
    component: &'static str,
    items: impl IntoIterator<Item = T>,
    mut bind: impl FnMut(T) -> Result<(), FxError>,
) -> usize {
    let mut bound = 0;
    for item in items {
        match bind(item) {
            Ok(()) => bound += 1,
            Err(e) => tracing::warn!(component, error = %e, "element skipped"),
        }
    }
    bound
}
