//! DOM contract shared with the static pages.
//!
//! Ids, selectors, classes and data attributes the effects look up. A page that
//! lacks an anchor simply doesn't get that effect.

pub const BOOT_SCREEN_ID: &str = "boot-screen";
pub const BOOT_LOG_ID: &str = "boot-log";
pub const BOOT_BAR_ID: &str = "boot-bar";
pub const BOOT_LINE_CLASS: &str = "boot-line";

pub const CIRCUIT_CANVAS_ID: &str = "circuit-canvas";

pub const CURSOR_ID: &str = "cursor";
pub const HOVER_TARGETS_SELECTOR: &str = ".hover-trigger, a, button, input, select";
pub const CURSOR_HOVERED_CLASS: &str = "hovered";

pub const TILT_CARD_SELECTOR: &str = ".tilt-card";

pub const SCRAMBLE_SELECTOR: &str = "[data-scramble]";
pub const SCRAMBLE_ATTR: &str = "data-scramble";

pub const REVEAL_SELECTOR: &str = ".reveal-on-scroll";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const SECTION_SELECTOR: &str = ".section";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_SECTION_ATTR: &str = "data-section";
pub const NAV_ACTIVE_CLASS: &str = "active";

pub const MOBILE_MENU_BUTTON_ID: &str = "mobile-menu-btn";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_MENU_CLOSE_ID: &str = "mobile-menu-close";
pub const MOBILE_NAV_LINK_SELECTOR: &str = ".mobile-nav-link";
pub const DRAWER_HIDDEN_CLASS: &str = "translate-x-full";

/// Wheel events inside a matching element keep native scrolling.
pub const NATIVE_SCROLL_SELECTOR: &str = "[data-native-scroll]";

pub const CONFIG_SCRIPT_ID: &str = "fx-config";

pub const FINE_POINTER_QUERY: &str = "(pointer:fine)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_bare_and_selectors_are_selectors() {
        for id in [
            BOOT_SCREEN_ID,
            BOOT_LOG_ID,
            BOOT_BAR_ID,
            CIRCUIT_CANVAS_ID,
            CURSOR_ID,
            MOBILE_MENU_BUTTON_ID,
            MOBILE_MENU_ID,
            MOBILE_MENU_CLOSE_ID,
            CONFIG_SCRIPT_ID,
        ] {
            assert!(!id.is_empty());
            assert!(!id.starts_with('#') && !id.starts_with('.'));
        }

        for sel in [
            TILT_CARD_SELECTOR,
            REVEAL_SELECTOR,
            SECTION_SELECTOR,
            NAV_LINK_SELECTOR,
            MOBILE_NAV_LINK_SELECTOR,
        ] {
            assert!(sel.starts_with('.'));
        }

        assert_eq!(SCRAMBLE_SELECTOR, format!("[{SCRAMBLE_ATTR}]"));
    }

    #[test]
    fn hover_targets_include_native_interactive_elements() {
        let parts: Vec<&str> = HOVER_TARGETS_SELECTOR.split(',').map(str::trim).collect();
        for want in [".hover-trigger", "a", "button", "input", "select"] {
            assert!(parts.contains(&want), "missing {want}");
        }
    }
}
