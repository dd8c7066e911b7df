//! Eased wheel scrolling.
//!
//! Wheel deltas move a target offset; each animation frame the current offset
//! closes a fixed fraction of the gap (scaled for the real frame time) until it
//! is within half a pixel, then snaps and goes idle.

/// Remaining distance, in px, below which the scroll snaps to its target.
pub const SETTLE_PX: f64 = 0.5;

/// Difference from the last applied offset below which `sync` assumes the
/// page is where we left it.
pub const SYNC_TOLERANCE_PX: f64 = 1.0;

const REFERENCE_FPS: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    lerp: f64,
    current: f64,
    target: f64,
    animating: bool,
}

impl SmoothScroll {
    pub fn new(lerp: f64) -> Self {
        Self {
            lerp: lerp.clamp(f64::EPSILON, 1.0),
            current: 0.0,
            target: 0.0,
            animating: false,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Adopt an offset that changed behind our back (keyboard, scrollbar,
    /// anchor jump). Ignored mid-animation, where the offset is ours, and
    /// within [`SYNC_TOLERANCE_PX`] of the last applied offset, since the
    /// browser may report a rounded `scrollY`.
    pub fn sync(&mut self, actual: f64) {
        if self.animating || !actual.is_finite() {
            return;
        }
        if (actual - self.current).abs() >= SYNC_TOLERANCE_PX {
            self.current = actual;
            self.target = actual;
        }
    }

    /// Accumulate a wheel delta. `limit` is the maximum scroll offset.
    pub fn wheel(&mut self, delta: f64, limit: f64) {
        if !delta.is_finite() {
            return;
        }
        let limit = limit.max(0.0);
        self.target = (self.target + delta).clamp(0.0, limit);
        // Sub-pixel moves still need one frame so they reach the page.
        self.animating = self.target != self.current;
    }

    /// Advance by `dt` seconds. Returns the offset to apply, or `None` when idle.
    pub fn frame(&mut self, dt: f64) -> Option<f64> {
        if !self.animating {
            return None;
        }
        let dt = if dt.is_finite() && dt > 0.0 {
            dt.min(0.25)
        } else {
            1.0 / REFERENCE_FPS
        };
        let t = 1.0 - (1.0 - self.lerp).powf(dt * REFERENCE_FPS);
        self.current += (self.target - self.current) * t;

        if (self.target - self.current).abs() < SETTLE_PX {
            self.current = self.target;
            self.animating = false;
        }
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn converges_to_target_without_overshoot() {
        let mut s = SmoothScroll::new(0.1);
        s.wheel(400.0, 10_000.0);
        assert!(s.is_animating());

        let mut last = 0.0;
        let mut frames = 0;
        while let Some(y) = s.frame(FRAME) {
            assert!(y >= last, "scroll went backwards");
            assert!(y <= 400.0, "overshoot: {y}");
            last = y;
            frames += 1;
            assert!(frames < 1_000);
        }
        assert_eq!(s.current(), 400.0);
        assert!(!s.is_animating());
        assert!(s.frame(FRAME).is_none());
    }

    #[test]
    fn first_frame_covers_the_lerp_fraction() {
        let mut s = SmoothScroll::new(0.1);
        s.wheel(100.0, 1_000.0);
        let y = s.frame(FRAME).unwrap();
        assert!((y - 10.0).abs() < 1e-9, "y={y}");
    }

    #[test]
    fn target_is_clamped_to_the_scroll_range() {
        let mut s = SmoothScroll::new(0.5);
        s.wheel(5_000.0, 800.0);
        assert_eq!(s.target(), 800.0);
        while s.frame(FRAME).is_some() {}
        assert_eq!(s.current(), 800.0);

        s.wheel(-10_000.0, 800.0);
        assert_eq!(s.target(), 0.0);
    }

    #[test]
    fn slow_frames_catch_up_faster() {
        let mut a = SmoothScroll::new(0.1);
        let mut b = SmoothScroll::new(0.1);
        a.wheel(100.0, 1_000.0);
        b.wheel(100.0, 1_000.0);
        let fast = a.frame(FRAME).unwrap();
        let slow = b.frame(FRAME * 2.0).unwrap();
        assert!(slow > fast);
        // Two 60 fps frames equal one 30 fps frame.
        let two = a.frame(FRAME).unwrap();
        assert!((two - slow).abs() < 1e-9);
    }

    #[test]
    fn sync_only_applies_when_idle() {
        let mut s = SmoothScroll::new(0.1);
        s.sync(300.0);
        assert_eq!(s.current(), 300.0);
        assert_eq!(s.target(), 300.0);

        s.wheel(100.0, 1_000.0);
        s.sync(0.0);
        assert_eq!(s.target(), 400.0);
    }

    #[test]
    fn tiny_deltas_settle_in_one_frame_and_bogus_ones_are_ignored() {
        let mut s = SmoothScroll::new(0.1);
        s.wheel(0.2, 1_000.0);
        assert!(s.is_animating());
        assert_eq!(s.frame(FRAME), Some(0.2));
        assert!(!s.is_animating());

        s.wheel(f64::NAN, 1_000.0);
        assert_eq!(s.target(), 0.2);
        assert!(s.frame(FRAME).is_none());
    }

    /// Replays a slow trackpad gesture the way the wheel handler does:
    /// sync from `scrollY`, add the delta, then drain frames into `scrollTo`.
    fn replay(deltas: &[f64], start: f64, round: fn(f64) -> f64) -> (Vec<f64>, f64) {
        let mut s = SmoothScroll::new(0.1);
        let mut scroll_y = start;
        let mut applied = Vec::new();
        for &d in deltas {
            s.sync(scroll_y);
            s.wheel(d, 10_000.0);
            while let Some(y) = s.frame(FRAME) {
                applied.push(y);
                scroll_y = round(y);
            }
        }
        (applied, scroll_y)
    }

    #[test]
    fn sub_pixel_wheel_deltas_accumulate_into_a_scroll() {
        let deltas = [0.4; 20];

        let (applied, scroll_y) = replay(&deltas, 100.0, |y| y);
        assert!(!applied.is_empty(), "no scrollTo for 8px of wheel input");
        assert!((scroll_y - 108.0).abs() < 1e-9, "scroll_y={scroll_y}");

        // Browsers that report whole-pixel scrollY still get there.
        let (applied, scroll_y) = replay(&deltas, 100.0, f64::floor);
        assert!((applied[applied.len() - 1] - 108.0).abs() < 1e-9);
        assert!(scroll_y >= 107.0, "scroll_y={scroll_y}");
    }

    #[test]
    fn sync_still_follows_real_external_scrolls() {
        let mut s = SmoothScroll::new(0.1);
        s.sync(100.0);
        s.wheel(0.4, 1_000.0);
        while s.frame(FRAME).is_some() {}

        // Rounded report of our own offset: kept.
        s.sync(100.0);
        assert!((s.current() - 100.4).abs() < 1e-9);

        // Keyboard jump: adopted.
        s.sync(640.0);
        assert_eq!(s.current(), 640.0);
        assert_eq!(s.target(), 640.0);
    }
}
