//! Eased page scrolling.
//!
//! Wheel deltas move a target; each animation frame eases the visible scroll
//! position from where it stood when the target last changed. The host writes
//! the returned position back to the native scroll offset so scroll-triggered
//! effects elsewhere keep working.

use crate::constants::SCROLL_DURATION_SEC;

/// Exponential ease-out, slightly overshooting 1 so the curve actually lands.
#[inline]
pub fn lenis_easing(t: f64) -> f64 {
    (1.001 - 2f64.powf(-8.0 * t)).min(1.0)
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollOptions {
    /// Seconds from target change to rest.
    pub duration: f64,
    pub easing: fn(f64) -> f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            duration: SCROLL_DURATION_SEC,
            easing: lenis_easing,
        }
    }
}

#[derive(Debug)]
pub struct SmoothScroll {
    options: ScrollOptions,
    current: f64,
    target: f64,
    from: f64,
    limit: f64,
    elapsed: f64,
    animating: bool,
    last_time_ms: Option<f64>,
}

impl SmoothScroll {
    pub fn new(options: ScrollOptions, initial: f64, limit: f64) -> Self {
        let limit = limit.max(0.0);
        let initial = initial.clamp(0.0, limit);
        Self {
            options,
            current: initial,
            target: initial,
            from: initial,
            limit,
            elapsed: 0.0,
            animating: false,
            last_time_ms: None,
        }
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }
        self.scroll_to(self.target + delta_y);
    }

    /// Start an eased animation toward `target`, clamped to the scroll range.
    pub fn scroll_to(&mut self, target: f64) {
        let target = target.clamp(0.0, self.limit);
        if target == self.target && self.animating {
            return;
        }
        self.from = self.current;
        self.target = target;
        self.elapsed = 0.0;
        self.animating = self.from != self.target;
    }

    /// Scrollable height changed (content or viewport resize).
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.current = self.current.min(self.limit);
        if self.target > self.limit {
            self.scroll_to(self.limit);
        }
    }

    /// Adopt a native scroll position (scrollbar, keyboard) while idle.
    pub fn sync(&mut self, actual: f64) {
        if self.animating {
            return;
        }
        let actual = actual.clamp(0.0, self.limit);
        self.current = actual;
        self.target = actual;
        self.from = actual;
    }

    /// One animation frame at `time_ms` (rAF timestamp). Returns the position
    /// to write back while an animation is running.
    pub fn raf(&mut self, time_ms: f64) -> Option<f64> {
        let dt = match self.last_time_ms.replace(time_ms) {
            Some(prev) => ((time_ms - prev) / 1000.0).max(0.0),
            None => 0.0,
        };
        if !self.animating {
            return None;
        }
        self.elapsed += dt;
        let progress = if self.options.duration > 0.0 {
            (self.elapsed / self.options.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            self.current = self.target;
            self.animating = false;
            log::debug!("[scroll] settled at {:.1}", self.current);
        } else {
            let eased = (self.options.easing)(progress);
            self.current = self.from + (self.target - self.from) * eased;
        }
        Some(self.current)
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }
}
