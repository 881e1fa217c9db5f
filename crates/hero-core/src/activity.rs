//! Scene activity: whether the hero should simulate and render.
//!
//! Two signals feed it. The page focus/visibility state is sampled on mount
//! and updated by focus change events; the intersection observer reports
//! whether the hero container is still above the fold. Until the observer has
//! reported, the mount-time focus sample is the whole answer. The first
//! observer report replaces that sample; from then on only focus *events*
//! can veto an intersecting hero.

/// Render loop scheduling, named after the modes it toggles between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameLoop {
    Always,
    Never,
}

#[derive(Clone, Copy, Debug)]
pub struct SceneActivity {
    intersecting: Option<bool>,
    page_focused: bool,
    focus_from_event: bool,
}

impl SceneActivity {
    /// Mount-time default: the document has focus and is not hidden.
    pub fn on_mount(has_focus: bool, hidden: bool) -> Self {
        Self {
            intersecting: None,
            page_focused: has_focus && !hidden,
            focus_from_event: false,
        }
    }

    /// Intersection observer callback. Authoritative once attached.
    pub fn on_intersection(&mut self, is_intersecting: bool) {
        self.intersecting = Some(is_intersecting);
    }

    /// `blur`/`focus`/`visibilitychange` after mount.
    pub fn on_focus_change(&mut self, has_focus: bool, hidden: bool) {
        self.page_focused = has_focus && !hidden;
        self.focus_from_event = true;
    }

    pub fn is_active(&self) -> bool {
        match self.intersecting {
            None => self.page_focused,
            Some(intersecting) => intersecting && (self.page_focused || !self.focus_from_event),
        }
    }

    #[inline]
    pub fn paused(&self) -> bool {
        !self.is_active()
    }

    pub fn frame_loop(&self) -> FrameLoop {
        if self.is_active() {
            FrameLoop::Always
        } else {
            FrameLoop::Never
        }
    }

    /// Target canvas opacity; the css transition animates toward it.
    pub fn canvas_opacity(&self) -> f32 {
        if self.is_active() {
            1.0
        } else {
            0.0
        }
    }
}
