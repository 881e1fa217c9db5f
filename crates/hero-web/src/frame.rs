//! Mounted hero: owns the scene state, its render loop and every listener
//! that feeds it.

use crate::activity::{ActivitySignal, ActivityWatcher};
use crate::dom::{
    canvas_aspect, current_breakpoint, document_focused, element_by_id, prepare_canvas_fade,
    set_canvas_opacity, sync_canvas_backing_size, EventListener,
};
use crate::input::PointerTracker;
use crate::raf::RafLoop;
use crate::render::GpuState;
use glam::Vec2;
use hero_core::{DrawItem, FrameInput, FrameLoop, HeroScene, SceneActivity, SceneConfig};
use instant::Instant;
use rand::Rng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub struct HeroState {
    scene: HeroScene,
    activity: SceneActivity,
    gpu: Option<GpuState>,
    canvas: web::HtmlCanvasElement,
    /// `None` right after (re)starting, so the first frame steps by zero.
    last_instant: Option<Instant>,
    draws: Vec<DrawItem>,
}

impl HeroState {
    pub fn frame(&mut self, pointer: Vec2) {
        let now = Instant::now();
        let dt = self
            .last_instant
            .map(|prev| (now - prev).as_secs_f32())
            .unwrap_or(0.0);
        self.last_instant = Some(now);

        self.scene.frame(FrameInput {
            dt,
            pointer,
            paused: self.activity.paused(),
        });
        self.scene.draw_list(&mut self.draws);

        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = gpu.render(&self.scene, &self.draws) {
                log::warn!("[render] frame skipped: {:?}", e);
            }
        }
    }

    fn on_resize(&mut self, window: &web::Window, media_query: &str) {
        sync_canvas_backing_size(&self.canvas);
        let breakpoint = current_breakpoint(window, media_query);
        self.scene.resize(canvas_aspect(&self.canvas), breakpoint);
    }
}

/// Push the current activity out to the canvas and the frame loop.
fn apply_activity(state: &RefCell<HeroState>, raf: &RafLoop) {
    let mut st = state.borrow_mut();
    set_canvas_opacity(&st.canvas, st.activity.canvas_opacity());
    match st.activity.frame_loop() {
        FrameLoop::Always => {
            if !raf.is_running() {
                st.last_instant = None;
                raf.start();
                log::info!("[activity] resumed");
            }
        }
        FrameLoop::Never => {
            if raf.is_running() {
                raf.stop();
                log::info!("[activity] paused");
            }
        }
    }
}

/// Drop to unmount: listeners go first, then the loop is cancelled.
pub struct HeroHandle {
    _activity: ActivityWatcher,
    _resize: EventListener,
    _pointer: PointerTracker,
    raf: Rc<RafLoop>,
    state: Rc<RefCell<HeroState>>,
}

impl HeroHandle {
    pub fn mount<R: Rng + ?Sized>(
        window: &web::Window,
        document: &web::Document,
        config: &SceneConfig,
        gpu: Option<GpuState>,
        rng: &mut R,
    ) -> anyhow::Result<Self> {
        let container: web::Element = element_by_id(document, &config.container_id)?;
        let canvas: web::HtmlCanvasElement = element_by_id(document, &config.canvas_id)?;
        prepare_canvas_fade(&canvas);
        sync_canvas_backing_size(&canvas);

        let breakpoint = current_breakpoint(window, &config.narrow_media_query);
        let scene = HeroScene::new(canvas_aspect(&canvas), breakpoint, rng);
        let (has_focus, hidden) = document_focused(document);
        let state = Rc::new(RefCell::new(HeroState {
            scene,
            activity: SceneActivity::on_mount(has_focus, hidden),
            gpu,
            canvas: canvas.clone(),
            last_instant: None,
            draws: Vec::new(),
        }));

        let pointer = PointerTracker::attach(window, &canvas)?;
        let pointer_cell: Rc<Cell<Vec2>> = pointer.shared();
        let state_raf = state.clone();
        let raf = Rc::new(RafLoop::new(move |_time_ms| {
            state_raf.borrow_mut().frame(pointer_cell.get());
        }));

        let state_sig = state.clone();
        let raf_sig = raf.clone();
        let on_signal: Rc<dyn Fn(ActivitySignal)> = Rc::new(move |signal| {
            {
                let mut st = state_sig.borrow_mut();
                match signal {
                    ActivitySignal::Intersection(visible) => st.activity.on_intersection(visible),
                    ActivitySignal::Focus { has_focus, hidden } => {
                        st.activity.on_focus_change(has_focus, hidden)
                    }
                }
            }
            apply_activity(&state_sig, &raf_sig);
        });
        let activity = ActivityWatcher::attach(window, document, &container, config, on_signal)?;

        let state_resize = state.clone();
        let win_resize = window.clone();
        let media_query = config.narrow_media_query.clone();
        let resize = EventListener::new(window, "resize", move |_| {
            state_resize
                .borrow_mut()
                .on_resize(&win_resize, &media_query);
        })?;

        apply_activity(&state, &raf);
        log::info!(
            "[hero] mounted, {}",
            if raf.is_running() { "active" } else { "idle" }
        );

        Ok(Self {
            _activity: activity,
            _resize: resize,
            _pointer: pointer,
            raf,
            state,
        })
    }

    pub fn is_running(&self) -> bool {
        self.raf.is_running()
    }
}

impl Drop for HeroHandle {
    fn drop(&mut self) {
        self.raf.stop();
        if let Ok(st) = self.state.try_borrow() {
            set_canvas_opacity(&st.canvas, 0.0);
        }
        log::info!("[hero] unmounted");
    }
}
