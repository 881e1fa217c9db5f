//! Wires the eased scroller to the window: wheel input, its own rAF loop and
//! write-back of the eased position to the native scroll offset.

use crate::dom::{js_err, EventListener};
use crate::raf::RafLoop;
use hero_core::{ScrollOptions, SmoothScroll};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn scroll_limit(window: &web::Window, document: &web::Document) -> f64 {
    let content = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (content - viewport).max(0.0)
}

fn native_scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub struct ScrollDriver {
    smooth: Rc<RefCell<SmoothScroll>>,
    raf: RafLoop,
    _listeners: Vec<EventListener>,
}

impl ScrollDriver {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        options: ScrollOptions,
    ) -> anyhow::Result<Self> {
        let smooth = Rc::new(RefCell::new(SmoothScroll::new(
            options,
            native_scroll_y(window),
            scroll_limit(window, document),
        )));

        let win_raf = window.clone();
        let smooth_raf = smooth.clone();
        let raf = RafLoop::new(move |time_ms| {
            let next = smooth_raf.borrow_mut().raf(time_ms);
            if let Some(y) = next {
                win_raf.scroll_to_with_x_and_y(0.0, y);
            }
        });

        let mut listeners = Vec::with_capacity(3);
        let smooth_wheel = smooth.clone();
        listeners.push(EventListener::active(window, "wheel", move |ev| {
            let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            if wheel.ctrl_key() {
                // pinch zoom
                return;
            }
            ev.prevent_default();
            smooth_wheel.borrow_mut().on_wheel(wheel.delta_y());
        })?);

        let win_scroll = window.clone();
        let smooth_scroll = smooth.clone();
        listeners.push(EventListener::new(window, "scroll", move |_| {
            if let Ok(mut s) = smooth_scroll.try_borrow_mut() {
                s.sync(native_scroll_y(&win_scroll));
            }
        })?);

        let win_resize = window.clone();
        let doc_resize = document.clone();
        let smooth_resize = smooth.clone();
        listeners.push(EventListener::new(window, "resize", move |_| {
            smooth_resize
                .borrow_mut()
                .set_limit(scroll_limit(&win_resize, &doc_resize));
        })?);

        raf.start();
        log::info!(
            "[scroll] smooth scrolling on, limit {:.0}px",
            smooth.borrow().limit()
        );
        Ok(Self {
            smooth,
            raf,
            _listeners: listeners,
        })
    }

    /// Re-measure the document, e.g. after content was inserted.
    pub fn refresh(&self, window: &web::Window, document: &web::Document) {
        self.smooth
            .borrow_mut()
            .set_limit(scroll_limit(window, document));
    }

    /// Shared scroller for callers that start their own eased scrolls.
    pub fn handle(&self) -> Rc<RefCell<SmoothScroll>> {
        self.smooth.clone()
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        self.raf.stop();
        log::info!("[scroll] smooth scrolling off");
    }
}

/// In-page `#anchor` links scroll smoothly to their target.
pub fn anchor_target_y(
    window: &web::Window,
    document: &web::Document,
    href: &str,
) -> anyhow::Result<Option<f64>> {
    let Some(id) = href.strip_prefix('#') else {
        return Ok(None);
    };
    if id.is_empty() {
        return Ok(Some(0.0));
    }
    let Some(el) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    let top = el.get_bounding_client_rect().top();
    let y = window.scroll_y().map_err(js_err)? + top;
    Ok(Some(y))
}
