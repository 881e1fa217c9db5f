//! Browser signals that decide whether the hero is on screen and in focus.

use crate::dom::{document_focused, js_err, EventListener};
use hero_core::SceneConfig;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone, Copy, Debug)]
pub enum ActivitySignal {
    Intersection(bool),
    Focus { has_focus: bool, hidden: bool },
}

/// Owns the intersection observer and the focus listeners; dropping it
/// unobserves and removes them.
pub struct ActivityWatcher {
    observer: web::IntersectionObserver,
    target: web::Element,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
    _listeners: Vec<EventListener>,
}

impl ActivityWatcher {
    pub fn attach(
        window: &web::Window,
        document: &web::Document,
        target: &web::Element,
        config: &SceneConfig,
        on_signal: Rc<dyn Fn(ActivitySignal)>,
    ) -> anyhow::Result<Self> {
        let on_intersect = on_signal.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                // The last entry is the most recent state of the container.
                let last = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .last();
                if let Some(entry) = last {
                    on_intersect(ActivitySignal::Intersection(entry.is_intersecting()));
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let options = web::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.0));
        options.set_root_margin(&config.root_margin);
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_err)?;
        observer.observe(target);

        // `blur` fires before the document reports losing focus, so the event
        // kind decides focus for window events.
        let win: &web::EventTarget = window;
        let doc_target: &web::EventTarget = document;
        let sources = [
            (win, "focus", Some(true)),
            (win, "blur", Some(false)),
            (doc_target, "visibilitychange", None),
        ];
        let mut listeners = Vec::with_capacity(sources.len());
        for (source, kind, focus_override) in sources {
            let doc = document.clone();
            let on_focus = on_signal.clone();
            listeners.push(EventListener::new(source, kind, move |_| {
                let (focused, hidden) = document_focused(&doc);
                let has_focus = focus_override.unwrap_or(focused);
                on_focus(ActivitySignal::Focus { has_focus, hidden });
            })?);
        }

        log::info!("[activity] observing #{}", config.container_id);
        Ok(Self {
            observer,
            target: target.clone(),
            _callback: callback,
            _listeners: listeners,
        })
    }
}

impl Drop for ActivityWatcher {
    fn drop(&mut self) {
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}
