use hero_core::{Breakpoint, CANVAS_FADE_TRANSITION};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{id} has the wrong element type: {:?}", e))
}

/// Keep the canvas backing store at css size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Css aspect ratio of the canvas; 1 while it has no layout.
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    if rect.width() > 0.0 && rect.height() > 0.0 {
        (rect.width() / rect.height()) as f32
    } else {
        1.0
    }
}

pub fn current_breakpoint(window: &web::Window, media_query: &str) -> Breakpoint {
    match window.match_media(media_query) {
        Ok(Some(mql)) => Breakpoint::from_media_match(mql.matches()),
        _ => {
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(f64::MAX);
            Breakpoint::from_css_width(width)
        }
    }
}

pub fn prepare_canvas_fade(canvas: &web::HtmlCanvasElement) {
    let style = canvas.style();
    let _ = style.set_property("transition", CANVAS_FADE_TRANSITION);
    let _ = style.set_property("opacity", "0");
}

pub fn set_canvas_opacity(canvas: &web::HtmlCanvasElement, opacity: f32) {
    let _ = canvas.style().set_property("opacity", &opacity.to_string());
}

pub fn document_focused(document: &web::Document) -> (bool, bool) {
    (document.has_focus().unwrap_or(false), document.hidden())
}

/// A DOM listener that is removed again when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    /// Registered with `passive: false` so the handler may call `prevent_default`.
    pub fn active(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
