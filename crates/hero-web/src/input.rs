use crate::dom::EventListener;
use glam::Vec2;
use hero_core::normalize_client_point;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn pointer_normalized(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    normalize_client_point(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Latest normalized pointer position over the hero canvas. The listener sits
/// on the window so the rig keeps following while the cursor is over overlays.
pub struct PointerTracker {
    pointer: Rc<Cell<Vec2>>,
    _listener: EventListener,
}

impl PointerTracker {
    pub fn attach(window: &web::Window, canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let pointer = Rc::new(Cell::new(Vec2::ZERO));
        let pointer_ev = pointer.clone();
        let canvas_ev = canvas.clone();
        let listener = EventListener::new(window, "pointermove", move |ev| {
            if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
                pointer_ev.set(pointer_normalized(pe, &canvas_ev));
            }
        })?;
        Ok(Self {
            pointer,
            _listener: listener,
        })
    }

    pub fn shared(&self) -> Rc<Cell<Vec2>> {
        self.pointer.clone()
    }
}
