//! requestAnimationFrame loop that can be paused, resumed and cancelled.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct RafLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

fn request(tick: &Tick, handle: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => log::error!("[raf] request failed: {:?}", e),
        }
    }
}

impl RafLoop {
    /// Wrap `frame`, which receives the rAF timestamp in milliseconds. The
    /// loop starts stopped.
    pub fn new(mut frame: impl FnMut(f64) + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(false));

        let tick_next = Rc::downgrade(&tick);
        let handle_tick = handle.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |time: f64| {
            handle_tick.set(None);
            if !running_tick.get() {
                return;
            }
            frame(time);
            if running_tick.get() && handle_tick.get().is_none() {
                if let Some(tick) = tick_next.upgrade() {
                    request(&tick, &handle_tick);
                }
            }
        }) as Box<dyn FnMut(f64)>));

        Self {
            tick,
            handle,
            running,
        }
    }

    pub fn start(&self) {
        self.running.set(true);
        if self.handle.get().is_none() {
            request(&self.tick, &self.handle);
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        self.tick.borrow_mut().take();
    }
}
