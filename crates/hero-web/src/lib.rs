#![cfg(target_arch = "wasm32")]
//! Browser shell for the hero page: navigation bar, smooth scrolling and the
//! WebGPU hero scene. Everything mounts from `start` and unmounts through
//! `unmount`.

mod activity;
mod assets;
mod dom;
mod frame;
mod input;
mod nav;
mod raf;
mod render;
mod scroll;

use dom::{element_by_id, sync_canvas_backing_size, window_document};
use frame::HeroHandle;
use hero_core::{MeshKey, SceneConfig, ScrollOptions};
use nav::NavBar;
use rand::rngs::StdRng;
use rand::SeedableRng;
use render::GpuState;
use scroll::ScrollDriver;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Mounted page pieces; dropping one tears it down.
#[allow(dead_code)] // held for their Drop
struct App {
    hero: Option<HeroHandle>,
    nav: Option<NavBar>,
    scroll: Option<ScrollDriver>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear everything down: listeners, observers and animation frames.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("hero-web unmounted");
    }
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let config = SceneConfig::default();

    let scroll = match ScrollDriver::mount(&window, &document, ScrollOptions::default()) {
        Ok(driver) => Some(driver),
        Err(e) => {
            log::error!("[scroll] mount failed: {:?}", e);
            None
        }
    };

    let nav = element_by_id::<web::Element>(&document, &config.nav_id).and_then(|root| {
        NavBar::render(&window, &document, root, scroll.as_ref().map(|s| s.handle()))
    });
    let nav = match nav {
        Ok(nav) => Some(nav),
        Err(e) => {
            log::error!("[nav] render failed: {:?}", e);
            None
        }
    };
    if let Some(driver) = &scroll {
        driver.refresh(&window, &document);
    }

    // Keep nav and scroll alive even if the hero fails to mount below.
    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            hero: None,
            nav,
            scroll,
        })
    });

    let canvas: web::HtmlCanvasElement = element_by_id(&document, &config.canvas_id)?;
    sync_canvas_backing_size(&canvas);
    let gpu = match GpuState::new(&canvas).await {
        Ok(mut gpu) => {
            for (asset, mesh) in assets::load_all(&window, &config).await {
                gpu.upload_mesh(MeshKey::Model(asset), &mesh);
            }
            Some(gpu)
        }
        Err(e) => {
            log::error!("[render] WebGPU unavailable, hero runs without drawing: {:?}", e);
            None
        }
    };

    let mut rng = StdRng::from_entropy();
    let hero = HeroHandle::mount(&window, &document, &config, gpu, &mut rng)?;
    log::info!("[hero] running: {}", hero.is_running());
    APP.with(|slot| {
        if let Some(app) = slot.borrow_mut().as_mut() {
            app.hero = Some(hero);
        }
    });
    Ok(())
}
