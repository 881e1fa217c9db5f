//! Renders the static link table into the top navigation element.

use crate::dom::{js_err, EventListener};
use crate::scroll::anchor_target_y;
use hero_core::nav::{
    is_external, NavLink, LINKS, NAV_CONNECT_LABEL, NAV_LOGO_ALT, NAV_LOGO_SIZE_PX, NAV_LOGO_SRC,
};
use hero_core::SmoothScroll;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn anchor(
    document: &web::Document,
    text: &str,
    href: &str,
    analytics: &str,
) -> anyhow::Result<web::Element> {
    let a = document.create_element("a").map_err(js_err)?;
    a.set_attribute("href", href).map_err(js_err)?;
    a.set_attribute("data-analytics", analytics).map_err(js_err)?;
    if is_external(href) {
        a.set_attribute("target", "_blank").map_err(js_err)?;
        a.set_attribute("rel", "noopener noreferrer").map_err(js_err)?;
    }
    a.set_text_content(Some(text));
    Ok(a)
}

fn logo_link(document: &web::Document) -> anyhow::Result<web::Element> {
    let a = document.create_element("a").map_err(js_err)?;
    a.set_attribute("href", "/").map_err(js_err)?;
    a.set_class_name("nav-logo");
    let img = document.create_element("img").map_err(js_err)?;
    let size = NAV_LOGO_SIZE_PX.to_string();
    img.set_attribute("src", NAV_LOGO_SRC).map_err(js_err)?;
    img.set_attribute("alt", NAV_LOGO_ALT).map_err(js_err)?;
    img.set_attribute("width", &size).map_err(js_err)?;
    img.set_attribute("height", &size).map_err(js_err)?;
    a.append_child(&img).map_err(js_err)?;
    Ok(a)
}

fn link_group(document: &web::Document, link: &NavLink) -> anyhow::Result<web::Element> {
    let li = document.create_element("li").map_err(js_err)?;
    li.set_class_name("nav-group");
    li.append_child(&anchor(document, link.name, link.href, link.analytics)?)
        .map_err(js_err)?;
    let sub = document.create_element("ul").map_err(js_err)?;
    sub.set_class_name("nav-sub");
    for item in link.sub_items {
        let sub_li = document.create_element("li").map_err(js_err)?;
        sub_li
            .append_child(&anchor(document, item.name, item.href, link.analytics)?)
            .map_err(js_err)?;
        sub.append_child(&sub_li).map_err(js_err)?;
    }
    li.append_child(&sub).map_err(js_err)?;
    Ok(li)
}

/// The rendered bar. In-page `#` links scroll through the smooth scroller
/// while it is alive.
pub struct NavBar {
    root: web::Element,
    _listeners: Vec<EventListener>,
}

impl NavBar {
    pub fn render(
        window: &web::Window,
        document: &web::Document,
        root: web::Element,
        scroller: Option<Rc<RefCell<SmoothScroll>>>,
    ) -> anyhow::Result<Self> {
        root.set_inner_html("");
        root.append_child(&logo_link(document)?).map_err(js_err)?;

        let list = document.create_element("ul").map_err(js_err)?;
        list.set_class_name("nav-links");
        for link in LINKS.iter() {
            list.append_child(&link_group(document, link)?)
                .map_err(js_err)?;
        }
        root.append_child(&list).map_err(js_err)?;

        let connect = document.create_element("div").map_err(js_err)?;
        connect.set_class_name("nav-connect");
        connect.set_text_content(Some(NAV_CONNECT_LABEL));
        root.append_child(&connect).map_err(js_err)?;

        let mut listeners = Vec::new();
        if let Some(scroller) = scroller {
            let win = window.clone();
            let doc = document.clone();
            listeners.push(EventListener::new(&root, "click", move |ev| {
                let Some(a) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web::Element>().ok())
                    .and_then(|el| el.closest("a").ok().flatten())
                else {
                    return;
                };
                let Some(href) = a.get_attribute("href") else {
                    return;
                };
                match anchor_target_y(&win, &doc, &href) {
                    Ok(Some(y)) => {
                        ev.prevent_default();
                        scroller.borrow_mut().scroll_to(y);
                    }
                    Ok(None) => {}
                    Err(e) => log::warn!("[nav] anchor {href}: {e:?}"),
                }
            })?);
        }

        log::info!("[nav] rendered {} link groups", LINKS.len());
        Ok(Self {
            root,
            _listeners: listeners,
        })
    }

}

impl Drop for NavBar {
    fn drop(&mut self) {
        self.root.set_inner_html("");
    }
}
