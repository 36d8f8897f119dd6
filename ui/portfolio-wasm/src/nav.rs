//! Navigation: mobile menu, active link, smooth anchor scrolling.

use crate::dom::{self, Elements};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement, ScrollBehavior, ScrollToOptions};

const OPEN_CLASS: &str = "active";
pub const ACTIVE_LINK_CLASS: &str = "active";

pub fn set_menu_open(els: &Elements, open: bool) {
    for el in [&els.hamburger, &els.nav_menu].into_iter().flatten() {
        dom::toggle_class(el, OPEN_CLASS, open);
    }
}

pub fn is_menu_open(els: &Elements) -> bool {
    els.nav_menu
        .as_ref()
        .map(|m| dom::has_class(m, OPEN_CLASS))
        .unwrap_or(false)
}

/// Mark nav links whose resolved href is exactly the current location.
pub fn highlight_active_link(els: &Elements) {
    let Ok(current) = dom::window().location().href() else {
        return;
    };
    for link in &els.nav_links {
        if let Some(a) = link.dyn_ref::<HtmlAnchorElement>() {
            if a.href() == current {
                dom::add_class(link, ACTIVE_LINK_CLASS);
            }
        }
    }
}

/// Scroll so `target` sits just below the fixed header.
pub fn scroll_to(target: &web_sys::Element, header_offset: f64) {
    let top = target
        .dyn_ref::<HtmlElement>()
        .map(|h| h.offset_top() as f64)
        .unwrap_or(0.0);
    let opts = ScrollToOptions::new();
    opts.set_top(top - header_offset);
    opts.set_behavior(ScrollBehavior::Smooth);
    dom::window().scroll_to_with_scroll_to_options(&opts);
}

pub fn bind(els: &Elements, header_offset: f64) {
    if let Some(hamburger) = &els.hamburger {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let open = !is_menu_open(&els2);
            set_menu_open(&els2, open);
        }) as Box<dyn FnMut(_)>);
        let _ = hamburger.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    for link in &els.nav_links {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            set_menu_open(&els2, false);
        }) as Box<dyn FnMut(_)>);
        let _ = link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    for anchor in &els.anchor_links {
        let anchor2 = anchor.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let target_id = anchor2.get_attribute("href").unwrap_or_default();
            if target_id == "#" {
                return;
            }
            if let Some(target) = dom::query(&target_id) {
                scroll_to(&target, header_offset);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = anchor.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}
