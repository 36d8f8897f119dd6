//! Certificate image lightbox.
//!
//! Single instance (`#certModal` with `#modalImage`). Opening while open just
//! swaps the image. Page scroll is disabled while it is shown.

use crate::dom::{self, Elements};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const OPEN_CLASS: &str = "active";

pub fn open(els: &Elements, src: &str) {
    let (Some(modal), Some(image)) = (&els.modal, &els.modal_image) else {
        return;
    };
    image.set_src(src);
    dom::add_class(modal, OPEN_CLASS);
    dom::set_style(modal, "display", "flex");
    if let Some(body) = &els.body {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

pub fn close(els: &Elements) {
    let Some(modal) = &els.modal else {
        return;
    };
    dom::remove_class(modal, OPEN_CLASS);
    dom::set_style(modal, "display", "none");
    if let Some(body) = &els.body {
        let _ = body.style().remove_property("overflow");
    }
}

pub fn is_open(els: &Elements) -> bool {
    els.modal
        .as_ref()
        .map(|m| dom::has_class(m, OPEN_CLASS))
        .unwrap_or(false)
}

/// Close on the close control, on backdrop clicks, and on Escape / dialog cancel.
pub fn bind(els: &Elements) {
    let Some(modal) = &els.modal else {
        return;
    };

    if let Some(close_btn) = &els.modal_close {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            close(&els2);
        }) as Box<dyn FnMut(_)>);
        let _ = close_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    // Backdrop: the click lands on the modal itself, not on the image.
    {
        let els2 = els.clone();
        let modal2 = modal.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let on_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .map(|t| t == modal2)
                .unwrap_or(false);
            if on_backdrop {
                close(&els2);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = modal.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            if e.key() == "Escape" && is_open(&els2) {
                close(&els2);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = dom::document().add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    // <dialog> fires `cancel` on Escape before closing itself.
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            close(&els2);
        }) as Box<dyn FnMut(_)>);
        let _ = modal.add_event_listener_with_callback("cancel", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}
