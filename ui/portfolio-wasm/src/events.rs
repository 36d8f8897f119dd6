//! Event binding.
//!
//! Wires the listeners that exist from page load. Listeners for the
//! certificate controls are attached later, once records arrive
//! (see `certificates::show_certificates`).

use crate::contact;
use crate::nav;
use crate::state::App;
use crate::theme;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Helper: attach sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        let _ = $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }};
}

/// Bind all page-load listeners. Call once after init.
pub fn bind_events(app: &Rc<App>) {
    // ── Theme ──
    if let Some(toggle) = &app.els.theme_toggle {
        let app2 = app.clone();
        on_click!(toggle, move |_: web_sys::MouseEvent| {
            theme::toggle(&app2);
        });
    }

    // ── Navigation ──
    nav::bind(&app.els, app.config.nav.header_offset);

    // ── Contact ──
    if let Some(form) = &app.els.contact_form {
        contact::bind(form, &app.config.contact);
    }
}
