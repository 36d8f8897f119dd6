//! Filter buttons and sort select for the certificate gallery.

use crate::certificates;
use crate::dom;
use crate::state::App;
use pf_content::{Filter, SortKey};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub fn set_filter(app: &Rc<App>, filter: Filter) {
    let mut view = app.view();
    view.filter = filter;
    app.set_view(view);
    certificates::rerender(app);
}

pub fn set_sort(app: &Rc<App>, sort: SortKey) {
    let mut view = app.view();
    view.sort = sort;
    app.set_view(view);
    certificates::rerender(app);
}

/// Wire `.filter-btn[data-filter]` clicks and `#sortSelect` changes.
pub fn bind_controls(app: &Rc<App>) {
    for btn in &app.els.filter_buttons {
        let selector = btn.get_attribute("data-filter").unwrap_or_default();
        let app2 = app.clone();
        let btn2 = btn.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            for other in &app2.els.filter_buttons {
                dom::remove_class(other, "active");
            }
            dom::add_class(&btn2, "active");
            set_filter(&app2, Filter::from_selector(&selector));
        }) as Box<dyn FnMut(_)>);
        let _ = btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    if let Some(select) = &app.els.sort_select {
        let app2 = app.clone();
        let select2 = select.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            set_sort(&app2, SortKey::from_selector(&select2.value()));
        }) as Box<dyn FnMut(_)>);
        let _ = select.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}
