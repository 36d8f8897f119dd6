//! DOM element bindings.
//!
//! Every handle the page script uses is resolved once, in `Elements::bind()`,
//! and passed to the controllers. Optional sections are `Option`s / empty
//! vectors: a page without a contact form simply gets no contact behaviour.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AddEventListenerOptions, Document, Element, HtmlElement, HtmlFormElement,
    HtmlImageElement, HtmlSelectElement, NodeList,
};

// ── Helpers ──

fn doc() -> Document {
    gloo_utils::document()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match doc().query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

fn collect(nl: &NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(el) = nl.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            v.push(el);
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    doc().create_element(tag)
}

pub fn set_style(el: &Element, prop: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(prop, value);
    }
}

pub fn document() -> Document {
    doc()
}

/// Resolves once the document has been parsed.
pub async fn ready() {
    if doc().ready_state() != "loading" {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = AddEventListenerOptions::new();
        opts.set_once(true);
        let _ = doc().add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    let _ = JsFuture::from(promise).await;
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

// ── Elements struct ──

/// All DOM element references used by the page script.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    /// `<html>`, carries `data-theme`.
    pub root: Element,
    pub body: Option<HtmlElement>,

    // Theme
    pub theme_toggle: Option<Element>,

    // Navigation
    pub hamburger: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_links: Vec<Element>,
    pub anchor_links: Vec<Element>,

    // Content panels
    pub projects_container: Option<Element>,
    pub certificates_container: Option<Element>,
    pub filter_buttons: Vec<Element>,
    pub sort_select: Option<HtmlSelectElement>,

    // Lightbox
    pub modal: Option<Element>,
    pub modal_image: Option<HtmlImageElement>,
    pub modal_close: Option<Element>,

    // Contact
    pub contact_form: Option<HtmlFormElement>,
}

impl Elements {
    /// Resolve all DOM references. Only a missing document root is an error.
    pub fn bind() -> Result<Elements, JsValue> {
        let document = doc();
        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("missing document element"))?;
        let modal = by_id("certModal");
        let modal_close = modal
            .as_ref()
            .and_then(|m| m.query_selector(".modal-close").ok().flatten());

        Ok(Elements {
            root,
            body: document.body(),

            theme_toggle: by_id("themeToggle"),

            hamburger: query(".hamburger"),
            nav_menu: query(".nav-menu"),
            nav_links: query_all(".nav-link"),
            anchor_links: query_all(r##"a[href^="#"]"##),

            projects_container: by_id("projectsContainer"),
            certificates_container: by_id("certificatesContainer"),
            filter_buttons: query_all(".filter-btn"),
            sort_select: by_id_typed::<HtmlSelectElement>("sortSelect"),

            modal,
            modal_image: by_id_typed::<HtmlImageElement>("modalImage"),
            modal_close,

            contact_form: by_id_typed::<HtmlFormElement>("contactForm"),
        })
    }
}
