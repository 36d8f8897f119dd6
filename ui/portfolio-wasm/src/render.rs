//! Content renderer.
//!
//! Always a full replace of the container: lists are tens of items, so there
//! is no diffing. After each render the new cards are handed to the reveal
//! observer. Certificate image clicks go through one delegated listener.

use crate::dom;
use crate::reveal::RevealController;
use pf_content::render::{
    NO_CERTIFICATES_HTML, NO_PROJECTS_HTML, cards_html, certificate_card, project_card,
};
use pf_content::{Certificate, RepoRecord};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Called with the image reference of a clicked certificate.
pub type ImageHandler = Rc<dyn Fn(&str)>;

pub fn render_projects(
    container: &Element,
    repos: &[RepoRecord],
    reveal: Option<&RevealController>,
) {
    replace(
        container,
        &cards_html(repos, project_card, NO_PROJECTS_HTML),
        reveal,
    );
}

pub fn render_certificates(
    container: &Element,
    certs: &[Certificate],
    reveal: Option<&RevealController>,
) {
    replace(
        container,
        &cards_html(certs, certificate_card, NO_CERTIFICATES_HTML),
        reveal,
    );
}

fn replace(container: &Element, html: &str, reveal: Option<&RevealController>) {
    dom::set_inner_html(container, html);
    if let Some(reveal) = reveal {
        reveal.observe_within(container);
    }
}

/// One delegated click listener for every `[data-image]` trigger the
/// container will ever hold. Bind once; re-renders need no rewiring.
pub fn bind_image_triggers(container: &Element, handler: ImageHandler) {
    let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        let src = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|t| t.closest("[data-image]").ok().flatten())
            .and_then(|t| t.get_attribute("data-image"))
            .filter(|src| !src.is_empty());
        if let Some(src) = src {
            (*handler)(&src);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = container.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    cb.forget();
}
