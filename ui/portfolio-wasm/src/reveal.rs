//! Scroll-triggered fade-in.
//!
//! Cards start hidden (see `REVEAL_CSS`) and get the revealed class the first
//! time enough of them is visible. Revealed elements are unobserved, so the
//! transition is one-way.

use crate::dom;
use pf_content::config::RevealConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const STYLE_ID: &str = "reveal-styles";

const REVEAL_CSS: &str = r#"
    .intro-card, .project-card, .interest-card, .gallery-item, .certificate-card {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.6s, transform 0.6s;
    }

    .fade-in {
        opacity: 1;
        transform: translateY(0);
    }

    .project-meta {
        display: flex;
        justify-content: space-between;
        margin-bottom: 1rem;
        font-size: 0.9rem;
        color: var(--muted);
    }

    [data-image] {
        cursor: pointer;
    }

    .language, .stars {
        display: flex;
        align-items: center;
        gap: 0.3rem;
    }
"#;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct RevealController {
    observer: IntersectionObserver,
    selector: String,
    _callback: ObserverCallback,
}

impl RevealController {
    /// `None` when the browser has no IntersectionObserver; cards then stay
    /// as the stylesheet leaves them.
    pub fn new(config: &RevealConfig) -> Option<RevealController> {
        let revealed = config.revealed_class.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        dom::add_class(&target, &revealed);
                        observer.unobserve(&target);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let opts = IntersectionObserverInit::new();
        opts.set_threshold(&JsValue::from_f64(config.threshold));
        opts.set_root_margin(&config.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
                .map_err(|e| gloo_console::warn!("IntersectionObserver unavailable", e))
                .ok()?;

        Some(RevealController {
            observer,
            selector: config.selector.clone(),
            _callback: callback,
        })
    }

    /// Observe every matching element currently in the document.
    pub fn observe_all(&self) {
        for el in dom::query_all(&self.selector) {
            self.observer.observe(&el);
        }
    }

    /// Observe matching elements inside `container`, e.g. freshly rendered cards.
    pub fn observe_within(&self, container: &Element) {
        for el in dom::query_all_within(container, &self.selector) {
            self.observer.observe(&el);
        }
    }
}

/// Inject the reveal stylesheet once.
pub fn install_styles() {
    if dom::by_id(STYLE_ID).is_some() {
        return;
    }
    let Some(head) = dom::document().head() else {
        return;
    };
    if let Ok(style) = dom::create_element("style") {
        style.set_id(STYLE_ID);
        dom::set_text(&style, REVEAL_CSS);
        let _ = head.append_child(&style);
    }
}
