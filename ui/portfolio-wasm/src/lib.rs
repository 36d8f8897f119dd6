//! Portfolio site frontend.
//!
//! Pure Rust + WASM page script: theme switching, particle background,
//! navigation, scroll reveal, GitHub and certificate panels, lightbox and
//! contact form. Each concern lives in its own module; data handling that
//! does not need the DOM lives in `pf-content`.

pub mod ambient;
pub mod api;
pub mod catalog;
pub mod certificates;
pub mod config;
pub mod contact;
pub mod dom;
pub mod events;
pub mod modal;
pub mod nav;
pub mod projects;
pub mod render;
pub mod reveal;
pub mod state;
pub mod theme;

use state::App;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    dom::ready().await;
    init()?;
    Ok(())
}

/// Synchronous setup, then the independent network loads.
pub fn init() -> Result<Rc<App>, JsValue> {
    let els = dom::Elements::bind()?;
    let app = App::new(els, config::load());
    state::install(app.clone());

    reveal::install_styles();
    theme::init(&app);
    nav::highlight_active_link(&app.els);
    events::bind_events(&app);
    if let Some(reveal) = &app.reveal {
        reveal.observe_all();
    }

    {
        let app2 = app.clone();
        spawn_local(async move {
            let theme = app2.theme();
            app2.ambient.start(theme).await;
        });
    }
    spawn_local(projects::load_projects(app.clone()));
    spawn_local(certificates::load_settings(app.clone()));
    spawn_local(certificates::load_certificates(app.clone()));

    Ok(app)
}
