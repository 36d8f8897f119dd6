//! Certificate gallery and page-text settings, both read from the
//! spreadsheet values API.

use crate::api;
use crate::catalog;
use crate::dom;
use crate::modal;
use crate::render::{self, ImageHandler};
use crate::state::App;
use pf_content::certificate::{SheetValues, parse_certificate_rows};
use pf_content::config::SheetsConfig;
use pf_content::render::fallback_html;
use pf_content::settings::{page_text_updates, parse_settings_rows};
use pf_content::{Certificate, Error};
use std::collections::BTreeMap;
use std::rc::Rc;

async fn fetch_rows(config: &SheetsConfig, range: &str) -> Result<Vec<Vec<String>>, Error> {
    let url = config.values_url(range)?;
    let body = api::get_text(&url).await?;
    Ok(SheetValues::parse(&body)?.rows())
}

pub async fn fetch_certificates(config: &SheetsConfig) -> Result<Vec<Certificate>, Error> {
    let rows = fetch_rows(config, &config.certificates_range).await?;
    Ok(parse_certificate_rows(&rows))
}

pub async fn fetch_settings(config: &SheetsConfig) -> Result<BTreeMap<String, String>, Error> {
    let rows = fetch_rows(config, &config.settings_range).await?;
    Ok(parse_settings_rows(&rows))
}

/// Fetch and render the gallery. Inert when the page has no container.
pub async fn load_certificates(app: Rc<App>) {
    if app.els.certificates_container.is_none() {
        return;
    }
    let outcome = fetch_certificates(&app.config.sheets).await;
    show_certificates(&app, outcome);
}

/// Override static page text from the settings range. Failures keep the
/// text shipped with the page.
pub async fn load_settings(app: Rc<App>) {
    match fetch_settings(&app.config.sheets).await {
        Ok(settings) => apply_settings(&settings),
        Err(Error::MissingConfig(_)) => {}
        Err(e) => gloo_console::warn!("Error fetching page settings:", e.to_string()),
    }
}

pub fn apply_settings(settings: &BTreeMap<String, String>) {
    for (id, text) in page_text_updates(settings) {
        if let Some(el) = dom::by_id(id) {
            dom::set_text(&el, &text);
        }
    }
}

/// Store fetched records and render them, or render the fallback.
/// Filter, sort and lightbox listeners are attached on the first success.
pub fn show_certificates(app: &Rc<App>, outcome: Result<Vec<Certificate>, Error>) {
    let Some(container) = &app.els.certificates_container else {
        return;
    };
    match outcome {
        Ok(certs) => {
            app.set_certificates(certs);
            rerender(app);
            let first = app.with_mut(|s| !std::mem::replace(&mut s.controls_bound, true));
            if first {
                catalog::bind_controls(app);
                modal::bind(&app.els);
                render::bind_image_triggers(container, open_modal_handler(app));
            }
        }
        Err(e) => {
            gloo_console::error!("Error fetching certificates:", e.to_string());
            let link = app
                .config
                .sheets
                .fallback_url
                .clone()
                .unwrap_or_else(|| app.config.github.profile_url());
            container.set_inner_html(&fallback_html(
                "Unable to load certificates.",
                &link,
                "View certificates",
            ));
        }
    }
}

/// Render the current filtered/sorted view of the stored records.
pub fn rerender(app: &Rc<App>) {
    let Some(container) = &app.els.certificates_container else {
        return;
    };
    render::render_certificates(
        container,
        &app.visible_certificates(),
        app.reveal.as_ref(),
    );
}

fn open_modal_handler(app: &App) -> ImageHandler {
    let els = app.els.clone();
    Rc::new(move |src: &str| modal::open(&els, src))
}
