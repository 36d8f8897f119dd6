//! Contact form submitter.
//!
//! Serializes the named fields to JSON and posts them to a form relay.
//! The submit control stays disabled and the status line stays visible
//! until the reset delay has passed, whatever the outcome.

use crate::api;
use crate::dom;
use gloo_timers::future::TimeoutFuture;
use pf_content::config::ContactConfig;
use pf_content::contact::{SubmissionState, outcome_for_status, serialize_fields};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlFormElement};

const STATUS_CLASS: &str = "form-status";

pub fn bind(form: &HtmlFormElement, config: &ContactConfig) {
    let form2 = form.clone();
    let config = config.clone();
    let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
        e.prevent_default();
        let form3 = form2.clone();
        let config2 = config.clone();
        wasm_bindgen_futures::spawn_local(async move {
            submit(&form3, &config2).await;
        });
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// One full submission: lock, send, report, wait, unlock.
pub async fn submit(form: &HtmlFormElement, config: &ContactConfig) {
    let Some(status) = show_status(form, SubmissionState::Sending) else {
        return;
    };
    set_locked(form, true);

    let outcome = match (endpoint(form, config), form_payload(form)) {
        (Some(url), Ok(body)) => match api::post_json(&url, &body).await {
            Ok(code) => outcome_for_status(code),
            Err(e) => {
                gloo_console::error!("Contact form submission failed:", e.to_string());
                SubmissionState::Failed
            }
        },
        (None, _) => {
            gloo_console::warn!("Contact form has no relay endpoint");
            SubmissionState::Failed
        }
        (_, Err(e)) => {
            gloo_console::error!("Could not read contact form fields", e);
            SubmissionState::Failed
        }
    };

    finish(form, &status, outcome, config.reset_delay_ms).await;
}

/// Show the outcome, clear the form on success, and after `delay_ms`
/// re-enable the submit control and drop the status line.
pub async fn finish(form: &HtmlFormElement, status: &Element, outcome: SubmissionState, delay_ms: u32) {
    set_status(status, outcome);
    if outcome == SubmissionState::Succeeded {
        form.reset();
    }
    TimeoutFuture::new(delay_ms).await;
    set_locked(form, false);
    status.remove();
}

/// The form's own `action` wins over the configured relay.
fn endpoint(form: &HtmlFormElement, config: &ContactConfig) -> Option<String> {
    form.get_attribute("action")
        .map(|a| a.trim().to_owned())
        .filter(|a| !a.is_empty())
        .or_else(|| Some(config.endpoint.trim().to_owned()).filter(|e| !e.is_empty()))
}

/// Named text fields of `form` as a flat JSON object.
pub fn form_payload(form: &HtmlFormElement) -> Result<serde_json::Value, JsValue> {
    let data = FormData::new_with_form(form)?;
    let mut fields = Vec::new();
    for entry in data.entries() {
        let pair: js_sys::Array = entry?.dyn_into()?;
        // File inputs yield Blobs; only text values are relayed.
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push((name, value));
        }
    }
    Ok(serialize_fields(fields))
}

fn submit_control(form: &HtmlFormElement) -> Option<Element> {
    form.query_selector(r#"button[type="submit"], input[type="submit"], button:not([type])"#)
        .ok()
        .flatten()
}

fn set_locked(form: &HtmlFormElement, locked: bool) {
    let Some(control) = submit_control(form) else {
        return;
    };
    if locked {
        let _ = control.set_attribute("disabled", "");
    } else {
        let _ = control.remove_attribute("disabled");
    }
}

/// Reuse the form's status element or append a new one.
pub fn show_status(form: &HtmlFormElement, state: SubmissionState) -> Option<Element> {
    let status = match form.query_selector(&format!(".{STATUS_CLASS}")) {
        Ok(Some(el)) => el,
        _ => {
            let el = dom::create_element("div").ok()?;
            dom::add_class(&el, STATUS_CLASS);
            form.append_child(&el).ok()?;
            el
        }
    };
    set_status(&status, state);
    Some(status)
}

fn set_status(status: &Element, state: SubmissionState) {
    status.set_class_name(STATUS_CLASS);
    if let Some(cls) = state.css_class() {
        dom::add_class(status, cls);
    }
    dom::set_text(status, state.message().unwrap_or_default());
}
