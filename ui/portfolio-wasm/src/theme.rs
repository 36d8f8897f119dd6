//! Theme controller.
//!
//! The active theme lives in three places kept in step here: the
//! `data-theme` attribute on `<html>` (read by the stylesheet), the
//! `theme` key in `localStorage`, and the toggle icon. Changing it also
//! recolours the particle field.

use crate::dom;
use crate::state::{App, LocalPreferences};
use pf_content::{Theme, ThemePreference};
use std::rc::Rc;

fn preference() -> ThemePreference<LocalPreferences> {
    ThemePreference::new(LocalPreferences)
}

/// Apply the stored theme without persisting or restarting anything.
pub fn init(app: &App) {
    apply(app, preference().load());
}

pub fn active_theme(app: &App) -> Theme {
    app.theme()
}

/// Apply, persist, and recolour the background effect.
pub fn set_theme(app: &Rc<App>, theme: Theme) {
    apply(app, theme);
    preference().save(theme);

    let app2 = app.clone();
    wasm_bindgen_futures::spawn_local(async move {
        app2.ambient.restart(theme).await;
    });
}

pub fn toggle(app: &Rc<App>) {
    set_theme(app, active_theme(app).toggled());
}

fn apply(app: &App, theme: Theme) {
    app.set_theme(theme);
    let _ = app.els.root.set_attribute("data-theme", theme.as_str());
    update_icon(app, theme);
}

fn update_icon(app: &App, theme: Theme) {
    let Some(toggle) = &app.els.theme_toggle else {
        return;
    };
    if let Ok(Some(icon)) = toggle.query_selector("i") {
        icon.set_class_name(theme.icon_class());
    }
}

/// Current value of the `data-theme` attribute.
pub fn document_theme() -> Option<String> {
    dom::document().document_element()?.get_attribute("data-theme")
}
