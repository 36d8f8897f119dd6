//! Application state.
//!
//! One `App` owns the bound elements, the configuration and the mutable
//! session state. Controllers receive `&Rc<App>` and go through the accessor
//! methods. The app installed by `init` lives in a thread-local slot for the
//! rest of the page.

use crate::ambient::AmbientController;
use crate::dom::Elements;
use crate::reveal::RevealController;
use gloo_storage::{LocalStorage, Storage};
use pf_content::{CatalogView, Certificate, PreferenceStore, SiteConfig, Theme};
use std::cell::RefCell;
use std::rc::Rc;

/// Mutable session state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub theme: Theme,
    /// Source list as fetched. Never reordered; views are derived from it.
    pub certificates: Vec<Certificate>,
    pub view: CatalogView,
    /// Filter/sort/lightbox listeners are attached once records exist.
    pub controls_bound: bool,
}

pub struct App {
    pub els: Elements,
    pub config: SiteConfig,
    pub reveal: Option<RevealController>,
    pub ambient: AmbientController,
    state: RefCell<AppState>,
}

impl App {
    pub fn new(els: Elements, config: SiteConfig) -> Rc<App> {
        let reveal = RevealController::new(&config.reveal);
        let ambient = AmbientController::new(&config.ambient);
        Rc::new(App {
            els,
            config,
            reveal,
            ambient,
            state: RefCell::new(AppState::default()),
        })
    }

    /// Run a closure with shared read access to the state.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        f(&self.state.borrow())
    }

    /// Run a closure with mutable access to the state.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AppState) -> R,
    {
        f(&mut self.state.borrow_mut())
    }

    // ── Convenience accessors ──

    pub fn theme(&self) -> Theme {
        self.with(|s| s.theme)
    }

    pub fn set_theme(&self, theme: Theme) {
        self.with_mut(|s| s.theme = theme);
    }

    pub fn certificates(&self) -> Vec<Certificate> {
        self.with(|s| s.certificates.clone())
    }

    pub fn set_certificates(&self, certs: Vec<Certificate>) {
        self.with_mut(|s| s.certificates = certs);
    }

    pub fn view(&self) -> CatalogView {
        self.with(|s| s.view.clone())
    }

    pub fn set_view(&self, view: CatalogView) {
        self.with_mut(|s| s.view = view);
    }

    /// Certificates as currently filtered and sorted.
    pub fn visible_certificates(&self) -> Vec<Certificate> {
        self.with(|s| s.view.derive(&s.certificates))
    }
}

// ── Page-lifetime holder ──

thread_local! {
    static PAGE_APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// Keep `app` alive for the rest of the page. The reveal observer and the
/// listeners hold closures owned by it.
pub fn install(app: Rc<App>) {
    PAGE_APP.with(|slot| *slot.borrow_mut() = Some(app));
}

/// The installed app, if `init` has run.
pub fn current() -> Option<Rc<App>> {
    PAGE_APP.with(|slot| slot.borrow().clone())
}

// ── localStorage ──

/// Raw `localStorage` access. Values are stored verbatim, not JSON-encoded,
/// so the theme key reads `light`/`dark` for any other script on the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let _ = LocalStorage::raw().set_item(key, value);
    }
}
