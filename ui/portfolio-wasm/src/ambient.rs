//! Background particle field.
//!
//! Thin wrapper around the global `particlesJS` library. The library is loaded
//! by a separate script tag and may arrive after us, so `start` polls for it.
//! At most one instance is live; a restart bumps the generation so a start
//! still waiting for the library gives up instead of creating a second one.

use crate::dom;
use gloo_timers::future::TimeoutFuture;
use js_sys::Reflect;
use pf_content::Theme;
use pf_content::ambient::particle_params;
use pf_content::config::AmbientConfig;
use serde::Serialize;
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = particlesJS, catch)]
    fn particles_js(tag_id: &str, params: &JsValue) -> Result<(), JsValue>;
}

pub struct AmbientController {
    host_id: String,
    retry_interval_ms: u32,
    live: Cell<bool>,
    generation: Cell<u32>,
}

impl AmbientController {
    pub fn new(config: &AmbientConfig) -> AmbientController {
        AmbientController {
            host_id: config.host_id.clone(),
            retry_interval_ms: config.retry_interval_ms,
            live: Cell::new(false),
            generation: Cell::new(0),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Start the effect if it is not running. Waits for the library while the
    /// host element exists; returns silently once it is gone.
    pub async fn start(&self, theme: Theme) {
        let generation = self.generation.get();
        loop {
            if self.live.get() || self.generation.get() != generation {
                return;
            }
            if dom::by_id(&self.host_id).is_none() {
                return;
            }
            if library_loaded() {
                self.create(theme);
                return;
            }
            TimeoutFuture::new(self.retry_interval_ms).await;
        }
    }

    /// Replace the running effect with one coloured for `theme`.
    pub async fn restart(&self, theme: Theme) {
        self.generation.set(self.generation.get().wrapping_add(1));
        self.destroy();
        self.start(theme).await;
    }

    fn create(&self, theme: Theme) {
        let params = match particle_params(theme)
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        {
            Ok(p) => p,
            Err(e) => {
                gloo_console::error!("particle params:", e.to_string());
                return;
            }
        };
        match particles_js(&self.host_id, &params) {
            Ok(()) => self.live.set(true),
            Err(e) => gloo_console::warn!("particlesJS failed", e),
        }
    }

    /// Tear down every instance the library knows about. Errors from the
    /// library are ignored.
    fn destroy(&self) {
        if let Ok(instances) = Reflect::get(&dom::window(), &JsValue::from_str("pJSDom")) {
            if let Some(list) = instances.dyn_ref::<js_sys::Array>() {
                for inst in list.iter() {
                    let _ = destroy_instance(&inst);
                }
                list.set_length(0);
            }
        }
        self.live.set(false);
    }
}

fn library_loaded() -> bool {
    Reflect::get(&dom::window(), &JsValue::from_str("particlesJS"))
        .map(|f| f.is_function())
        .unwrap_or(false)
}

fn destroy_instance(inst: &JsValue) -> Result<(), JsValue> {
    let pjs = Reflect::get(inst, &JsValue::from_str("pJS"))?;
    let fns = Reflect::get(&pjs, &JsValue::from_str("fn"))?;
    let vendors = Reflect::get(&fns, &JsValue::from_str("vendors"))?;
    let destroy: js_sys::Function =
        Reflect::get(&vendors, &JsValue::from_str("destroypJS"))?.dyn_into()?;
    destroy.call0(&vendors)?;
    Ok(())
}
