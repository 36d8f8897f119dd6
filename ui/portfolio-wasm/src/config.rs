//! Page-supplied configuration.
//!
//! Read from `<script type="application/json" id="site-config">`. Absent →
//! defaults; malformed → warning and defaults.

use crate::dom;
use pf_content::SiteConfig;

const CONFIG_ID: &str = "site-config";

pub fn load() -> SiteConfig {
    let Some(raw) = dom::by_id(CONFIG_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            gloo_console::warn!("Ignoring #site-config:", e.to_string());
            SiteConfig::default()
        }
    }
}
