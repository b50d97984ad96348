//! Page Configuration
//!
//! The backend renders the settings with `json_script` into
//! `<script id="toolbase-config" type="application/json">`.

use toolbase_core::config::UiConfig;

use crate::dom;

pub const CONFIG_ELEMENT_ID: &str = "toolbase-config";

pub fn load() -> UiConfig {
    let Some(json) = dom::text_of(CONFIG_ELEMENT_ID) else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("[CONFIG] invalid page config, using defaults: {}", e).into());
            UiConfig::default()
        }
    }
}
