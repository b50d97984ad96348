//! UI Configuration
//!
//! Page-level settings rendered by the backend into a JSON script element.
//! Every field has a default so an empty object (or no element) works.

use serde::{Deserialize, Serialize};

use crate::csrf;
use crate::debounce::SEARCH_DELAY_MS;
use crate::object_type::{ObjectType, NAVIGATION_TABS};
use crate::Result;

/// Which front end the page is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Earlier front end: loaner picker for loans, 3 s messages
    Toolbase,
    /// Later front end: loan form popup, status-aware forms, 5 s messages
    #[default]
    Toolcontrol,
    /// One page per list under `div#main`
    V2,
}

impl Variant {
    pub fn message_delay_ms(self) -> u32 {
        match self {
            Variant::Toolbase => 3000,
            Variant::Toolcontrol | Variant::V2 => 5000,
        }
    }

    /// Toolcontrol covers sort reloads with the loader and mask.
    pub fn masks_sorting(self) -> bool {
        matches!(self, Variant::Toolcontrol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    pub object_type: ObjectType,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Path segment navigated to, e.g. `settings`
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub variant: Variant,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub search_delay_ms: u32,
    /// Overrides the variant's message delay
    pub message_delay_ms: Option<u32>,
    pub request_timeout_ms: u32,
    pub loader_src: String,
    pub tabs: Vec<TabConfig>,
    pub menu: Vec<MenuItem>,
    /// v2 action select entries; `id` is the action path segment
    pub actions: Vec<MenuItem>,
    /// Log at debug level
    pub debug: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            csrf_cookie: csrf::DEFAULT_COOKIE.to_string(),
            csrf_header: csrf::DEFAULT_HEADER.to_string(),
            search_delay_ms: SEARCH_DELAY_MS,
            message_delay_ms: None,
            request_timeout_ms: 30_000,
            loader_src: "/static/ajax-loader.gif".to_string(),
            tabs: NAVIGATION_TABS
                .iter()
                .map(|(object_type, label)| TabConfig {
                    object_type: *object_type,
                    label: label.to_string(),
                })
                .collect(),
            menu: vec![
                MenuItem { id: "stats".to_string(), label: "Statistik".to_string() },
                MenuItem { id: "settings".to_string(), label: "Indstillinger".to_string() },
                MenuItem { id: "logout".to_string(), label: "Log ud".to_string() },
            ],
            actions: Vec::new(),
            debug: false,
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    pub fn message_delay_ms(&self) -> u32 {
        self.message_delay_ms
            .unwrap_or_else(|| self.variant.message_delay_ms())
    }

    /// First tab, selected on load.
    pub fn initial_tab(&self) -> ObjectType {
        self.tabs
            .first()
            .map(|t| t.object_type)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = UiConfig::from_json("{}").unwrap();
        assert_eq!(cfg, UiConfig::default());
        assert_eq!(UiConfig::from_json("  ").unwrap(), UiConfig::default());
        assert_eq!(cfg.csrf_cookie, "csrftoken");
        assert_eq!(cfg.search_delay_ms, 500);
        assert_eq!(cfg.initial_tab(), ObjectType::Tool);
        assert_eq!(cfg.tabs.len(), 6);
    }

    #[test]
    fn test_variant_message_delay() {
        let cfg = UiConfig::from_json(r#"{"variant": "toolbase"}"#).unwrap();
        assert_eq!(cfg.message_delay_ms(), 3000);

        let cfg = UiConfig::from_json(r#"{"variant": "toolcontrol"}"#).unwrap();
        assert_eq!(cfg.message_delay_ms(), 5000);

        let cfg = UiConfig::from_json(r#"{"variant": "toolbase", "message_delay_ms": 1000}"#).unwrap();
        assert_eq!(cfg.message_delay_ms(), 1000);
    }

    #[test]
    fn test_custom_tabs() {
        let cfg = UiConfig::from_json(
            r#"{"tabs": [{"object_type": "building_site", "label": "Pladser"}]}"#,
        )
        .unwrap();
        assert_eq!(cfg.initial_tab(), ObjectType::BuildingSite);
    }

    #[test]
    fn test_invalid_config() {
        assert!(UiConfig::from_json(r#"{"variant": "v3"}"#).is_err());
    }
}
