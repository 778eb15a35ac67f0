use wasm_bindgen::JsValue;

use crate::constants::{DEFAULT_SEARCH_PATH, IS_MOBILE_GLOBAL, SET_CATALOG_GLOBAL};
use crate::models::SetCatalog;

/// Page-level settings gathered once at start-up.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub is_mobile: bool,
    pub catalog: SetCatalog,
    search_path: String,
}

impl Default for PageConfig {
    /// Desktop viewport, empty catalog, default search path. Used by tests
    /// and before `from_window()` has run.
    fn default() -> Self {
        Self {
            is_mobile: false,
            catalog: SetCatalog::default(),
            search_path: default_search_path(),
        }
    }
}

fn default_search_path() -> String {
    // Build-time override, e.g. when the site is mounted under a prefix.
    option_env!("SEARCH_BASE_PATH")
        .unwrap_or(DEFAULT_SEARCH_PATH)
        .to_string()
}

impl PageConfig {
    pub fn new(is_mobile: bool, catalog: SetCatalog) -> Self {
        Self { is_mobile, catalog, ..Self::default() }
    }

    /// Read the globals the server template injects before this module
    /// loads. Missing or malformed values fall back to the defaults.
    pub fn from_window() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::default(),
        };
        let global: &JsValue = window.as_ref();

        let is_mobile = js_sys::Reflect::get(global, &JsValue::from_str(IS_MOBILE_GLOBAL))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let catalog = js_sys::Reflect::get(global, &JsValue::from_str(SET_CATALOG_GLOBAL))
            .ok()
            .map(|raw| parse_catalog(&raw))
            .unwrap_or_default();

        Self::new(is_mobile, catalog)
    }

    pub fn search_path(&self) -> &str {
        &self.search_path
    }

    pub fn with_search_path(mut self, path: &str) -> Self {
        self.search_path = path.to_string();
        self
    }
}

/// `sets_json` may be injected either as an object literal or as the JSON
/// text itself.
fn parse_catalog(raw: &JsValue) -> SetCatalog {
    if raw.is_undefined() || raw.is_null() {
        return SetCatalog::default();
    }

    let parsed = if let Some(text) = raw.as_string() {
        SetCatalog::from_json(&text).map_err(|e| e.to_string())
    } else {
        serde_wasm_bindgen::from_value::<SetCatalog>(raw.clone()).map_err(|e| e.to_string())
    };

    match parsed {
        Ok(catalog) => catalog,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("Ignoring malformed `{}`: {}", SET_CATALOG_GLOBAL, e).into(),
            );
            SetCatalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_search_endpoint() {
        let config = PageConfig::default();
        assert!(!config.is_mobile);
        assert!(config.catalog.clusters.is_empty());
        assert_eq!(config.search_path(), option_env!("SEARCH_BASE_PATH").unwrap_or("/search/"));
    }

    #[test]
    fn search_path_can_be_overridden() {
        let config = PageConfig::new(true, SetCatalog::default()).with_search_path("/db/search/");
        assert!(config.is_mobile);
        assert_eq!(config.search_path(), "/db/search/");
    }
}
