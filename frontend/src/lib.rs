use wasm_bindgen::prelude::*;

mod macros;

pub mod command_executors;
pub mod components;
pub mod config;
pub mod constants;
pub mod dom_utils;
pub mod format_sets;
pub mod messages;
pub mod models;
pub mod reducers;
pub mod search_query;
pub mod state;
pub mod ui;
pub mod update;

#[cfg(test)]
mod tests;

use config::PageConfig;
use messages::Message;
use models::{FormatCluster, SearchMode};

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    let config = PageConfig::from_window();
    let is_mobile = config.is_mobile;
    debug_log!(
        "search page start: mobile={}, {} format cluster(s)",
        is_mobile,
        config.catalog.clusters.len()
    );
    state::init_global_state(config);

    components::multi_select::init_multi_selects();
    ui::events::setup_ui_event_handlers(&document, is_mobile)?;

    // A page rendered for an advanced search keeps the advanced form open.
    let search = window.location().search().unwrap_or_default();
    if search_query::form_type_from_query(&search).as_deref() == Some(constants::ADVANCED_FORM_ID) {
        state::dispatch_global_message(Message::RestoreSearchMode(SearchMode::Advanced));
    }

    Ok(())
}

/// Select (or deselect) every set named in `clusters` in the set
/// multi-select. `clusters` uses the same shape as the page's `sets_json`
/// cluster list, so templates can call this with custom groupings.
#[wasm_bindgen(js_name = selectFormatSets)]
pub fn select_format_sets_js(clusters: JsValue, set_active: bool) -> Result<usize, JsValue> {
    let clusters: Vec<FormatCluster> = serde_wasm_bindgen::from_value(clusters)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let report = components::multi_select::select_sets_in_widget(&document, &clusters, set_active);
    Ok(report.clicks)
}
