//! Bridge to the page's materialSelect (jQuery) multi-select widget.
//!
//! The widget renders each `<option>` as `<li><span>label</span></li>` inside
//! a `ul.select-dropdown` and marks selected options with `active`. Selection
//! is only ever changed by clicking those items so the widget keeps its own
//! bookkeeping and the underlying `<select>` in sync.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::constants::{
    MULTI_SELECT_CLASS, SET_SELECT_WRAPPER_ID, WIDGET_ACTIVE_CLASS, WIDGET_OPTION_SELECTOR,
};
use crate::format_sets::{select_format_sets, SelectionReport, SetOptionSelector};
use crate::models::FormatCluster;

#[wasm_bindgen]
extern "C" {
    type JQuery;

    #[wasm_bindgen(catch, js_name = jQuery)]
    fn jquery(selector: &str) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(catch, method, js_name = materialSelect)]
    fn material_select(this: &JQuery) -> Result<JsValue, JsValue>;
}

/// Activate the widget on every `select.mdb-select`. Pages that ship
/// without jQuery or the plugin keep their native selects.
pub fn init_multi_selects() {
    let selector = format!("select.{}", MULTI_SELECT_CLASS);
    match jquery(&selector).and_then(|selects| selects.material_select()) {
        Ok(_) => crate::debug_log!("materialSelect initialised on {}", selector),
        Err(e) => web_sys::console::warn_1(
            &format!("materialSelect unavailable, keeping native selects: {:?}", e).into(),
        ),
    }
}

/// Run `select_format_sets` against the page's set multi-select. Names with
/// no matching option are left alone and reported on the console.
pub fn select_sets_in_widget(
    document: &Document,
    clusters: &[FormatCluster],
    set_active: bool,
) -> SelectionReport {
    let mut selector = DomSetSelector::new(document, SET_SELECT_WRAPPER_ID);
    let report = select_format_sets(&mut selector, clusters, set_active);
    crate::debug_log!("format sets: {} option(s) toggled", report.clicks);
    if !report.unmatched.is_empty() {
        web_sys::console::warn_1(
            &format!("No set option labelled {:?}", report.unmatched).into(),
        );
    }
    report
}

/// `SetOptionSelector` over the rendered widget markup below `wrapper`.
pub struct DomSetSelector {
    wrapper: Option<Element>,
}

impl DomSetSelector {
    pub fn new(document: &Document, wrapper_id: &str) -> Self {
        Self {
            wrapper: document.get_element_by_id(wrapper_id),
        }
    }

    /// The `<li>` whose label text is exactly `name`.
    fn find_option(&self, name: &str) -> Option<Element> {
        let wrapper = self.wrapper.as_ref()?;
        let items = wrapper.query_selector_all(WIDGET_OPTION_SELECTOR).ok()?;
        (0..items.length())
            .filter_map(|i| items.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .find(|item| option_label(item).as_deref() == Some(name))
    }
}

impl SetOptionSelector for DomSetSelector {
    fn is_option_selected(&self, name: &str) -> Option<bool> {
        self.find_option(name)
            .map(|item| item.class_list().contains(WIDGET_ACTIVE_CLASS))
    }

    fn click_option(&mut self, name: &str) {
        if let Some(item) = self.find_option(name) {
            if let Ok(item) = item.dyn_into::<HtmlElement>() {
                item.click();
            }
        }
    }
}

// Label text of a rendered option, ignoring surrounding whitespace.
fn option_label(item: &Element) -> Option<String> {
    let span = item.query_selector("span").ok().flatten()?;
    span.text_content().map(|text| text.trim().to_string())
}
