use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::components::multi_select::select_sets_in_widget;
use crate::constants::{PREVIEW_CLASS, PREVIEW_KEY_ATTRIBUTE, REFERENCED_CARD_CLASS};
use crate::debug_log;
use crate::dom_utils;
use crate::messages::Command;

/// Apply one command to the live document. Elements that are not on the
/// current page are skipped silently.
pub fn execute(cmd: Command) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    debug_log!("execute {:?}", cmd);

    match cmd {
        Command::ShowElement(id) => {
            if let Some(el) = document.get_element_by_id(id) {
                dom_utils::show(&el);
            }
        }
        Command::HideElement(id) => {
            if let Some(el) = document.get_element_by_id(id) {
                dom_utils::hide(&el);
            }
        }
        Command::SetModeClass { element_id, add, remove } => {
            if let Some(el) = document.get_element_by_id(element_id) {
                dom_utils::swap_class(&el, add, remove)?;
            }
        }
        Command::FocusField { form_id, field } => {
            if !dom_utils::focus_named(&document, form_id, field) {
                debug_log!("nothing to focus for {} in #{}", field, form_id);
            }
        }
        Command::UncheckBox { group, option } => {
            for checkbox in dom_utils::group_checkboxes(&document, &group)? {
                if checkbox.value() == option {
                    // Setting `checked` from script fires no change event.
                    checkbox.set_checked(false);
                }
            }
        }
        Command::AddPreviewClass(key) => {
            if let Some(card) = referenced_card(&document, key)? {
                card.class_list().add_1(PREVIEW_CLASS)?;
            }
        }
        Command::RemovePreviewClass(key) => {
            if let Some(card) = referenced_card(&document, key)? {
                card.class_list().remove_1(PREVIEW_CLASS)?;
            }
        }
        Command::SelectFormatSets { clusters, set_active } => {
            select_sets_in_widget(&document, &clusters, set_active);
        }
        Command::Navigate(url) => {
            // Replaces the current history entry.
            window.location().replace(&url)?;
        }
    }

    Ok(())
}

/// The single referenced-card element stamped with preview key `key`.
fn referenced_card(document: &Document, key: usize) -> Result<Option<web_sys::Element>, JsValue> {
    let selector = format!(
        ".{}[{}=\"{}\"]",
        REFERENCED_CARD_CLASS, PREVIEW_KEY_ATTRIBUTE, key
    );
    document.query_selector(&selector)
}
