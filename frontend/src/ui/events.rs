//! DOM event wiring. Each handler only translates the browser event into a
//! `Message`; all decisions are made by the reducers.

use std::cell::Cell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, MouseEvent};

use crate::constants::{
    ADVANCED_FORM_ID, BASIC_FORM_ID, CLEAR_SETS_BUTTON_ID, EXCLUSIVE_GROUPS, PREVIEW_KEY_ATTRIBUTE,
    REFERENCED_CARD_CLASS, SELECT_ALL_SETS_BUTTON_ID, SELECT_NEW_FORMAT_BUTTON_ID,
    SHOW_ADVANCED_BUTTON_ID, SHOW_BASIC_BUTTON_ID,
};
use crate::dom_utils;
use crate::messages::Message;
use crate::models::FormatPreset;
use crate::state::dispatch_global_message;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Entry point – call once after the page globals were read. Attaches all
/// search-page handlers.
pub fn setup_ui_event_handlers(document: &Document, is_mobile: bool) -> Result<(), JsValue> {
    setup_mode_toggle_handlers(document)?;
    setup_exclusive_group_handlers(document)?;
    setup_search_form_handlers(document)?;
    setup_format_preset_handlers(document)?;
    if !is_mobile {
        setup_hover_preview_handlers(document)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Individual handlers
// ---------------------------------------------------------------------------

fn on_click(document: &Document, id: &str, msg: Message) -> Result<(), JsValue> {
    if let Some(btn) = document.get_element_by_id(id) {
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            dispatch_global_message(msg.clone());
        }));
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

/// "Advanced search" / "Basic search" buttons
fn setup_mode_toggle_handlers(document: &Document) -> Result<(), JsValue> {
    on_click(document, SHOW_ADVANCED_BUTTON_ID, Message::ShowAdvanced)?;
    on_click(document, SHOW_BASIC_BUTTON_ID, Message::ShowBasic)
}

/// Register every radio-like group with the reducer, then listen for changes.
fn setup_exclusive_group_handlers(document: &Document) -> Result<(), JsValue> {
    for group in EXCLUSIVE_GROUPS {
        let boxes = dom_utils::group_checkboxes(document, group)?;
        if boxes.is_empty() {
            continue;
        }

        dispatch_global_message(Message::RegisterExclusiveGroup {
            group: group.to_string(),
            options: boxes.iter().map(|b| b.value()).collect(),
            checked: boxes.iter().filter(|b| b.checked()).map(|b| b.value()).collect(),
        });

        for checkbox in &boxes {
            let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
                let input = match e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                    Some(input) => input,
                    None => return,
                };
                dispatch_global_message(Message::CheckboxChanged {
                    group: group.to_string(),
                    option: input.value(),
                    checked: input.checked(),
                });
            }));
            checkbox.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
            cb.forget();
        }
    }
    Ok(())
}

/// Basic and advanced forms submit by navigating to the search URL.
fn setup_search_form_handlers(document: &Document) -> Result<(), JsValue> {
    for form_id in [BASIC_FORM_ID, ADVANCED_FORM_ID] {
        if let Some(form) = document.get_element_by_id(form_id) {
            let form_el = form.clone();
            let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
                e.prevent_default();
                match dom_utils::read_form_fields(&form_el) {
                    Ok(fields) => dispatch_global_message(Message::SubmitSearch {
                        form_id: form_el.id(),
                        fields,
                    }),
                    Err(err) => web_sys::console::error_1(
                        &format!("Failed to read search form: {:?}", err).into(),
                    ),
                }
            }));
            form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
            cb.forget();
        }
    }
    Ok(())
}

/// New-format / all-sets / clear buttons next to the set multi-select
fn setup_format_preset_handlers(document: &Document) -> Result<(), JsValue> {
    on_click(
        document,
        SELECT_NEW_FORMAT_BUTTON_ID,
        Message::ApplyFormatPreset(FormatPreset::NewFormat),
    )?;
    on_click(
        document,
        SELECT_ALL_SETS_BUTTON_ID,
        Message::ApplyFormatPreset(FormatPreset::AllSets),
    )?;
    on_click(
        document,
        CLEAR_SETS_BUTTON_ID,
        Message::ApplyFormatPreset(FormatPreset::Clear),
    )
}

thread_local! {
    // Next preview key; keys are never reused within a page.
    static NEXT_PREVIEW_KEY: Cell<usize> = Cell::new(0);
}

/// Enlarge referenced cards while the pointer is over them. Every
/// `.referenced-card` gets its own preview key, stamped as an attribute, so
/// the preview follows the element rather than the card it names.
pub(crate) fn setup_hover_preview_handlers(document: &Document) -> Result<(), JsValue> {
    let selector = format!(".{}:not([{}])", REFERENCED_CARD_CLASS, PREVIEW_KEY_ATTRIBUTE);
    for card in dom_utils::query_all(document, &selector)? {
        let key = NEXT_PREVIEW_KEY.with(|next| {
            let key = next.get();
            next.set(key + 1);
            key
        });
        card.set_attribute(PREVIEW_KEY_ATTRIBUTE, &key.to_string())?;
        add_hover_listener(&card, "mouseenter", Message::PreviewEnter(key))?;
        add_hover_listener(&card, "mouseleave", Message::PreviewLeave(key))?;
    }
    Ok(())
}

fn add_hover_listener(card: &Element, event: &str, msg: Message) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        dispatch_global_message(msg.clone());
    }));
    card.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
