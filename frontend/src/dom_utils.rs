//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Show / hide, class swaps, focus and form reading live here so that the
//! command executor and the event wiring never poke at raw attributes.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

use crate::models::{FieldValue, FormField};

/// Clear the `hidden` attribute so the element becomes visible.
pub fn show(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.set_hidden(false);
    }
}

/// Set the `hidden` attribute; no page stylesheet is needed for it to apply.
pub fn hide(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.set_hidden(true);
    }
}

pub fn swap_class(el: &Element, add: &str, remove: &str) -> Result<(), JsValue> {
    el.class_list().remove_1(remove)?;
    el.class_list().add_1(add)
}

/// Focus the control called `name` inside the form `form_id`.
/// Returns true if an element was focused.
pub fn focus_named(document: &Document, form_id: &str, name: &str) -> bool {
    let selector = format!("#{} [name=\"{}\"]", form_id, css_string(name));
    match document.query_selector(&selector) {
        Ok(Some(el)) => match el.dyn_into::<HtmlElement>() {
            Ok(html) => html.focus().is_ok(),
            Err(_) => false,
        },
        _ => false,
    }
}

/// Every element matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Checkboxes of the radio-like group `group`.
pub fn group_checkboxes(document: &Document, group: &str) -> Result<Vec<HtmlInputElement>, JsValue> {
    let selector = format!("input[type=\"checkbox\"][name=\"{}\"]", css_string(group));
    Ok(query_all(document, &selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect())
}

/// Snapshot every named, enabled control of a form in document order, the
/// way the browser builds a submission: controls with an empty name or that
/// are disabled (directly or through a disabled fieldset) are left out.
/// Buttons and file inputs never take part in a search.
pub fn read_form_fields(form: &Element) -> Result<Vec<FormField>, JsValue> {
    let list = form.query_selector_all("input[name], select[name], textarea[name]")?;
    let mut fields = Vec::new();

    for i in 0..list.length() {
        let el = match list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            Some(el) => el,
            None => continue,
        };
        if el.matches(":disabled").unwrap_or(false) {
            continue;
        }

        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            let name = input.name();
            if name.is_empty() {
                continue;
            }
            let value = match input.type_().as_str() {
                "submit" | "button" | "reset" | "file" | "image" => continue,
                "checkbox" | "radio" => FieldValue::Checkbox {
                    checked: input.checked(),
                    value: checkbox_value(input),
                },
                _ => FieldValue::Text(input.value()),
            };
            fields.push(FormField { name, value });
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            let name = select.name();
            if name.is_empty() {
                continue;
            }
            let value = if select.multiple() {
                FieldValue::MultiSelect(selected_values(select))
            } else {
                FieldValue::Select(selected_values(select).into_iter().next())
            };
            fields.push(FormField { name, value });
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            let name = area.name();
            if name.is_empty() {
                continue;
            }
            fields.push(FormField {
                name,
                value: FieldValue::Text(area.value()),
            });
        }
    }
    Ok(fields)
}

// A checkbox without a value attribute submits "on".
fn checkbox_value(input: &HtmlInputElement) -> String {
    if input.has_attribute("value") {
        input.value()
    } else {
        "on".to_string()
    }
}

fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .filter(|opt| !opt.disabled())
        .map(|opt| opt.value())
        .collect()
}

/// Escape a value for use inside a double-quoted CSS attribute selector.
pub fn css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Unit tests (run with `cargo test --lib` in the frontend crate)
// ---------------------------------------------------------------------------
