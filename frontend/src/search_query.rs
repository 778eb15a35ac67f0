//! Form → query-string serialization for the search forms.
//!
//! Encoding follows `application/x-www-form-urlencoded`, the same rules the
//! browser applies to a native GET submission: only controls that carry a
//! value participate, multi-selects expand into one pair per selected value
//! and spaces become `+`.

use url::form_urlencoded;

use crate::constants::FORM_TYPE_PARAM;
use crate::models::{FieldValue, FormField};

/// Flatten form fields into ordered `(name, value)` pairs. The `form_type`
/// pair is not included.
pub fn to_query_pairs(fields: &[FormField]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for field in fields {
        match &field.value {
            FieldValue::Text(value) => pairs.push((field.name.clone(), value.clone())),
            FieldValue::Checkbox { checked: true, value } => {
                pairs.push((field.name.clone(), value.clone()))
            }
            FieldValue::Checkbox { checked: false, .. } => {}
            FieldValue::Select(Some(value)) => pairs.push((field.name.clone(), value.clone())),
            FieldValue::Select(None) => {}
            FieldValue::MultiSelect(values) => {
                for value in values {
                    pairs.push((field.name.clone(), value.clone()));
                }
            }
        }
    }
    pairs
}

/// Encode the fields of the form `form_id`, appending `form_type` last.
pub fn serialize_form(form_id: &str, fields: &[FormField]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in to_query_pairs(fields) {
        serializer.append_pair(&name, &value);
    }
    serializer.append_pair(FORM_TYPE_PARAM, form_id);
    serializer.finish()
}

/// Full navigation target, e.g. `/search/?generic_text=dragon&form_type=basic-form`.
pub fn build_search_url(search_path: &str, form_id: &str, fields: &[FormField]) -> String {
    format!("{}?{}", search_path, serialize_form(form_id, fields))
}

/// Read `form_type` back out of a location search string (with or without
/// the leading `?`).
pub fn form_type_from_query(search: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(search.as_bytes())
        .filter(|(key, _)| key == FORM_TYPE_PARAM)
        .map(|(_, value)| value.into_owned())
        .last()
}
