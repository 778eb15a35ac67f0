// frontend/src/messages.rs
//
// Everything that can happen on the search page, and the DOM work the
// reducers ask for in response.
//
use crate::models::{FormField, FormatCluster, FormatPreset, SearchMode};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Search mode toggle
    ShowAdvanced,
    ShowBasic,
    RestoreSearchMode(SearchMode),       // Initial mode on page load, never moves focus

    // Radio-like checkbox groups
    RegisterExclusiveGroup {
        group: String,
        options: Vec<String>,
        checked: Vec<String>,            // Options rendered checked by the server
    },
    CheckboxChanged {
        group: String,
        option: String,
        checked: bool,
    },

    // Referenced-card hover preview
    PreviewEnter(usize),                 // preview key of the hovered element
    PreviewLeave(usize),

    // Form submission
    SubmitSearch {
        form_id: String,
        fields: Vec<FormField>,
    },

    // Set multi-select presets
    ApplyFormatPreset(FormatPreset),
}

/// Side effects produced by `update`. Executed against the DOM by
/// `command_executors::execute` once the state borrow has been released.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ShowElement(&'static str),
    HideElement(&'static str),

    /// Swap the mode classes on an element
    SetModeClass {
        element_id: &'static str,
        add: &'static str,
        remove: &'static str,
    },

    /// Focus the named control inside a form
    FocusField {
        form_id: &'static str,
        field: &'static str,
    },

    UncheckBox {
        group: String,
        option: String,
    },

    AddPreviewClass(usize),
    RemovePreviewClass(usize),

    SelectFormatSets {
        clusters: Vec<FormatCluster>,
        set_active: bool,
    },

    /// Full-page navigation that replaces the current history entry
    Navigate(String),
}
