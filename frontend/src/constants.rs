// DOM contract shared with the server-rendered search templates.

// Search forms – the element id doubles as the `form_type` value.
pub const BASIC_FORM_ID: &str = "basic-form";
pub const ADVANCED_FORM_ID: &str = "advanced-form";
pub const FORM_TYPE_PARAM: &str = "form_type";
pub const PRIMARY_TEXT_FIELD: &str = "generic_text";

// Panels and the buttons that switch between them
pub const BASIC_PANEL_ID: &str = "basic-search";
pub const ADVANCED_PANEL_ID: &str = "advanced-search";
pub const SHOW_ADVANCED_BUTTON_ID: &str = "show-advanced-search";
pub const SHOW_BASIC_BUTTON_ID: &str = "show-basic-search";
pub const SEARCH_CONTAINER_ID: &str = "search-forms";
pub const BASIC_MODE_CLASS: &str = "basic-mode";
pub const ADVANCED_MODE_CLASS: &str = "advanced-mode";

/// Checkbox groups that behave like radio buttons, by checkbox `name`.
pub const EXCLUSIVE_GROUPS: [&str; 4] = [
    "sort_by",
    "text_exactness",
    "colour_match",
    "colour_combination",
];

// Referenced-card hover preview
pub const REFERENCED_CARD_CLASS: &str = "referenced-card";
/// Stamped on each referenced card at start-up so commands can find the
/// exact element the pointer entered.
pub const PREVIEW_KEY_ATTRIBUTE: &str = "data-preview-key";
pub const PREVIEW_CLASS: &str = "referenced-card-preview";

// Multi-select widget (materialSelect) markup
pub const MULTI_SELECT_CLASS: &str = "mdb-select";
pub const SET_SELECT_WRAPPER_ID: &str = "set-select";
pub const WIDGET_OPTION_SELECTOR: &str = "ul.select-dropdown li";
pub const WIDGET_ACTIVE_CLASS: &str = "active";

// Format preset buttons
pub const SELECT_NEW_FORMAT_BUTTON_ID: &str = "select-new-format";
pub const SELECT_ALL_SETS_BUTTON_ID: &str = "select-all-sets";
pub const CLEAR_SETS_BUTTON_ID: &str = "clear-sets";
pub const NEW_FORMAT_CLUSTER_COUNT: usize = 2;

// Page globals injected by the server template
pub const IS_MOBILE_GLOBAL: &str = "is_mobile";
pub const SET_CATALOG_GLOBAL: &str = "sets_json";

pub const DEFAULT_SEARCH_PATH: &str = "/search/";
