use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::config::PageConfig;
use crate::messages::{Command, Message};
use crate::models::SearchMode;
use crate::update::update;

/// A radio-like checkbox group as last seen by the reducers.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ExclusiveGroup {
    pub options: Vec<String>,
    pub checked: Option<String>,
}

// Transient view state of the search page
pub struct AppState {
    pub config: PageConfig,
    pub search_mode: SearchMode,
    pub exclusive_groups: BTreeMap<String, ExclusiveGroup>,
    // Preview key of the card element currently shown enlarged, if any
    pub previewed_card: Option<usize>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(PageConfig::default())
    }

    pub fn with_config(config: PageConfig) -> Self {
        Self {
            config,
            search_mode: SearchMode::Basic,
            exclusive_groups: BTreeMap::new(),
            previewed_card: None,
        }
    }

    /// Run the reducer and hand back the commands it produced.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        crate::debug_log!("dispatch {:?}", msg);
        update(self, msg)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Replace the global state once page globals have been read.
pub fn init_global_state(config: PageConfig) {
    APP_STATE.with(|state| {
        *state.borrow_mut() = AppState::with_config(config);
    });
}

pub fn dispatch_global_message(msg: Message) {
    // The borrow must end before commands run: a simulated widget click can
    // re-enter the page's handlers synchronously.
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));

    for cmd in commands {
        if let Err(e) = crate::command_executors::execute(cmd) {
            web_sys::console::warn_1(&format!("Failed to apply command: {:?}", e).into());
        }
    }
}
