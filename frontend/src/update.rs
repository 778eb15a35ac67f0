// frontend/src/update.rs
//
use crate::messages::{Command, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    if crate::reducers::search_mode::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::exclusive_groups::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::hover::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::search_form::update(state, &msg, &mut commands) {
        return commands;
    }

    crate::debug_log!("Unhandled message: {:?}", msg);
    commands
}
