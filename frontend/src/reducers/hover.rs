//! Hover preview for cards referenced on the page (desktop only).
//!
//! Each referenced-card element carries its own preview key, so a card that
//! is referenced twice on a page is still previewed one element at a time.

use crate::messages::{Command, Message};
use crate::state::AppState;

/// Returns true if the message was handled by this reducer
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::PreviewEnter(key) => {
            if state.config.is_mobile {
                return true;
            }
            if let Some(previous) = state.previewed_card.take() {
                if previous != *key {
                    commands.push(Command::RemovePreviewClass(previous));
                }
            }
            commands.push(Command::AddPreviewClass(*key));
            state.previewed_card = Some(*key);
            true
        }
        Message::PreviewLeave(key) => {
            if state.config.is_mobile {
                return true;
            }
            if state.previewed_card == Some(*key) {
                state.previewed_card = None;
            }
            commands.push(Command::RemovePreviewClass(*key));
            true
        }
        _ => false,
    }
}
