//! Basic / advanced search panel toggle.

use crate::constants::{
    ADVANCED_FORM_ID, ADVANCED_MODE_CLASS, ADVANCED_PANEL_ID, BASIC_FORM_ID, BASIC_MODE_CLASS,
    BASIC_PANEL_ID, PRIMARY_TEXT_FIELD, SEARCH_CONTAINER_ID,
};
use crate::messages::{Command, Message};
use crate::models::SearchMode;
use crate::state::AppState;

/// Returns true if the message was handled by this reducer
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::ShowAdvanced => {
            apply_mode(state, SearchMode::Advanced, true, commands);
            true
        }
        Message::ShowBasic => {
            apply_mode(state, SearchMode::Basic, true, commands);
            true
        }
        Message::RestoreSearchMode(mode) => {
            apply_mode(state, *mode, false, commands);
            true
        }
        _ => false,
    }
}

fn apply_mode(state: &mut AppState, mode: SearchMode, focus: bool, commands: &mut Vec<Command>) {
    state.search_mode = mode;

    let (shown, hidden, add, remove, form_id) = match mode {
        SearchMode::Advanced => (
            ADVANCED_PANEL_ID,
            BASIC_PANEL_ID,
            ADVANCED_MODE_CLASS,
            BASIC_MODE_CLASS,
            ADVANCED_FORM_ID,
        ),
        SearchMode::Basic => (
            BASIC_PANEL_ID,
            ADVANCED_PANEL_ID,
            BASIC_MODE_CLASS,
            ADVANCED_MODE_CLASS,
            BASIC_FORM_ID,
        ),
    };

    commands.push(Command::HideElement(hidden));
    commands.push(Command::ShowElement(shown));
    commands.push(Command::SetModeClass {
        element_id: SEARCH_CONTAINER_ID,
        add,
        remove,
    });

    // On phones focusing a text field pops the on-screen keyboard.
    if focus && !state.config.is_mobile {
        commands.push(Command::FocusField {
            form_id,
            field: PRIMARY_TEXT_FIELD,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::models::SetCatalog;
    use std::collections::{BTreeMap, BTreeSet};

    /// Visibility and class state of the elements the toggle touches.
    #[derive(Debug, Clone, PartialEq, Default)]
    struct View {
        visible: BTreeMap<&'static str, bool>,
        classes: BTreeSet<&'static str>,
        focused: Option<&'static str>,
    }

    impl View {
        fn initial() -> Self {
            let mut view = Self::default();
            view.visible.insert(BASIC_PANEL_ID, true);
            view.visible.insert(ADVANCED_PANEL_ID, false);
            view.classes.insert(BASIC_MODE_CLASS);
            view
        }

        fn apply(&mut self, commands: &[Command]) {
            for cmd in commands {
                match cmd {
                    Command::ShowElement(id) => {
                        self.visible.insert(*id, true);
                    }
                    Command::HideElement(id) => {
                        self.visible.insert(*id, false);
                    }
                    Command::SetModeClass { add, remove, .. } => {
                        self.classes.remove(remove);
                        self.classes.insert(*add);
                    }
                    Command::FocusField { form_id, .. } => self.focused = Some(*form_id),
                    other => panic!("unexpected command {:?}", other),
                }
            }
        }
    }

    fn run(state: &mut AppState, msg: Message) -> Vec<Command> {
        let mut commands = Vec::new();
        assert!(update(state, &msg, &mut commands));
        commands
    }

    #[test]
    fn show_advanced_swaps_panels_and_focuses_text_field() {
        let mut state = AppState::new();
        let commands = run(&mut state, Message::ShowAdvanced);

        assert_eq!(state.search_mode, SearchMode::Advanced);
        assert_eq!(
            commands,
            vec![
                Command::HideElement(BASIC_PANEL_ID),
                Command::ShowElement(ADVANCED_PANEL_ID),
                Command::SetModeClass {
                    element_id: SEARCH_CONTAINER_ID,
                    add: ADVANCED_MODE_CLASS,
                    remove: BASIC_MODE_CLASS,
                },
                Command::FocusField {
                    form_id: ADVANCED_FORM_ID,
                    field: PRIMARY_TEXT_FIELD,
                },
            ]
        );
    }

    #[test]
    fn mobile_never_moves_focus() {
        let mut state = AppState::with_config(PageConfig::new(true, SetCatalog::default()));
        let commands = run(&mut state, Message::ShowAdvanced);
        assert!(!commands.iter().any(|c| matches!(c, Command::FocusField { .. })));
        let commands = run(&mut state, Message::ShowBasic);
        assert!(!commands.iter().any(|c| matches!(c, Command::FocusField { .. })));
    }

    #[test]
    fn advanced_then_basic_restores_original_view() {
        let mut state = AppState::new();
        let mut view = View::initial();
        let before = view.clone();

        view.apply(&run(&mut state, Message::ShowAdvanced));
        assert_eq!(view.visible[ADVANCED_PANEL_ID], true);
        assert!(view.classes.contains(ADVANCED_MODE_CLASS));

        view.apply(&run(&mut state, Message::ShowBasic));
        assert_eq!(view.visible, before.visible);
        assert_eq!(view.classes, before.classes);
        assert_eq!(state.search_mode, SearchMode::Basic);
    }

    #[test]
    fn restore_does_not_focus() {
        let mut state = AppState::new();
        let commands = run(&mut state, Message::RestoreSearchMode(SearchMode::Advanced));
        assert_eq!(state.search_mode, SearchMode::Advanced);
        assert_eq!(commands.len(), 3);
    }

    #[test]
    fn other_messages_are_ignored() {
        let mut state = AppState::new();
        let mut commands = Vec::new();
        assert!(!update(&mut state, &Message::PreviewEnter(0), &mut commands));
        assert!(commands.is_empty());
    }
}
