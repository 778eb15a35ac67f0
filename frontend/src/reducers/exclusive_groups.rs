//! Checkbox groups that behave like radio buttons: checking one box
//! unchecks its siblings, unchecking a box leaves the group empty.

use crate::messages::{Command, Message};
use crate::state::{AppState, ExclusiveGroup};

/// Returns true if the message was handled by this reducer
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::RegisterExclusiveGroup { group, options, checked } => {
            // Keep the first box the server rendered checked, clear the rest.
            let kept = checked.iter().find(|c| options.contains(*c)).cloned();
            for option in checked.iter().filter(|c| Some(*c) != kept.as_ref()) {
                commands.push(Command::UncheckBox {
                    group: group.clone(),
                    option: option.clone(),
                });
            }
            state.exclusive_groups.insert(
                group.clone(),
                ExclusiveGroup {
                    options: options.clone(),
                    checked: kept,
                },
            );
            true
        }
        Message::CheckboxChanged { group, option, checked } => {
            let entry = match state.exclusive_groups.get_mut(group) {
                Some(entry) if entry.options.contains(option) => entry,
                _ => return true,
            };

            if *checked {
                for sibling in entry.options.iter().filter(|o| *o != option) {
                    commands.push(Command::UncheckBox {
                        group: group.clone(),
                        option: sibling.clone(),
                    });
                }
                entry.checked = Some(option.clone());
            } else if entry.checked.as_ref() == Some(option) {
                entry.checked = None;
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    const SORT_OPTIONS: [&str; 3] = ["most_recent", "total_cost", "alphabetical"];

    fn registered() -> AppState {
        let mut state = AppState::new();
        let mut commands = Vec::new();
        update(
            &mut state,
            &Message::RegisterExclusiveGroup {
                group: "sort_by".into(),
                options: SORT_OPTIONS.iter().map(|s| s.to_string()).collect(),
                checked: vec![],
            },
            &mut commands,
        );
        state
    }

    fn change(option: &str, checked: bool) -> Message {
        Message::CheckboxChanged {
            group: "sort_by".into(),
            option: option.into(),
            checked,
        }
    }

    #[test]
    fn checking_one_unchecks_all_siblings() {
        let mut state = registered();
        let mut commands = Vec::new();
        update(&mut state, &change("total_cost", true), &mut commands);

        let unchecked: Vec<_> = commands
            .iter()
            .map(|c| match c {
                Command::UncheckBox { option, .. } => option.as_str(),
                other => panic!("unexpected command {:?}", other),
            })
            .collect();
        assert_eq!(unchecked, vec!["most_recent", "alphabetical"]);
        assert_eq!(state.exclusive_groups["sort_by"].checked.as_deref(), Some("total_cost"));
    }

    #[test]
    fn unchecking_leaves_group_empty() {
        let mut state = registered();
        let mut commands = Vec::new();
        update(&mut state, &change("alphabetical", true), &mut commands);
        commands.clear();
        update(&mut state, &change("alphabetical", false), &mut commands);

        assert!(commands.is_empty(), "no box is re-selected");
        assert_eq!(state.exclusive_groups["sort_by"].checked, None);
    }

    #[test]
    fn unknown_group_or_option_is_ignored() {
        let mut state = registered();
        let mut commands = Vec::new();
        assert!(update(
            &mut state,
            &Message::CheckboxChanged { group: "rarity".into(), option: "R".into(), checked: true },
            &mut commands,
        ));
        assert!(update(&mut state, &change("by_colour", true), &mut commands));
        assert!(commands.is_empty());
        assert_eq!(state.exclusive_groups["sort_by"].checked, None);
    }

    #[test]
    fn registration_keeps_only_first_checked_box() {
        let mut state = AppState::new();
        let mut commands = Vec::new();
        update(
            &mut state,
            &Message::RegisterExclusiveGroup {
                group: "text_exactness".into(),
                options: vec!["exact".into(), "all".into(), "any".into()],
                checked: vec!["all".into(), "any".into()],
            },
            &mut commands,
        );
        assert_eq!(
            commands,
            vec![Command::UncheckBox { group: "text_exactness".into(), option: "any".into() }]
        );
        assert_eq!(state.exclusive_groups["text_exactness"].checked.as_deref(), Some("all"));
    }

    proptest! {
        #[test]
        fn at_most_one_box_is_ever_checked(
            events in prop::collection::vec((0usize..3, any::<bool>()), 1..30),
        ) {
            let mut state = registered();
            // Mirror of the DOM: a user click sets a box, commands clear others.
            let mut dom: BTreeSet<String> = BTreeSet::new();

            for (idx, checked) in events {
                let option = SORT_OPTIONS[idx];
                if checked { dom.insert(option.to_string()); } else { dom.remove(option); }

                let mut commands = Vec::new();
                update(&mut state, &change(option, checked), &mut commands);
                for cmd in commands {
                    if let Command::UncheckBox { option, .. } = cmd {
                        dom.remove(&option);
                    }
                }

                prop_assert!(dom.len() <= 1);
                prop_assert_eq!(dom.iter().next().cloned(), state.exclusive_groups["sort_by"].checked.clone());
            }
        }
    }
}
