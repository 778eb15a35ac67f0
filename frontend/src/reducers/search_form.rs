//! Search submission and set multi-select presets.

use crate::constants::NEW_FORMAT_CLUSTER_COUNT;
use crate::messages::{Command, Message};
use crate::models::FormatPreset;
use crate::search_query::build_search_url;
use crate::state::AppState;

/// Returns true if the message was handled by this reducer
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::SubmitSearch { form_id, fields } => {
            let url = build_search_url(state.config.search_path(), form_id, fields);
            commands.push(Command::Navigate(url));
            true
        }
        Message::ApplyFormatPreset(preset) => {
            let catalog = &state.config.catalog;
            let (clusters, set_active) = match preset {
                FormatPreset::NewFormat => (catalog.newest(NEW_FORMAT_CLUSTER_COUNT), true),
                FormatPreset::AllSets => (catalog.clusters.as_slice(), true),
                FormatPreset::Clear => (catalog.clusters.as_slice(), false),
            };
            if !clusters.is_empty() {
                commands.push(Command::SelectFormatSets {
                    clusters: clusters.to_vec(),
                    set_active,
                });
            }
            true
        }
        _ => false,
    }
}
