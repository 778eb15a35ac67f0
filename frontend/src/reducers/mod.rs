//! Sub-reducers, one per page feature. `update.rs` offers each message to
//! them in turn; the first one that recognises it handles it.

pub mod search_mode;
pub mod exclusive_groups;
pub mod hover;
pub mod search_form;
