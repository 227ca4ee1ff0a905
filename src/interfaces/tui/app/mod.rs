//! Editor application state and the operations key handlers call
//!
//! - `state`: the `App` struct, screens, focus, tabs and editor rows
//! - `navigation`: sidebar and editor cursor movement
//! - `node_operations`: store mutations, field edits and saving

mod navigation;
mod node_operations;
mod state;

pub use state::{App, CurrentScreen, DetailTab, EditTarget, EditorRow, Focus, FormState};
