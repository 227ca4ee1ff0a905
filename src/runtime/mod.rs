//! Application lifecycle
//!
//! - `lifetime`: startup (config, logging, repository)
//! - `modes`: CLI and TUI entry points

pub mod lifetime;
pub mod modes;
