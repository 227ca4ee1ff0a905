//! TUI mode

use crate::config::get_config;
use crate::runtime::lifetime::startup::StartupContext;

/// Hand the repository over to the interactive editor
pub fn run_tui(ctx: StartupContext) -> Result<(), Box<dyn std::error::Error>> {
    let StartupContext {
        repository,
        log_guard: _log_guard,
    } = ctx;
    crate::interfaces::tui::run_tui(&get_config(), repository)
}
