//! CLI mode

use crate::cli::Commands;
use crate::config::get_config;
use crate::interfaces::cli::{CliError, run_cli_command};
use crate::runtime::lifetime::startup::StartupContext;

/// Run one subcommand against the configured repository
pub fn run_cli(command: Commands, ctx: &StartupContext) -> Result<(), CliError> {
    run_cli_command(command, &get_config(), ctx.repository.as_ref())
}
