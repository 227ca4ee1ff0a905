//! Mode routing
//!
//! - CLI mode: one-shot subcommands
//! - TUI mode: the interactive editor (default when no subcommand is given)

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

impl Mode {
    /// TUI 模式下日志不能写到终端
    pub fn is_tui(&self) -> bool {
        #[cfg(feature = "tui")]
        if *self == Mode::Tui {
            return true;
        }
        false
    }
}

/// No subcommand or `tui` opens the editor; any other subcommand runs once
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => Mode::Tui,
        #[cfg(feature = "cli")]
        Some(_) => Mode::Cli,
        #[allow(unreachable_patterns)]
        _ => Mode::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "tui")]
    #[test]
    fn test_no_subcommand_opens_editor() {
        assert_eq!(detect_mode(None), Mode::Tui);
        assert_eq!(detect_mode(Some(&Commands::Tui)), Mode::Tui);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_subcommand_runs_cli() {
        let cmd = Commands::List { search: None };
        assert_eq!(detect_mode(Some(&cmd)), Mode::Cli);
    }
}
