use clap::Parser;

use chatflow::cli::Cli;
use chatflow::runtime::lifetime::startup::prepare_startup;
use chatflow::runtime::modes::{Mode, detect_mode};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mode = detect_mode(cli.command.as_ref());

    let ctx = prepare_startup(
        cli.config.as_deref(),
        cli.flow.clone(),
        mode.is_tui(),
    )?;

    match (mode, cli.command) {
        #[cfg(feature = "tui")]
        (Mode::Tui, _) => {
            chatflow::runtime::modes::run_tui(ctx)
                .map_err(|e| anyhow::anyhow!("TUI error: {}", e))?;
        }
        #[cfg(feature = "cli")]
        (Mode::Cli, Some(command)) => {
            if let Err(e) = chatflow::runtime::modes::run_cli(command, &ctx) {
                eprintln!("{}", e.format_colored());
                drop(ctx);
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("No interface enabled. Rebuild with the `cli` or `tui` feature.");
            std::process::exit(1);
        }
    }

    Ok(())
}
