//! texkit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use texkit::cli::commands::dispatch;
use texkit::cli::Cli;
use texkit::shell::is_ci;
use texkit::ui::{create_ui, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they stay out of the console messages.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("texkit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("texkit=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("texkit starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let is_interactive = cli.is_interactive(is_ci(), console::Term::stdout().is_term());
    let mut ui = create_ui(is_interactive, cli.output_mode());

    match dispatch(&cli, ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
