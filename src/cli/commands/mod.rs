//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands.
//!
//! # Architecture
//!
//! Commands are dispatched via [`dispatch`], which routes CLI subcommands to
//! their implementations. Running with no subcommand is the Python/pip
//! check.

pub mod check;
pub mod repack;
pub mod unpack;

pub use check::CheckCommand;
pub use repack::RepackCommand;
pub use unpack::UnpackCommand;

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::{Prompt, UserInterface};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Problems with individual textures are reported through `ui`; an
    /// `Err` means the command as a whole could not finish.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()>;
}

/// Route the parsed command line to its command and run it.
pub fn dispatch(cli: &Cli, ui: &mut dyn UserInterface) -> Result<()> {
    match &cli.command {
        Some(Commands::Unpack(args)) => UnpackCommand::new(args.clone()).execute(ui),
        Some(Commands::Repack(args)) => RepackCommand::new(args.clone()).execute(ui),
        None => CheckCommand::new(cli.dry_run).execute(ui),
    }
}

/// Ask a yes/no question.
pub(crate) fn ask_confirm(ui: &mut dyn UserInterface, key: &str, question: &str) -> Result<bool> {
    let answer = ui.prompt(&Prompt::confirm(key, question, false))?;
    Ok(answer.as_bool().unwrap_or(false))
}

/// Ask for a path, falling back to `default` on an empty answer.
pub(crate) fn ask_path(
    ui: &mut dyn UserInterface,
    key: &str,
    question: &str,
    default: Option<&str>,
) -> Result<PathBuf> {
    let answer = ui.prompt(&Prompt::input(key, question, default))?.as_string();
    match (answer.is_empty(), default) {
        (true, Some(default)) => Ok(PathBuf::from(default)),
        _ => Ok(PathBuf::from(answer)),
    }
}
