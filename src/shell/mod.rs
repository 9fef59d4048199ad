//! Command execution and environment detection.

pub mod command;
pub mod platform;

pub use command::{
    display_command, execute, execute_inherited, execute_quiet, CommandOptions, CommandResult,
};
pub use platform::{is_ci, is_ci_with_env};
