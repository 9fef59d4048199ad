//! Command-line interface for texkit.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations and dispatch

pub mod args;
pub mod commands;

pub use args::Cli;
