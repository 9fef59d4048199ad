//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! With no subcommand the run is fully fixed: check for Python, check for
//! pip, install the packages.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::textures::DEFAULT_TEXCONV;
use crate::ui::OutputMode;

/// texkit - Guitar Hero III PC texture tools.
///
/// Without a subcommand, checks for Python and pip and installs the
/// packages the texture scripts need.
#[derive(Debug, Parser)]
#[command(name = "texkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Skip pauses, screen clears and prompts
    #[arg(long, global = true, env = "TEXKIT_NON_INTERACTIVE")]
    pub non_interactive: bool,

    /// Check but only print the install command
    #[arg(long)]
    pub dry_run: bool,

    /// Show details
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show failures
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract DDS textures from a container file and convert them to PNG
    Unpack(UnpackArgs),

    /// Write edited textures back into a container file
    Repack(RepackArgs),
}

/// Arguments for the `unpack` command.
///
/// Missing paths are asked for interactively.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UnpackArgs {
    /// Container file (*.pak, *.pab, *.img.xen), or a folder with --batch
    pub input: Option<PathBuf>,

    /// Output folder [default: extracted_dds]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Unpack every file in the INPUT folder
    #[arg(long)]
    pub batch: bool,
}

/// Arguments for the `repack` command.
///
/// Missing paths are asked for interactively.
#[derive(Debug, Clone, clap::Args)]
pub struct RepackArgs {
    /// Original container file, or a folder of *_extracted folders with --batch
    pub original: Option<PathBuf>,

    /// Folder holding the extracted textures and the index log
    pub dds_dir: Option<PathBuf>,

    /// Index log file name [default: dds_index.txt]
    #[arg(long)]
    pub index: Option<String>,

    /// Repacked output file [default: global.pab.xen_repacked]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Repack every *_extracted folder in the ORIGINAL folder
    #[arg(long)]
    pub batch: bool,

    /// texconv executable, downloaded to this path when missing
    #[arg(long, default_value = DEFAULT_TEXCONV)]
    pub texconv: PathBuf,
}

impl Cli {
    /// Output mode selected by `--quiet` / `--verbose`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    /// Whether the run should pause and clear.
    ///
    /// `ci` and `is_term` are passed in so the decision is testable.
    pub fn is_interactive(&self, ci: bool, is_term: bool) -> bool {
        !self.non_interactive && !ci && is_term
    }
}
