//! texkit - Guitar Hero III PC texture tools.
//!
//! `texkit unpack` splits a container file (`*.pak`, `*.pab`, `*.img.xen`)
//! into PNG textures plus a `dds_index.txt` log, and `texkit repack` writes
//! edited textures back into the slots they came from.
//!
//! Run without a subcommand, texkit checks that `python` and `pip` can be
//! run from `PATH`, tells the user what it found, and installs `imageio`,
//! `pillow` and `requests` when both are present. Either missing executable
//! ends the run with a link to the Python downloads page.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`dds`] - DDS headers, signature scanning and the index log
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Version probes and the package install
//! - [`runner`] - The checkpoint state machine
//! - [`shell`] - Command execution and CI detection
//! - [`textures`] - Unpacking, repacking and texture conversion
//! - [`ui`] - Console output, pauses and screen clears
//!
//! # Example
//!
//! ```
//! use texkit::requirements::{install_command, Toolchain};
//!
//! let toolchain = Toolchain::python();
//! assert_eq!(
//!     install_command(&toolchain.package_manager),
//!     "pip install imageio pillow requests"
//! );
//! ```

pub mod cli;
pub mod dds;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod textures;
pub mod ui;

pub use error::{TexkitError, Result};
