//! Requirement probing and package installation.
//!
//! # Modules
//!
//! - [`probe`] - Toolchain definition and version probes
//! - [`status`] - Probe status types
//! - [`installer`] - The fixed package install

pub mod installer;
pub mod probe;
pub mod status;

pub use installer::{install_args, install_command, install_packages, PACKAGES};
pub use probe::{probe, Requirement, Toolchain, DOWNLOAD_URL};
pub use status::{parse_version, ProbeStatus};
