//! Executable probes.
//!
//! A probe invokes an executable with its version flag and classifies the
//! outcome. Absent executables and executables that exit non-zero both
//! count as "not found" for the prober; [`ProbeStatus`] keeps them apart
//! for diagnostics.
//!
//! # Example
//!
//! ```no_run
//! use texkit::requirements::{probe, Toolchain};
//!
//! let toolchain = Toolchain::python();
//! let status = probe(&toolchain.runtime);
//! println!("{}", status.detail(&toolchain.runtime.version_command()));
//! ```

use crate::error::TexkitError;
use crate::shell::{display_command, execute_quiet};

use super::status::{parse_version, ProbeStatus};

/// Where users are sent when either executable is missing.
pub const DOWNLOAD_URL: &str = "https://www.python.org/downloads/";

/// An executable the prober checks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Name shown to the user (e.g., "Python").
    pub display_name: String,
    /// Executable looked up on PATH.
    pub executable: String,
    /// Arguments that make the executable report its version.
    pub version_args: Vec<String>,
}

impl Requirement {
    /// Create a requirement probed with `--version`.
    pub fn new(display_name: &str, executable: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            executable: executable.to_string(),
            version_args: vec!["--version".to_string()],
        }
    }

    /// The version query as it would be typed in a shell.
    pub fn version_command(&self) -> String {
        let args: Vec<&str> = self.version_args.iter().map(String::as_str).collect();
        display_command(&self.executable, &args)
    }
}

/// The runtime and package manager pair the prober walks through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Checked first.
    pub runtime: Requirement,
    /// Checked only after the runtime is found; also runs the install.
    pub package_manager: Requirement,
    /// Remediation link printed on either failure.
    pub download_url: String,
}

impl Toolchain {
    /// Python and pip, resolved through PATH.
    pub fn python() -> Self {
        Self {
            runtime: Requirement::new("Python", "python"),
            package_manager: Requirement::new("pip", "pip"),
            download_url: DOWNLOAD_URL.to_string(),
        }
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::python()
    }
}

/// Run the requirement's version query and classify the result.
pub fn probe(requirement: &Requirement) -> ProbeStatus {
    let args: Vec<&str> = requirement.version_args.iter().map(String::as_str).collect();

    match execute_quiet(&requirement.executable, &args) {
        Ok(result) if result.success => ProbeStatus::Found {
            version: parse_version(&result.stdout, &result.stderr),
        },
        Ok(result) => ProbeStatus::Failed {
            exit_code: result.exit_code,
        },
        Err(TexkitError::NotFound { .. }) => ProbeStatus::NotFound,
        Err(e) => {
            tracing::warn!("Probe '{}' could not start: {}", requirement.version_command(), e);
            ProbeStatus::Failed { exit_code: None }
        }
    }
}
