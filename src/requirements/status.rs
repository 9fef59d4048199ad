//! Probe status types.
//!
//! Each probe produces a `ProbeStatus`. The prober only branches on
//! [`ProbeStatus::is_found`]; the finer variants exist for diagnostics.

/// The result of probing a single executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The version query exited with status zero.
    Found {
        /// First non-empty line the version query printed, if any.
        version: Option<String>,
    },

    /// The executable could not be located on the search path.
    NotFound,

    /// The executable ran (or failed to start) and did not report success.
    Failed {
        /// Exit code (None if killed by signal or never started).
        exit_code: Option<i32>,
    },
}

impl ProbeStatus {
    /// Whether the probe succeeded.
    pub fn is_found(&self) -> bool {
        matches!(self, ProbeStatus::Found { .. })
    }

    /// Reported version string, when the probe succeeded and printed one.
    pub fn version(&self) -> Option<&str> {
        match self {
            ProbeStatus::Found { version } => version.as_deref(),
            _ => None,
        }
    }

    /// Human-readable detail for verbose output.
    pub fn detail(&self, command: &str) -> String {
        match self {
            ProbeStatus::Found { version: Some(v) } => format!("'{}' reported {}", command, v),
            ProbeStatus::Found { version: None } => format!("'{}' succeeded", command),
            ProbeStatus::NotFound => format!("'{}' was not found on PATH", command),
            ProbeStatus::Failed {
                exit_code: Some(code),
            } => format!("'{}' exited with code {}", command, code),
            ProbeStatus::Failed { exit_code: None } => {
                format!("'{}' did not exit normally", command)
            }
        }
    }
}

/// Pull the version line out of a version query's output.
///
/// Some runtimes print their version on stderr, so stdout is checked first
/// and stderr second.
pub fn parse_version(stdout: &str, stderr: &str) -> Option<String> {
    [stdout, stderr]
        .iter()
        .flat_map(|s| s.lines())
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
