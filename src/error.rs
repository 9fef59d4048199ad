//! Error types for texkit operations.
//!
//! This module defines [`TexkitError`], the error type returned when a
//! command cannot finish, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - A probe that fails is NOT an error: it is a [`ProbeStatus`] that routes
//!   the prober to its remediation branch
//! - A texture that cannot be converted or replaced is NOT an error either:
//!   unpack and repack report it and move on to the next entry
//! - `TexkitError` covers failures that stop a command (terminal I/O, an
//!   unreadable container file, a missing index log)
//! - Use `anyhow::Error` (via `TexkitError::Other`) for unexpected errors
//!
//! [`ProbeStatus`]: crate::requirements::ProbeStatus

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for texkit operations.
#[derive(Debug, Error)]
pub enum TexkitError {
    /// The executable was not found on the search path.
    #[error("Executable not found: {command}")]
    NotFound { command: String },

    /// A command could not be started for a reason other than a missing executable.
    #[error("Failed to start '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    /// Shell command failed.
    #[error("Command failed with {}: {command}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// Reading a keypress or clearing the terminal failed.
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    /// A prompt has no answer and the UI cannot ask for one.
    #[error("Cannot prompt for '{key}' in non-interactive mode (no default value)")]
    MissingInput { key: String },

    /// A batch run was pointed at something other than a directory.
    #[error("Not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// The DDS index log is missing from the extraction folder.
    #[error("Could not find log file at \"{}\"", .path.display())]
    IndexNotFound { path: PathBuf },

    /// A texture could not be converted.
    #[error("Failed to convert {}: {message}", .path.display())]
    Conversion { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for texkit operations.
pub type Result<T> = std::result::Result<T, TexkitError>;

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by a signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_command() {
        let err = TexkitError::NotFound {
            command: "python".into(),
        };
        assert!(err.to_string().contains("python"));
    }

    #[test]
    fn spawn_failed_displays_command_and_message() {
        let err = TexkitError::SpawnFailed {
            command: "pip install imageio".into(),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pip install imageio"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = TexkitError::CommandFailed {
            command: "pip install pillow".into(),
            code: Some(2),
        };
        assert_eq!(
            err.to_string(),
            "Command failed with exit code 2: pip install pillow"
        );
    }

    #[test]
    fn command_failed_without_code_mentions_signal() {
        let err = TexkitError::CommandFailed {
            command: "texconv -y".into(),
            code: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("terminated by a signal"));
        assert!(!msg.contains("None"));
    }

    #[test]
    fn missing_input_names_the_prompt() {
        let err = TexkitError::MissingInput {
            key: "input_file".into(),
        };
        assert!(err.to_string().contains("'input_file'"));
    }

    #[test]
    fn path_errors_display_the_path() {
        let err = TexkitError::NotADirectory {
            path: PathBuf::from("/tmp/textures"),
        };
        assert_eq!(err.to_string(), "Not a directory: /tmp/textures");

        let err = TexkitError::IndexNotFound {
            path: PathBuf::from("out/dds_index.txt"),
        };
        assert!(err.to_string().contains("\"out/dds_index.txt\""));

        let err = TexkitError::Conversion {
            path: PathBuf::from("dds_001.dds"),
            message: "unsupported format".into(),
        };
        assert!(err.to_string().contains("dds_001.dds: unsupported format"));
    }

    #[test]
    fn terminal_error_displays_message() {
        let err = TexkitError::Terminal {
            message: "not a tty".into(),
        };
        assert!(err.to_string().contains("not a tty"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: TexkitError = io_err.into();
        assert!(matches!(err, TexkitError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: TexkitError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
