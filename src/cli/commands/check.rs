//! The default command: check for Python and pip, install the packages.

use crate::error::Result;
use crate::requirements::Toolchain;
use crate::runner::{default_context, Prober, RunOptions};
use crate::ui::UserInterface;

use super::Command;

/// Runs the Python/pip checks and the package install.
pub struct CheckCommand {
    toolchain: Toolchain,
    options: RunOptions,
}

impl CheckCommand {
    /// Create the command for the standard Python toolchain.
    pub fn new(dry_run: bool) -> Self {
        Self::with_toolchain(Toolchain::python(), dry_run)
    }

    /// Create the command for a different toolchain.
    pub fn with_toolchain(toolchain: Toolchain, dry_run: bool) -> Self {
        Self {
            toolchain,
            options: RunOptions { dry_run },
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let report = Prober::new(&self.toolchain, self.options, default_context()).run(ui)?;
        tracing::debug!("Run finished: {:?}", report);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::Requirement;
    use crate::ui::MockUI;

    #[test]
    fn missing_runtime_reports_and_finishes() {
        let toolchain = Toolchain {
            runtime: Requirement::new("Python", "texkit-test-no-such-python"),
            package_manager: Requirement::new("pip", "texkit-test-no-such-pip"),
            download_url: "https://www.python.org/downloads/".to_string(),
        };
        let mut ui = MockUI::new();

        CheckCommand::with_toolchain(toolchain, false)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_error("Python is not installed"));
        assert!(ui.has_hint("https://www.python.org/downloads/"));
        assert_eq!(ui.pause_count(), 1);
    }
}
