//! The prober's checkpoint state machine.
//!
//! A run always starts at [`Stage::CheckRuntime`] and always ends at
//! [`Stage::Close`]:
//!
//! ```text
//! CheckRuntime --found--> CheckPackageManager --(install if found)--> Close
//!      |
//!      +--not found--> Close
//! ```
//!
//! Each checkpoint reports its outcome, pauses for acknowledgment and clears
//! the display before moving on. Failure at either checkpoint prints the
//! download link and ends the run; nothing is retried.

use crate::error::{TexkitError, Result};
use crate::requirements::{
    install_command, install_packages, probe, ProbeStatus, Requirement, Toolchain, PACKAGES,
};
use crate::shell::CommandResult;
use crate::ui::UserInterface;

/// Position in the checkpoint sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Probe the runtime.
    CheckRuntime,
    /// Probe the package manager, then install on success.
    CheckPackageManager,
    /// Terminal.
    Close,
}

/// Mockable process operations for the prober.
pub struct ProberContext<'a> {
    /// Run a requirement's version query.
    pub probe: &'a dyn Fn(&Requirement) -> ProbeStatus,
    /// Run the install command with the package manager.
    pub install: &'a dyn Fn(&Requirement) -> Result<CommandResult>,
}

/// Build the default `ProberContext` for production use.
pub fn default_context() -> ProberContext<'static> {
    ProberContext {
        probe: &probe,
        install: &install_packages,
    }
}

/// Options that shape a run without changing its checkpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print the install command instead of running it.
    pub dry_run: bool,
}

/// What happened to the install step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// A probe failed before the install was reached.
    NotAttempted,
    /// Dry run; the command was printed only.
    Skipped,
    /// The install command exited zero.
    Succeeded,
    /// The install command exited non-zero.
    Failed { exit_code: Option<i32> },
}

/// Record of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Runtime probe result.
    pub runtime: Option<ProbeStatus>,
    /// Package manager probe result, `None` if never probed.
    pub package_manager: Option<ProbeStatus>,
    /// Install step result.
    pub install: InstallOutcome,
}

impl Default for RunReport {
    fn default() -> Self {
        Self {
            runtime: None,
            package_manager: None,
            install: InstallOutcome::NotAttempted,
        }
    }
}

/// Walks the checkpoints for a toolchain.
pub struct Prober<'a> {
    toolchain: &'a Toolchain,
    options: RunOptions,
    ctx: ProberContext<'a>,
}

impl<'a> Prober<'a> {
    /// Create a prober.
    pub fn new(toolchain: &'a Toolchain, options: RunOptions, ctx: ProberContext<'a>) -> Self {
        Self {
            toolchain,
            options,
            ctx,
        }
    }

    /// Run from `CheckRuntime` to `Close`.
    ///
    /// Probe failures are reported through `ui` and the report; only UI or
    /// installer spawn failures return `Err`.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<RunReport> {
        let mut report = RunReport::default();
        let mut stage = Stage::CheckRuntime;

        while stage != Stage::Close {
            let next = self.step(stage, ui, &mut report)?;
            tracing::debug!("Stage {:?} -> {:?}", stage, next);
            stage = next;
        }

        Ok(report)
    }

    /// Execute one checkpoint and return the next stage.
    pub fn step(
        &self,
        stage: Stage,
        ui: &mut dyn UserInterface,
        report: &mut RunReport,
    ) -> Result<Stage> {
        match stage {
            Stage::CheckRuntime => {
                let status = self.checkpoint(&self.toolchain.runtime, ui)?;
                let found = status.is_found();
                report.runtime = Some(status);
                Ok(if found {
                    Stage::CheckPackageManager
                } else {
                    Stage::Close
                })
            }
            Stage::CheckPackageManager => {
                let status = self.checkpoint(&self.toolchain.package_manager, ui)?;
                let found = status.is_found();
                report.package_manager = Some(status);
                if found {
                    report.install = self.install(ui)?;
                }
                Ok(Stage::Close)
            }
            Stage::Close => Ok(Stage::Close),
        }
    }

    fn checkpoint(
        &self,
        requirement: &Requirement,
        ui: &mut dyn UserInterface,
    ) -> Result<ProbeStatus> {
        let mut spinner =
            ui.start_spinner(&format!("Checking for {}...", requirement.display_name));
        let status = (self.ctx.probe)(requirement);
        spinner.finish_and_clear();

        tracing::debug!("{}", status.detail(&requirement.version_command()));

        if status.is_found() {
            match status.version() {
                Some(version) => ui.success(&format!(
                    "{} is installed ({})",
                    requirement.display_name, version
                )),
                None => ui.success(&format!("{} is installed", requirement.display_name)),
            }
        } else {
            ui.error(&format!(
                "{} is not installed or could not be run",
                requirement.display_name
            ));
            if ui.output_mode().shows_details() {
                ui.message(&status.detail(&requirement.version_command()));
            }
            ui.show_hint(&format!(
                "Download and install {} from {}",
                self.toolchain.runtime.display_name, self.toolchain.download_url
            ));
        }

        ui.pause()?;
        ui.clear()?;
        Ok(status)
    }

    fn install(&self, ui: &mut dyn UserInterface) -> Result<InstallOutcome> {
        let package_manager = &self.toolchain.package_manager;
        let command = install_command(package_manager);

        ui.show_header(&format!("Installing {}", PACKAGES.join(", ")));

        if self.options.dry_run {
            ui.message(&format!("Dry run: would run '{}'", command));
            return Ok(InstallOutcome::Skipped);
        }

        if ui.output_mode().shows_details() {
            ui.message(&format!("Running '{}'", command));
        }

        let result = (self.ctx.install)(package_manager)?;
        if result.success {
            ui.success("Packages installed");
            Ok(InstallOutcome::Succeeded)
        } else {
            let err = TexkitError::CommandFailed {
                command,
                code: result.exit_code,
            };
            tracing::warn!("{}", err);
            ui.error(&err.to_string());
            Ok(InstallOutcome::Failed {
                exit_code: result.exit_code,
            })
        }
    }
}
