//! Package installation.

use crate::error::Result;
use crate::shell::{display_command, execute_inherited, CommandResult};

use super::probe::Requirement;

/// Packages the texture tools import, installed in this order.
pub const PACKAGES: [&str; 3] = ["imageio", "pillow", "requests"];

/// Arguments passed to the package manager.
pub fn install_args() -> Vec<&'static str> {
    std::iter::once("install").chain(PACKAGES).collect()
}

/// The install command as it would be typed in a shell.
pub fn install_command(package_manager: &Requirement) -> String {
    display_command(&package_manager.executable, &install_args())
}

/// Run the install with output going straight to the terminal.
pub fn install_packages(package_manager: &Requirement) -> Result<CommandResult> {
    tracing::info!("Running '{}'", install_command(package_manager));
    execute_inherited(&package_manager.executable, &install_args())
}
