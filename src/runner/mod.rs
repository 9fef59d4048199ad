//! Checkpoint orchestration.
//!
//! - [`workflow`] - The `CheckRuntime` → `CheckPackageManager` → `Close` state machine

pub mod workflow;

pub use workflow::{
    default_context, InstallOutcome, Prober, ProberContext, RunOptions, RunReport, Stage,
};
