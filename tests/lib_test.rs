//! Library integration tests.

use texkit::requirements::{ProbeStatus, Requirement, Toolchain};
use texkit::runner::{InstallOutcome, Prober, ProberContext, RunOptions};
use texkit::shell::CommandResult;
use texkit::ui::MockUI;
use texkit::TexkitError;
use std::time::Duration;

#[test]
fn error_types_are_public() {
    let err = TexkitError::NotFound {
        command: "python".into(),
    };
    assert!(err.to_string().contains("python"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> texkit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use texkit::cli::Cli;

    let cli = Cli::parse_from(["texkit", "--dry-run"]);
    assert!(cli.dry_run);
}

#[test]
fn prober_runs_against_custom_toolchain() {
    let toolchain = Toolchain {
        runtime: Requirement::new("Python", "python3"),
        package_manager: Requirement::new("pip", "pip3"),
        download_url: "https://example.com/python".to_string(),
    };
    let probe_fn = |req: &Requirement| {
        if req.executable == "python3" {
            ProbeStatus::Found { version: None }
        } else {
            ProbeStatus::Failed { exit_code: Some(127) }
        }
    };
    let install_fn = |_: &Requirement| -> texkit::Result<CommandResult> {
        Ok(CommandResult::success(
            String::new(),
            String::new(),
            Duration::ZERO,
        ))
    };
    let ctx = ProberContext {
        probe: &probe_fn,
        install: &install_fn,
    };
    let mut ui = MockUI::new();

    let report = Prober::new(&toolchain, RunOptions::default(), ctx)
        .run(&mut ui)
        .unwrap();

    assert_eq!(report.install, InstallOutcome::NotAttempted);
    assert!(ui.has_success("Python is installed"));
    assert!(ui.has_hint("https://example.com/python"));
}

#[test]
fn index_log_round_trips_through_public_api() {
    use texkit::dds::{entry_name, parse_index, render_index, IndexEntry};

    let entries = vec![IndexEntry {
        name: entry_name(12),
        offset: 4096,
        format: "DXT5".to_string(),
    }];
    let text = render_index("global.pab.xen", &entries);

    assert!(text.contains("Offset: 4096 bytes (0x1000)"));
    assert_eq!(parse_index(&text), vec![("dds_012.dds".to_string(), 4096)]);
}

#[test]
fn commands_run_through_the_trait() {
    use texkit::cli::args::UnpackArgs;
    use texkit::cli::commands::{Command, UnpackCommand};

    let mut ui = MockUI::new();
    let err = UnpackCommand::new(UnpackArgs::default())
        .execute(&mut ui)
        .unwrap_err();

    assert!(matches!(err, TexkitError::MissingInput { .. }));
    assert_eq!(ui.headers(), vec!["Guitar Hero III PC Texture Unpacker"]);
}
