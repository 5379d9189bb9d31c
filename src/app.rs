use anyhow::Result;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tortoisegit_core::app::{Outcome, Session, ToolLocator};
use tortoisegit_core::ports::{AppConfig, ProcessLauncher};
use tortoisegit_core::{CommandKind, CommandScope, CoreError, MenuCommand};
use tracing::{error, info};

use crate::adapters::host::CliHost;
use crate::adapters::launcher::{self, DetachedLauncher, DryRunLauncher};
use crate::adapters::persistence::FileConfigStore;
use crate::cli::{CliArgs, CliCommand};
use crate::config;

/// Exit code for a scope/command pairing that can never be dispatched
pub const EXIT_UNSUPPORTED: u8 = 2;

/// Wire the adapters together and run one CLI request.
///
/// Returns the process exit code. Missing paths, a missing tool and launch
/// failures all exit 0: they are logged, not surfaced.
pub fn run<W: Write>(cli_args: CliArgs, out: &mut W) -> Result<u8> {
    let store = match &cli_args.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new()?,
    };
    info!("Using config at {}", store.path().display());

    let config = config::from_cli_and_store(&cli_args, &store)?;
    let host = Arc::new(CliHost::from_args(&cli_args)?);

    // Only a real `run` may start processes
    let launcher: Arc<dyn ProcessLauncher> = match &cli_args.command {
        CliCommand::Run { dry_run: false, .. } => Arc::new(DetachedLauncher::new()),
        _ => Arc::new(DryRunLauncher),
    };
    let session = Session::new(host, launcher, ToolLocator::from_config(&config));

    match cli_args.command {
        CliCommand::Run {
            scope,
            command,
            dry_run,
        } => run_command(&session, scope.into(), command.into(), dry_run, out),
        CliCommand::Menu => {
            print_menu(&session, &config, out)?;
            Ok(0)
        }
        CliCommand::Paths => {
            print_paths(&session, out)?;
            Ok(0)
        }
    }
}

fn run_command<W: Write>(
    session: &Session,
    scope: CommandScope,
    command: CommandKind,
    dry_run: bool,
    out: &mut W,
) -> Result<u8> {
    let outcome = match session.execute(scope, command) {
        Ok(outcome) => outcome,
        Err(e @ CoreError::UnsupportedScope { .. }) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return Ok(EXIT_UNSUPPORTED);
        }
        Err(e) => return Err(e.into()),
    };

    match outcome {
        Outcome::Launched(req) => {
            if dry_run {
                writeln!(out, "{}", launcher::render(&req))?;
            }
        }
        Outcome::NoPath => info!("No {} path; nothing to do", scope),
        Outcome::ToolNotFound(invocation) => {
            if dry_run {
                writeln!(out, "<TortoiseGitProc not found> {}", invocation)?;
            }
        }
        Outcome::LaunchFailed(_) => {}
    }

    Ok(0)
}

fn print_menu<W: Write>(session: &Session, config: &AppConfig, out: &mut W) -> Result<()> {
    for command in MenuCommand::ALL {
        let state = session.describe(command);
        writeln!(
            out,
            "{:<12} {:<8} {:<9} {:<24} {}",
            command.name(),
            if state.visible { "visible" } else { "hidden" },
            if state.enabled { "enabled" } else { "disabled" },
            state.label,
            config.keybindings_for(command).join(", ")
        )?;
    }
    Ok(())
}

fn print_paths<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let paths = session.paths();
    writeln!(out, "repository: {}", display(paths.repo_path()))?;
    writeln!(out, "solution:   {}", display(paths.solution_path()))?;
    writeln!(out, "file:       {}", display(paths.active_file_path()))?;
    Ok(())
}

fn display(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "<none>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_absent_path() {
        assert_eq!(display(None), "<none>");
        assert_eq!(display(Some(Path::new("/proj"))), "/proj");
    }
}
