use super::paths::PathResolver;
use super::tool::ToolLocator;
use crate::domain::{CommandKind, CommandScope, Invocation};
use crate::error::{CoreError, Result};
use crate::ports::{HostContext, LaunchRequest, ProcessLauncher};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What a dispatch ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The tool was started
    Launched(LaunchRequest),
    /// Nothing to act on for the requested scope
    NoPath,
    /// No executable at any candidate location
    ToolNotFound(Invocation),
    /// The launcher reported an error; it has already been logged
    LaunchFailed(LaunchRequest),
}

impl Outcome {
    pub fn is_launched(&self) -> bool {
        matches!(self, Outcome::Launched(_))
    }
}

/// Turns a (scope, command) pair into a TortoiseGit launch.
///
/// Only an invalid pairing is an error. Everything else that keeps the tool
/// from starting is reported through [`Outcome`] and logged, never raised.
pub struct Dispatcher {
    launcher: Arc<dyn ProcessLauncher>,
    locator: ToolLocator,
}

impl Dispatcher {
    pub fn new(launcher: Arc<dyn ProcessLauncher>, locator: ToolLocator) -> Self {
        Self { launcher, locator }
    }

    /// Resolve the path for `scope`, build the arguments and start the tool
    /// without waiting for it.
    pub fn execute(
        &self,
        paths: &PathResolver,
        scope: CommandScope,
        command: CommandKind,
    ) -> Result<Outcome> {
        let invocation = match self.prepare(paths, scope, command)? {
            Some(invocation) => invocation,
            None => return Ok(Outcome::NoPath),
        };

        let program = match self.locator.locate() {
            Some(program) => program.to_path_buf(),
            None => {
                warn!("Cannot run {}: TortoiseGitProc is not installed", command);
                return Ok(Outcome::ToolNotFound(invocation));
            }
        };

        let request = LaunchRequest {
            program,
            invocation,
            working_dir: paths.solution_path().map(Path::to_path_buf),
        };

        info!(
            "Launching {} {}",
            request.program.display(),
            request.invocation
        );

        match self.launcher.launch(&request) {
            Ok(()) => Ok(Outcome::Launched(request)),
            Err(e) => {
                warn!("Failed to launch {}: {:#}", request.program.display(), e);
                Ok(Outcome::LaunchFailed(request))
            }
        }
    }

    /// Validate the pairing and build the invocation, or `None` when the
    /// scope has no path right now
    pub fn prepare(
        &self,
        paths: &PathResolver,
        scope: CommandScope,
        command: CommandKind,
    ) -> Result<Option<Invocation>> {
        if !command.supports(scope) {
            return Err(CoreError::UnsupportedScope { scope, command });
        }

        let path = match scoped_path(paths, scope) {
            Some(path) => path,
            None => {
                debug!("No {} path, skipping {}", scope, command);
                return Ok(None);
            }
        };

        let line = if command == CommandKind::Blame {
            current_line(paths.host())
        } else {
            0
        };

        Ok(Some(Invocation::new(command, path, line)))
    }
}

fn scoped_path(paths: &PathResolver, scope: CommandScope) -> Option<&Path> {
    let path = match scope {
        CommandScope::Repository => paths.repo_path(),
        CommandScope::Solution => paths.solution_path(),
        CommandScope::File => paths.active_file_path(),
    };
    path.filter(|p| !p.as_os_str().is_empty())
}

/// 1-based editor line for blame; 0 when the host cannot tell
fn current_line(host: &dyn HostContext) -> u32 {
    parse_line(host.selection_line().as_deref())
}

/// Parse a loosely typed line number, falling back to 0 for anything that
/// is not a positive integer
pub fn parse_line(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|line| *line >= 1)
        .unwrap_or(0)
}
