use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use tortoisegit_core::ports::{LaunchRequest, ProcessLauncher};
use tortoisegit_core::Invocation;
use tracing::debug;

/// Starts the tool as an independent process and forgets about it.
///
/// stdio is detached and the child handle is dropped without waiting, so
/// the tool keeps running after the caller exits.
#[derive(Debug, Default)]
pub struct DetachedLauncher;

impl DetachedLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLauncher for DetachedLauncher {
    fn launch(&self, req: &LaunchRequest) -> Result<()> {
        let mut cmd = Command::new(&req.program);
        apply_arguments(&mut cmd, &req.invocation);
        if let Some(dir) = &req.working_dir {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        detach(&mut cmd);

        let child = cmd
            .spawn()
            .with_context(|| format!("Failed to start {}", req.program.display()))?;
        debug!("Started {} (pid {})", req.program.display(), child.id());

        Ok(())
    }
}

/// Records nothing and starts nothing; used for `--dry-run`
#[derive(Debug, Default)]
pub struct DryRunLauncher;

impl ProcessLauncher for DryRunLauncher {
    fn launch(&self, req: &LaunchRequest) -> Result<()> {
        debug!("Dry run, not starting {}", req.program.display());
        Ok(())
    }
}

/// Human-readable form of a launch, as printed by `--dry-run`
pub fn render(req: &LaunchRequest) -> String {
    let mut line = format!("\"{}\" {}", req.program.display(), req.invocation);
    if let Some(dir) = &req.working_dir {
        line.push_str(&format!("  (in {})", dir.display()));
    }
    line
}

// TortoiseGitProc parses its own command line, so hand it over untouched
#[cfg(windows)]
fn apply_arguments(cmd: &mut Command, invocation: &Invocation) {
    use std::os::windows::process::CommandExt;
    cmd.raw_arg(invocation.arguments());
}

#[cfg(not(windows))]
fn apply_arguments(cmd: &mut Command, invocation: &Invocation) {
    cmd.args(invocation.argv());
}

#[cfg(windows)]
fn detach(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(unix)]
fn detach(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;
    cmd.process_group(0);
}

#[cfg(not(any(windows, unix)))]
fn detach(_cmd: &mut Command) {}
