use super::command::CommandKind;
use std::fmt;
use std::path::{Path, PathBuf};

/// A fully resolved TortoiseGit call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: CommandKind,
    pub path: PathBuf,
    /// Only set for blame
    pub line: Option<u32>,
}

impl Invocation {
    /// Build the invocation for `command` against `path`. `line` is only
    /// carried for blame; every other command ignores it.
    pub fn new(command: CommandKind, path: &Path, line: u32) -> Self {
        Self {
            command,
            path: path.to_path_buf(),
            line: (command == CommandKind::Blame).then_some(line),
        }
    }

    /// The single argument string TortoiseGitProc expects, e.g.
    /// `/command:log /path:"C:\src\proj"`
    pub fn arguments(&self) -> String {
        let mut args = format!(
            "/command:{} /path:\"{}\"",
            self.command.tool_command(),
            self.path.display()
        );
        if let Some(line) = self.line {
            args.push_str(&format!(" /line:{}", line));
        }
        args
    }

    /// Same arguments split into argv tokens, for platforms where the
    /// process is not handed a raw command line.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec![
            format!("/command:{}", self.command.tool_command()),
            format!("/path:{}", self.path.display()),
        ];
        if let Some(line) = self.line {
            argv.push(format!("/line:{}", line));
        }
        argv
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.arguments())
    }
}
