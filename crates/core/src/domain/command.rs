use serde::{Deserialize, Serialize};
use std::fmt;

/// Which path a command operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandScope {
    /// Root of the git repository containing the solution
    Repository,
    /// Directory containing the solution file
    Solution,
    /// File focused in the editor
    File,
}

impl fmt::Display for CommandScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandScope::Repository => "repository",
            CommandScope::Solution => "solution",
            CommandScope::File => "file",
        };
        f.write_str(name)
    }
}

/// TortoiseGit action to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Status,
    Log,
    Commit,
    Blame,
    Diff,
    Revert,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Status,
        CommandKind::Log,
        CommandKind::Commit,
        CommandKind::Blame,
        CommandKind::Diff,
        CommandKind::Revert,
    ];

    /// Name passed to `TortoiseGitProc.exe /command:<name>`
    pub fn tool_command(&self) -> &'static str {
        match self {
            CommandKind::Status => "repostatus",
            CommandKind::Log => "log",
            CommandKind::Commit => "commit",
            CommandKind::Blame => "blame",
            CommandKind::Diff => "diff",
            CommandKind::Revert => "revert",
        }
    }

    /// Commands that only make sense against a single file
    pub fn requires_file_scope(&self) -> bool {
        matches!(
            self,
            CommandKind::Blame | CommandKind::Diff | CommandKind::Revert
        )
    }

    pub fn supports(&self, scope: CommandScope) -> bool {
        !self.requires_file_scope() || scope == CommandScope::File
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::Status => "status",
            CommandKind::Log => "log",
            CommandKind::Commit => "commit",
            CommandKind::Blame => "blame",
            CommandKind::Diff => "diff",
            CommandKind::Revert => "revert",
        };
        f.write_str(name)
    }
}

/// Which cached paths to drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    /// Everything: solution, repository and active file
    #[default]
    All,
    /// Solution and repository paths
    Solution,
    /// Active file path only
    ActiveDocument,
}
