use super::command::{CommandKind, CommandScope};
use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// Placeholder shown in file command labels when no file is active
pub const NO_FILE_PLACEHOLDER: &str = "<file>";

/// Command group a menu entry is registered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuGroup {
    /// The top-level "TortoiseGit" menu
    Main,
    /// Repository-wide commands
    Git,
    /// Commands acting on the active file
    GitFile,
}

/// Every command the extension registers with the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    Root,
    Status,
    Log,
    Commit,
    LogFile,
    BlameFile,
    DiffFile,
    RevertFile,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 8] = [
        MenuCommand::Root,
        MenuCommand::Status,
        MenuCommand::Log,
        MenuCommand::Commit,
        MenuCommand::LogFile,
        MenuCommand::BlameFile,
        MenuCommand::DiffFile,
        MenuCommand::RevertFile,
    ];

    pub fn group(&self) -> MenuGroup {
        match self {
            MenuCommand::Root => MenuGroup::Main,
            MenuCommand::Status | MenuCommand::Log | MenuCommand::Commit => MenuGroup::Git,
            MenuCommand::LogFile
            | MenuCommand::BlameFile
            | MenuCommand::DiffFile
            | MenuCommand::RevertFile => MenuGroup::GitFile,
        }
    }

    /// Numeric id within the command's group
    pub fn id(&self) -> u32 {
        match self {
            MenuCommand::Root => 0x1020,
            MenuCommand::Status | MenuCommand::LogFile => 0x0100,
            MenuCommand::Log | MenuCommand::BlameFile => 0x0200,
            MenuCommand::Commit | MenuCommand::DiffFile => 0x0300,
            MenuCommand::RevertFile => 0x0400,
        }
    }

    /// What the command dispatches; `None` for the menu root
    pub fn binding(&self) -> Option<(CommandScope, CommandKind)> {
        match self {
            MenuCommand::Root => None,
            MenuCommand::Status => Some((CommandScope::Repository, CommandKind::Status)),
            MenuCommand::Log => Some((CommandScope::Repository, CommandKind::Log)),
            MenuCommand::Commit => Some((CommandScope::Repository, CommandKind::Commit)),
            MenuCommand::LogFile => Some((CommandScope::File, CommandKind::Log)),
            MenuCommand::BlameFile => Some((CommandScope::File, CommandKind::Blame)),
            MenuCommand::DiffFile => Some((CommandScope::File, CommandKind::Diff)),
            MenuCommand::RevertFile => Some((CommandScope::File, CommandKind::Revert)),
        }
    }

    pub fn is_file_command(&self) -> bool {
        self.group() == MenuGroup::GitFile
    }

    /// Label for the command. File commands substitute `file_name`.
    pub fn label(&self, file_name: &str) -> String {
        match self {
            MenuCommand::Root => "TortoiseGit".to_string(),
            MenuCommand::Status => "Status...".to_string(),
            MenuCommand::Log => "Log...".to_string(),
            MenuCommand::Commit => "Commit...".to_string(),
            MenuCommand::LogFile => format!("Log {}...", file_name),
            MenuCommand::BlameFile => format!("Blame {}...", file_name),
            MenuCommand::DiffFile => format!("Diff {}...", file_name),
            MenuCommand::RevertFile => format!("Revert {}...", file_name),
        }
    }

    /// Chords bound to the command unless configuration overrides them.
    /// Each chord is registered for both the global and the text editor scope.
    pub fn default_keybindings(&self) -> Vec<String> {
        let chords: &[&str] = match self {
            MenuCommand::Status => &["Ctrl+G,S", "Ctrl+G,Ctrl+S"],
            MenuCommand::Commit => &["Ctrl+G,C", "Ctrl+G,Ctrl+C"],
            MenuCommand::LogFile => &["Ctrl+G,L", "Ctrl+G,Ctrl+L"],
            MenuCommand::BlameFile => &["Ctrl+G,B", "Ctrl+G,Ctrl+B"],
            MenuCommand::DiffFile => &["Ctrl+G,D", "Ctrl+G,Ctrl+D"],
            MenuCommand::Root | MenuCommand::Log | MenuCommand::RevertFile => &[],
        };

        chords
            .iter()
            .flat_map(|chord| [format!("Global::{}", chord), format!("Text Editor::{}", chord)])
            .collect()
    }

    /// Stable name used in configuration files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            MenuCommand::Root => "root",
            MenuCommand::Status => "status",
            MenuCommand::Log => "log",
            MenuCommand::Commit => "commit",
            MenuCommand::LogFile => "log-file",
            MenuCommand::BlameFile => "blame-file",
            MenuCommand::DiffFile => "diff-file",
            MenuCommand::RevertFile => "revert-file",
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MenuCommand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuCommand::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownMenuCommand {
                name: s.to_string(),
            })
    }
}

/// What the host should render for a command right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub visible: bool,
    pub enabled: bool,
    pub label: String,
}
