use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tortoisegit_core::{CommandKind, CommandScope};

#[derive(Parser, Debug, PartialEq)]
#[command(name = "tgit")]
#[command(about = "Open TortoiseGit dialogs for the current repository, solution or file")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Open solution file (or workspace folder)
    #[arg(long, global = true)]
    pub solution: Option<PathBuf>,

    /// Document focused in the editor
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Current editor line, used by blame
    #[arg(long, global = true)]
    pub line: Option<String>,

    /// TortoiseGitProc executable (overrides config)
    #[arg(long, global = true)]
    pub tool: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum CliCommand {
    /// Launch a TortoiseGit dialog
    Run {
        scope: ScopeArg,
        command: CommandArg,

        /// Print the command line instead of launching
        #[arg(long)]
        dry_run: bool,
    },
    /// Show every menu entry with its current state and keybindings
    Menu,
    /// Show the resolved repository, solution and file paths
    Paths,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeArg {
    #[value(alias = "repo")]
    Repository,
    #[value(alias = "sln")]
    Solution,
    File,
}

impl From<ScopeArg> for CommandScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Repository => CommandScope::Repository,
            ScopeArg::Solution => CommandScope::Solution,
            ScopeArg::File => CommandScope::File,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandArg {
    Status,
    Log,
    Commit,
    Blame,
    Diff,
    Revert,
}

impl From<CommandArg> for CommandKind {
    fn from(arg: CommandArg) -> Self {
        match arg {
            CommandArg::Status => CommandKind::Status,
            CommandArg::Log => CommandKind::Log,
            CommandArg::Commit => CommandKind::Commit,
            CommandArg::Blame => CommandKind::Blame,
            CommandArg::Diff => CommandKind::Diff,
            CommandArg::Revert => CommandKind::Revert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run() {
        let args = CliArgs::parse_from(["tgit", "run", "repository", "status"]);
        assert_eq!(
            args.command,
            CliCommand::Run {
                scope: ScopeArg::Repository,
                command: CommandArg::Status,
                dry_run: false,
            }
        );
        assert_eq!(args.solution, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_cli_parse_global_options_after_subcommand() {
        let args = CliArgs::parse_from([
            "tgit",
            "run",
            "file",
            "blame",
            "--file",
            "/proj/src/main.cpp",
            "--line",
            "42",
            "--dry-run",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("/proj/src/main.cpp")));
        assert_eq!(args.line.as_deref(), Some("42"));
        assert!(matches!(args.command, CliCommand::Run { dry_run: true, .. }));
    }

    #[test]
    fn test_cli_scope_aliases() {
        let args = CliArgs::parse_from(["tgit", "run", "repo", "log"]);
        assert!(matches!(
            args.command,
            CliCommand::Run {
                scope: ScopeArg::Repository,
                ..
            }
        ));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let args = CliArgs::parse_from([
            "tgit",
            "--config",
            "/custom/tgit.toml",
            "--solution",
            "/proj/app.sln",
            "menu",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/tgit.toml")));
        assert_eq!(args.solution, Some(PathBuf::from("/proj/app.sln")));
        assert_eq!(args.command, CliCommand::Menu);
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(CliArgs::try_parse_from(["tgit", "run", "file", "push"]).is_err());
    }

    #[test]
    fn test_arg_conversions() {
        assert_eq!(CommandScope::from(ScopeArg::File), CommandScope::File);
        assert_eq!(CommandKind::from(CommandArg::Revert), CommandKind::Revert);
    }
}
