use crate::cli::CliArgs;
use anyhow::{Context, Result};
use path_clean::PathClean;
use std::path::{Path, PathBuf};
use tortoisegit_core::ports::HostContext;

/// Host state supplied on the command line.
///
/// Stands in for an IDE: the solution, active document and selection line
/// are fixed for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliHost {
    pub solution: Option<PathBuf>,
    pub document: Option<PathBuf>,
    pub line: Option<String>,
}

impl CliHost {
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Ok(Self {
            solution: args.solution.as_deref().map(|p| absolutize(&cwd, p)),
            document: args.file.as_deref().map(|p| absolutize(&cwd, p)),
            line: args.line.clone(),
        })
    }
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        return path.to_path_buf();
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    absolute.clean()
}

impl HostContext for CliHost {
    fn solution_file(&self) -> Option<PathBuf> {
        self.solution.clone()
    }

    fn active_document(&self) -> Option<PathBuf> {
        self.document.clone()
    }

    fn selection_line(&self) -> Option<String> {
        self.line.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_relative_paths_are_made_absolute() -> Result<()> {
        let args = CliArgs::parse_from(["tgit", "--solution", "app.sln", "--file", "src/a.cpp", "paths"]);
        let host = CliHost::from_args(&args)?;
        let cwd = std::env::current_dir()?;

        assert_eq!(host.solution_file(), Some(cwd.join("app.sln")));
        assert_eq!(host.active_document(), Some(cwd.join("src/a.cpp")));
        assert_eq!(host.selection_line(), None);
        Ok(())
    }

    #[test]
    fn test_parent_segments_are_cleaned() -> Result<()> {
        let args = CliArgs::parse_from(["tgit", "--solution", "../proj/./app.sln", "paths"]);
        let host = CliHost::from_args(&args)?;
        let cwd = std::env::current_dir()?;

        let expected = cwd.parent().unwrap_or(&cwd).join("proj").join("app.sln");
        assert_eq!(host.solution_file(), Some(expected));
        Ok(())
    }

    #[test]
    fn test_absolute_paths_kept() -> Result<()> {
        let solution = std::env::temp_dir().join("app.sln");
        let host = CliHost::from_args(&CliArgs {
            solution: Some(solution.clone()),
            line: Some("12".to_string()),
            ..CliArgs::parse_from(["tgit", "menu"])
        })?;

        assert_eq!(host.solution_file(), Some(solution));
        assert_eq!(host.active_document(), None);
        assert_eq!(host.selection_line().as_deref(), Some("12"));
        Ok(())
    }
}
