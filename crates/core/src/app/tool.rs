use crate::ports::AppConfig;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Finds the TortoiseGitProc executable among ordered candidates.
///
/// The first candidate that exists as a file wins. The lookup happens once
/// and is memoized for the lifetime of the locator.
#[derive(Debug)]
pub struct ToolLocator {
    candidates: Vec<PathBuf>,
    located: OnceCell<Option<PathBuf>>,
}

impl ToolLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            located: OnceCell::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.tool_candidates())
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn locate(&self) -> Option<&Path> {
        self.located
            .get_or_init(|| {
                let found = self.candidates.iter().find(|p| p.is_file()).cloned();
                match &found {
                    Some(path) => debug!("Using TortoiseGitProc at {}", path.display()),
                    None => warn!(
                        "TortoiseGitProc not found (checked {} locations)",
                        self.candidates.len()
                    ),
                }
                found
            })
            .as_deref()
    }
}
