use crate::domain::RefreshMode;
use crate::ports::HostContext;
use path_clean::PathClean;
use std::cell::OnceCell;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Lazily resolved paths for the current host session.
///
/// Each value is computed from the host on first access and memoized until
/// [`PathResolver::refresh`] drops it. The repository root is always derived
/// from the solution directory, never set on its own.
pub struct PathResolver {
    host: Arc<dyn HostContext>,
    solution: OnceCell<Option<PathBuf>>,
    repo: OnceCell<Option<PathBuf>>,
    active_file: OnceCell<Option<PathBuf>>,
}

impl PathResolver {
    pub fn new(host: Arc<dyn HostContext>) -> Self {
        Self {
            host,
            solution: OnceCell::new(),
            repo: OnceCell::new(),
            active_file: OnceCell::new(),
        }
    }

    pub fn host(&self) -> &dyn HostContext {
        self.host.as_ref()
    }

    /// Directory containing the open solution
    pub fn solution_path(&self) -> Option<&Path> {
        self.solution
            .get_or_init(|| solution_dir(self.host.as_ref()))
            .as_deref()
    }

    /// Nearest ancestor of the solution directory (inclusive) holding `.git`
    pub fn repo_path(&self) -> Option<&Path> {
        self.repo
            .get_or_init(|| self.solution_path().and_then(find_repo_root))
            .as_deref()
    }

    /// Canonical path of the focused document
    pub fn active_file_path(&self) -> Option<&Path> {
        self.active_file
            .get_or_init(|| {
                self.host
                    .active_document()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| canonical_path(&p))
            })
            .as_deref()
    }

    pub fn refresh(&mut self, mode: RefreshMode) {
        debug!("Refreshing cached paths ({:?})", mode);
        match mode {
            RefreshMode::All => {
                self.solution.take();
                self.repo.take();
                self.active_file.take();
            }
            RefreshMode::Solution => {
                self.solution.take();
                self.repo.take();
            }
            RefreshMode::ActiveDocument => {
                self.active_file.take();
            }
        }
    }
}

fn solution_dir(host: &dyn HostContext) -> Option<PathBuf> {
    let solution = host
        .solution_file()
        .filter(|p| !p.as_os_str().is_empty())?
        .clean();

    // Folder workspaces report the directory itself
    if solution.is_dir() {
        return Some(solution);
    }

    solution
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Walk from `start` up to the filesystem root looking for a `.git` entry.
/// Both directories and `.git` files (worktrees, submodules) count.
///
/// `.` and `..` are resolved lexically first so the walk only visits real
/// ancestors.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let start = start.clean();
    let found = start
        .ancestors()
        .filter(|dir| !dir.as_os_str().is_empty())
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf);

    match &found {
        Some(root) => debug!("Found repository root {} for {}", root.display(), start.display()),
        None => debug!("No repository above {}", start.display()),
    }

    found
}

/// Resolve symlinks and the exact on-disk spelling of every component.
///
/// Paths that do not exist are returned unchanged.
pub fn canonical_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let resolved = match fs::canonicalize(path) {
        Ok(resolved) => strip_verbatim(resolved),
        Err(e) => {
            debug!("Failed to canonicalize {}: {}", path.display(), e);
            return path.to_path_buf();
        }
    };

    let mut exact = PathBuf::new();
    for component in resolved.components() {
        match component {
            Component::Normal(name) => {
                let on_disk = disk_name(&exact, name).unwrap_or_else(|| name.to_os_string());
                exact.push(on_disk);
            }
            other => exact.push(other.as_os_str()),
        }
    }
    exact
}

/// Name of the entry in `dir` matching `name`, exact match first, then
/// case-insensitively
fn disk_name(dir: &Path, name: &OsStr) -> Option<OsString> {
    let entries = fs::read_dir(dir).ok()?;
    let wanted = name.to_string_lossy().to_lowercase();

    let mut folded = None;
    for entry in entries.flatten() {
        let entry_name = entry.file_name();
        if entry_name == name {
            return Some(entry_name);
        }
        if folded.is_none() && entry_name.to_string_lossy().to_lowercase() == wanted {
            folded = Some(entry_name);
        }
    }
    folded
}

#[cfg(windows)]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    let s = path.to_string_lossy();
    if let Some(rest) = s.strip_prefix(r"\\?\UNC\") {
        return PathBuf::from(format!(r"\\{}", rest));
    }
    if let Some(rest) = s.strip_prefix(r"\\?\") {
        return PathBuf::from(rest);
    }
    path
}

#[cfg(not(windows))]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    path
}
