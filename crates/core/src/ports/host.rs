use std::path::PathBuf;

/// Read-only view of the host application's state.
///
/// Every accessor is a pull-based query evaluated synchronously when a
/// command is described or executed; implementations should report exactly
/// what the host currently shows and leave caching to the caller.
pub trait HostContext: Send + Sync {
    /// Full path of the open solution file, or of the workspace folder when
    /// the host has a folder open instead of a solution
    fn solution_file(&self) -> Option<PathBuf>;

    /// Full path of the document focused in the editor
    fn active_document(&self) -> Option<PathBuf>;

    /// Current line of the editor selection, as loosely reported by the host
    fn selection_line(&self) -> Option<String>;
}
