use crate::domain::Invocation;
use anyhow::Result;
use std::path::PathBuf;

/// Everything needed to start the external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub program: PathBuf,
    pub invocation: Invocation,
    /// Inherited from the caller when `None`
    pub working_dir: Option<PathBuf>,
}

/// Port for starting the external tool
pub trait ProcessLauncher: Send + Sync {
    /// Start the process and return immediately. Implementations must not
    /// wait for the child to exit.
    fn launch(&self, req: &LaunchRequest) -> Result<()>;
}
