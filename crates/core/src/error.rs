use crate::domain::{CommandKind, CommandScope};
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// Contract violation: the command can only run against a single file.
    #[error("{command} is not supported for {scope} scope")]
    UnsupportedScope {
        scope: CommandScope,
        command: CommandKind,
    },

    #[error("Unknown menu command: {name}")]
    UnknownMenuCommand { name: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
