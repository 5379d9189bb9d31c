pub mod host;
pub mod launcher;
pub mod persistence;

// Re-exports
pub use host::*;
pub use launcher::*;
pub use persistence::*;
