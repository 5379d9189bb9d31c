pub mod command;
pub mod invocation;
pub mod menu;

// Re-exports for convenience
pub use command::*;
pub use invocation::*;
pub use menu::*;
