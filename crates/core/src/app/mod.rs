pub mod dispatcher;
pub mod menu;
pub mod paths;
pub mod session;
pub mod tool;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use dispatcher::*;
pub use menu::*;
pub use paths::*;
pub use session::*;
pub use tool::*;
