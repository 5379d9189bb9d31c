//! tortoisegit-core - domain logic for launching TortoiseGit from a host application
//!
//! This crate contains the domain types, the ports (interfaces) a host has to
//! provide, and the application logic built on top of them: path resolution,
//! command dispatch and menu state. Process spawning and configuration files
//! are handled by adapters in the application crate.

pub mod domain;
pub mod ports;
pub mod app;
pub mod error;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
