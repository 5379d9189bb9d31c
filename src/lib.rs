//! tortoisegit-commands
//!
//! Adapters, configuration and the command line front end around
//! `tortoisegit-core`. The `tgit` binary plays the host role an IDE would
//! otherwise fill.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
