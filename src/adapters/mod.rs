pub mod host;
pub mod launcher;
pub mod persistence;
