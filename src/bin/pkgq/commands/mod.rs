//! Command implementations

pub mod exists;
pub mod flags;
pub mod list;
pub mod show;
