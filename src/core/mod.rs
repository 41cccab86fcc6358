//! Core data model
//!
//! The types returned by registry queries:
//! - Package: one named registry entry with description, dependency
//!   resources, and build flags
//! - Resource: a versioned capability a package provides or requires

pub mod package;
pub mod resource;

pub use package::Package;
pub use resource::Resource;
