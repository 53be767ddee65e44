//! Core functionality for the build tools
//!
//! Contains the manifest version patcher and the header include prefixer.

pub mod includes;
pub mod manifest;

pub use includes::IncludePrefixer;
pub use manifest::ManifestPatcher;
