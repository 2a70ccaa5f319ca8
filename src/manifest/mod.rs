//! Template Manifest
//!
//! Scans the bundled template directory and exposes the immutable
//! filename → path manifest.

pub mod loader;
pub mod registry;
pub mod types;

pub use loader::{load_manifest, EXCLUDED_FILES};
pub use types::Manifest;
