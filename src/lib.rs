//! Packaged Soy template files.
//!
//! Scans the bundled template directory and exposes an immutable
//! filename → absolute path manifest.

pub mod common;
pub mod manifest;

pub use common::error::ManifestError;
pub use common::paths::packaged_dir;
pub use manifest::{load_manifest, Manifest, EXCLUDED_FILES};
