//! Path Utilities
//!
//! Resolution of the bundled template directory.

use std::path::{Path, PathBuf};

/// Get the bundled template directory (`<crate root>/templates/`)
///
/// The location is fixed at compile time; the directory ships with the
/// crate and holds the template files plus the bundle metadata.
pub fn packaged_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}
