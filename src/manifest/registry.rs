//! Packaged Manifest
//!
//! Process-wide manifest of the bundled template directory, built on first
//! access and never rebuilt.

use once_cell::sync::Lazy;

use super::loader::load_manifest;
use super::types::Manifest;
use crate::common::error::ManifestError;
use crate::common::paths::packaged_dir;

/// Success and failure are both memoized; the directory is fixed, so a
/// retry within the same process cannot change the outcome.
static PACKAGED: Lazy<Result<Manifest, ManifestError>> =
    Lazy::new(|| load_manifest(&packaged_dir()));

impl Manifest {
    /// The manifest of the crate's bundled template directory
    ///
    /// Built at most once per process; safe to read from any number of
    /// threads afterwards. Changes to the directory are not observed until
    /// the process restarts.
    pub fn packaged() -> Result<&'static Manifest, &'static ManifestError> {
        PACKAGED.as_ref()
    }
}
