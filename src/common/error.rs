//! Error Types
//!
//! The single failure mode of manifest construction.

use std::path::PathBuf;

/// Error raised while building the template manifest
///
/// There is no partial-result mode: either the full directory listing is
/// read and the manifest produced, or construction fails with this error.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read template directory {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
