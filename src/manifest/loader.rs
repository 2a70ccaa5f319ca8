//! Manifest Loader
//!
//! Scans a template directory and builds the filename → path manifest.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::types::Manifest;
use crate::common::error::ManifestError;

/// Bundle metadata files that never appear as manifest keys
///
/// The template directory carries its npm-era metadata file and loader shim
/// alongside the templates themselves; both are filtered out by name.
pub const EXCLUDED_FILES: [&str; 2] = ["package.json", "soyfiles.js"];

/// Build the manifest for a template directory
///
/// One blocking directory read. Every plain-file entry except the
/// [`EXCLUDED_FILES`] becomes a key, mapped to the directory joined with
/// that name. Subdirectory entries are skipped. Either the full manifest is
/// produced or the scan fails with [`ManifestError::Unreadable`].
pub fn load_manifest(base_dir: &Path) -> Result<Manifest, ManifestError> {
    let unreadable = |source| ManifestError::Unreadable {
        path: base_dir.to_path_buf(),
        source,
    };

    let read_dir = fs::read_dir(base_dir).map_err(unreadable)?;

    let mut entries = HashMap::new();

    for entry in read_dir {
        let entry = entry.map_err(unreadable)?;

        // Directories are structure, not templates
        let file_type = entry.file_type().map_err(unreadable)?;
        if file_type.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!("Skipping non-UTF-8 entry name: {:?}", file_name);
            continue;
        };

        if EXCLUDED_FILES.contains(&name) {
            continue;
        }

        entries.insert(name.to_string(), base_dir.join(name));
    }

    let manifest = Manifest::new(entries);
    info!("Loaded {} templates from {:?}", manifest.len(), base_dir);
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_maps_every_template_to_joined_path() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.soy");
        touch(dir.path(), "b.soy");
        touch(dir.path(), "package.json");
        touch(dir.path(), "soyfiles.js");

        let manifest = load_manifest(dir.path()).unwrap();

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get("a.soy"), Some(dir.path().join("a.soy").as_path()));
        assert_eq!(manifest.get("b.soy"), Some(dir.path().join("b.soy").as_path()));
    }

    #[test]
    fn test_excluded_names_never_appear() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.soy");
        touch(dir.path(), "package.json");
        touch(dir.path(), "soyfiles.js");

        let manifest = load_manifest(dir.path()).unwrap();

        for name in EXCLUDED_FILES {
            assert!(!manifest.contains(name));
        }
        assert_eq!(manifest.names(), vec!["a.soy"]);
    }

    #[test]
    fn test_metadata_only_directory_yields_empty_manifest() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "package.json");
        touch(dir.path(), "soyfiles.js");

        let manifest = load_manifest(dir.path()).unwrap();

        assert!(manifest.is_empty());
    }

    #[test]
    fn test_empty_directory_yields_empty_manifest() {
        let dir = tempdir().unwrap();

        let manifest = load_manifest(dir.path()).unwrap();

        assert!(manifest.is_empty());
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.soy");
        std::fs::create_dir(dir.path().join("partials")).unwrap();

        let manifest = load_manifest(dir.path()).unwrap();

        assert_eq!(manifest.names(), vec!["a.soy"]);
        assert!(!manifest.contains("partials"));
    }

    #[test]
    fn test_non_template_files_are_included() {
        // The manifest keys on names, not extensions
        let dir = tempdir().unwrap();
        touch(dir.path(), "helpers.soy");
        touch(dir.path(), "README.md");

        let manifest = load_manifest(dir.path()).unwrap();

        assert_eq!(manifest.names(), vec!["README.md", "helpers.soy"]);
    }

    #[test]
    fn test_missing_directory_is_unreadable() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = load_manifest(&missing).unwrap_err();

        let ManifestError::Unreadable { path, .. } = err;
        assert_eq!(path, missing);
    }
}
