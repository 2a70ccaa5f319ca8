//! Manifest Types
//!
//! The immutable filename → path mapping exposed by this crate.

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Immutable mapping from bundled template filename to its absolute path
///
/// Built once by the loader; offers no mutation. Serializes as a JSON
/// object of filename → path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: HashMap<String, PathBuf>,
}

impl Manifest {
    pub(crate) fn new(entries: HashMap<String, PathBuf>) -> Self {
        Self { entries }
    }

    /// Look up a template path by filename
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    /// Whether a template with this filename is bundled
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of bundled templates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All bundled filenames, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over (filename, path) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }
}
