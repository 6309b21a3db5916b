//! Input-tree discovery.
//!
//! Walks the root directory, keeps regular files whose extension matches the
//! configured filter, drops excluded names, and sorts the survivors by their
//! normalized relative path. Sorting makes the generated fragment identical
//! across platforms and runs; directory-walk order is not stable and nothing
//! downstream may depend on it.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::EmbedResult;
use crate::options::EmbedOptions;

/// A discovered input file.
///
/// Immutable once discovered: the lifecycle is scan, read, emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Absolute (or root-joined) path used for reading the contents.
    pub abs_path: PathBuf,
    /// Path relative to the scan root.
    pub rel_path: PathBuf,
}

impl InputFile {
    /// The relative path with separators normalized to forward slashes.
    ///
    /// This is the `name` field of the emitted table entry and the form the
    /// exclusion list is matched against, regardless of the host
    /// filesystem's native separator.
    pub fn normalized_name(&self) -> String {
        let parts: Vec<String> = self
            .rel_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        parts.join("/")
    }
}

/// Discover all embeddable files under `root`.
///
/// Exclusion is best-effort: entries on the exclusion list are skipped if
/// present and silently ignored if absent.
pub fn discover(root: &Path, options: &EmbedOptions) -> EmbedResult<Vec<InputFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !options.matches_extension(entry.path()) {
            continue;
        }

        // Walk entries always live under `root`; keep the full path if the
        // prefix ever fails to strip.
        let rel_path = match entry.path().strip_prefix(root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => entry.path().to_path_buf(),
        };

        let file = InputFile { abs_path: entry.into_path(), rel_path };
        if options.is_excluded(&file.normalized_name()) {
            continue;
        }
        files.push(file);
    }

    files.sort_by_key(|f| f.normalized_name());
    Ok(files)
}
