//! Generation options.
//!
//! Everything that the original hard-coded — which extensions count as
//! script files, which relative path is the self-test harness to skip, and
//! the names baked into the emitted C — lives here as data, so frontends can
//! override any of it. The defaults reproduce the historical output exactly.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Options controlling discovery and rendering.
///
/// Serializable so a frontend can load a full option set from JSON; missing
/// fields fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmbedOptions {
    /// File extensions (without the leading dot) treated as script files.
    pub extensions: Vec<String>,
    /// Relative paths (forward-slash form) skipped during discovery.
    ///
    /// Removal is best-effort: an entry naming a file that does not exist in
    /// the tree is simply ignored.
    pub exclude: Vec<String>,
    /// Namespace prefix for every generated array identifier.
    pub prefix: String,
    /// Name of the emitted size macro.
    pub size_macro: String,
    /// C type of the emitted table entries.
    pub table_type: String,
    /// Name of the emitted table variable.
    pub table_name: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["js".to_string()],
            exclude: vec!["r2dec-test.js".to_string()],
            prefix: "jsc_".to_string(),
            size_macro: "R2_JSC_SIZE".to_string(),
            table_type: "R2JSC".to_string(),
            table_name: "r_jsc_file".to_string(),
        }
    }
}

impl EmbedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to replace the extension filter.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Builder-style helper to replace the exclusion list.
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Builder-style helper to replace the identifier prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Whether `path` has one of the recognized script extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.extensions.iter().any(|e| e == ext),
            None => false,
        }
    }

    /// Whether the normalized relative name is on the exclusion list.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|e| e == name)
    }
}
