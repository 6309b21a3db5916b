//! Helper library for the `jscgen` binary.
//!
//! The binary itself is a thin argument parser; the pieces that benefit from
//! direct testing (root resolution, option assembly) live here, and the
//! command body lives in [`commands`].

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use jscgen_core::options::EmbedOptions;

pub mod commands;

/// Resolve the scan root to an absolute directory path.
///
/// Relative paths are resolved against the current working directory. The
/// root must already exist as a directory; there is nothing useful to
/// generate from a missing tree.
pub fn resolve_root(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().context("Failed to get current directory")?.join(path)
    };

    if !abs.is_dir() {
        bail!("Root is not a directory: {}", abs.display());
    }
    Ok(abs)
}

/// Assemble [`EmbedOptions`] from an optional JSON config file plus flag
/// overrides. Flags win over the file; empty flag lists keep the file (or
/// default) values.
pub fn resolve_options(
    config: Option<&Path>,
    extensions: &[String],
    exclude: &[String],
    prefix: Option<&str>,
) -> Result<EmbedOptions> {
    let mut options = match config {
        Some(path) => {
            let body = fs::read_to_string(path)
                .with_context(|| format!("Failed to read options file: {}", path.display()))?;
            serde_json::from_str(&body)
                .with_context(|| format!("Failed to parse options JSON: {}", path.display()))?
        }
        None => EmbedOptions::default(),
    };

    if !extensions.is_empty() {
        options.extensions = extensions.to_vec();
    }
    if !exclude.is_empty() {
        options.exclude = exclude.to_vec();
    }
    if let Some(prefix) = prefix {
        options.prefix = prefix.to_string();
    }
    Ok(options)
}
