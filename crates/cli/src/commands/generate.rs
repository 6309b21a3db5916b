use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use jscgen_core::emit;
use jscgen_core::options::EmbedOptions;

use crate::resolve_root;

/// Generate the embedded-script fragment for the tree rooted at `root`.
///
/// With `output` set, the fragment is rendered into memory first and only
/// written out whole, so a failed run never leaves a truncated file behind.
/// Without it, the fragment streams to standard output (the historical
/// contract: the caller redirects stdout into the generated header).
pub fn generate_command(root: &str, options: &EmbedOptions, output: Option<&Path>) -> Result<()> {
    let root_path = resolve_root(root)?;

    match output {
        Some(path) => {
            let mut buf = Vec::new();
            let count = emit::generate(&root_path, options, &mut buf)
                .with_context(|| format!("Failed to embed scripts under {}", root_path.display()))?;
            fs::write(path, &buf)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;

            println!("Embedded {} script(s):", count);
            println!("  Root: {}", root_path.display());
            println!("  Output: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            emit::generate(&root_path, options, &mut lock)
                .with_context(|| format!("Failed to embed scripts under {}", root_path.display()))?;
            lock.flush().context("Failed to flush standard output")?;
        }
    }

    Ok(())
}
