use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use jscgen::commands::generate_command;
use jscgen::resolve_options;

/// Embed script assets as C byte-array literals.
///
/// This CLI is a thin wrapper around `jscgen-core` (exposed in code as
/// `jscgen_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
///
/// The generated fragment goes to standard output by default, matching the
/// historical workflow of redirecting it into a generated header.
#[derive(Parser, Debug)]
#[command(
    name = "jscgen",
    version,
    about = "Embed script assets as C byte-array literals",
    long_about = None
)]
struct Cli {
    /// Root directory to scan for script files.
    root: String,

    /// File extension to embed, without the dot (repeatable). Defaults to `js`.
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Relative path to skip (repeatable). Defaults to `r2dec-test.js`.
    #[arg(long = "exclude", value_name = "PATH")]
    exclude: Vec<String>,

    /// Namespace prefix for the generated array identifiers.
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// JSON file with generation options. Flags override its values.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the generated fragment to this file instead of standard output.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = resolve_options(
        cli.config.as_deref(),
        &cli.extensions,
        &cli.exclude,
        cli.prefix.as_deref(),
    )?;

    generate_command(&cli.root, &options, cli.output.as_deref())?;

    Ok(())
}
