//! jscgen-core
//!
//! Core library for embedding script assets as C byte-array literals.
//!
//! This crate implements the whole pipeline: discovering script files under
//! a root directory, deriving a unique C identifier for each one, rendering
//! every file's raw bytes as a `const unsigned char` array literal, and
//! rendering the static lookup table that maps relative paths to those
//! arrays.
//!
//! The goal is to keep all substantive logic here so it is fully testable
//! and reusable from multiple frontends (CLI, build scripts, etc.).

pub mod emit;
pub mod error;
pub mod ident;
pub mod options;
pub mod scan;

pub use error::{EmbedError, EmbedResult};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
