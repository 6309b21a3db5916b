//! Error types shared by the embedding pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for script-embedding operations.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// An input file could not be opened or fully read.
    ///
    /// Generation aborts immediately; any output produced so far must not be
    /// treated as valid.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory walk itself failed (unreadable directory, broken link
    /// loop, etc.).
    #[error("Failed to scan input tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// Two input files map onto the same generated identifier.
    ///
    /// The substitution scheme (separators, dots and hyphens all become
    /// underscores) is not injective for arbitrary names, e.g. `a-b.js` and
    /// `a.b.js`. A duplicate would only surface as a compile error in the
    /// host build; generation refuses up front and names both offenders.
    #[error("Identifier `{ident}` is generated for both `{first}` and `{second}`; rename one of them")]
    DuplicateIdentifier { ident: String, first: String, second: String },

    /// Writing the generated fragment failed.
    #[error("Failed to write generated output: {0}")]
    Write(#[from] std::io::Error),
}

/// Convenience result type for embedding operations.
pub type EmbedResult<T> = Result<T, EmbedError>;
