//! Error types for loading, parsing and resolving documents.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while stitching a document tree.
#[derive(Error, Debug)]
pub enum StitchError {
    /// A referenced file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A referenced file was read but is not valid JSON.
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The reference chain nested deeper than the configured limit.
    /// Only produced when `ResolverConfig::max_depth` is set.
    #[error("reference '{reference}' exceeds maximum nesting depth of {max_depth}")]
    DepthExceeded { reference: String, max_depth: usize },

    /// An override could not be parsed from its `POINTER=VALUE` form.
    #[error("invalid override '{0}': expected POINTER=VALUE with POINTER starting with '/'")]
    InvalidOverride(String),

    /// An override pointer does not address an existing value.
    #[error("override target not found: {0}")]
    OverrideTarget(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StitchError {
    /// True when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StitchError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Convenience alias used throughout stitch-core.
pub type Result<T> = std::result::Result<T, StitchError>;
